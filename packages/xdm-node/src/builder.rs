use crate::config::NodeConfig;
use crate::delegate::{NameNodeDelegate, NodeDelegate, StructNodeDelegate, ValueNodeDelegate};
use crate::dewey::DeweyId;
use crate::error::{Error, Result};
use crate::ids::{NodeKey, Revision};
use crate::keys::{KeyAllocator, MonotonicKeys};
use crate::kind::Kind;
use crate::node::{AttributeNode, CommentNode, DocumentNode, ElementNode, PiNode, TextNode, XmlNode};
use crate::traits::Node;

/// Payload of a node about to be appended.
#[derive(Clone, Debug)]
pub enum NewNode {
    Element(NameNodeDelegate),
    Text(Vec<u8>),
    Comment(Vec<u8>),
    ProcessingInstruction {
        target: NameNodeDelegate,
        content: Vec<u8>,
    },
}

impl NewNode {
    pub fn kind(&self) -> Kind {
        match self {
            NewNode::Element(_) => Kind::Element,
            NewNode::Text(_) => Kind::Text,
            NewNode::Comment(_) => Kind::Comment,
            NewNode::ProcessingInstruction { .. } => Kind::ProcessingInstruction,
        }
    }
}

/// Creates fresh nodes for an editing operation and wires them into their neighbours.
///
/// Only the parent and the left neighbour are updated; propagating descendant counts further
/// up the ancestor chain is the caller's job.
#[derive(Debug)]
pub struct NodeBuilder<K: KeyAllocator = MonotonicKeys> {
    keys: K,
    config: NodeConfig,
    revision: Revision,
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new(MonotonicKeys::default(), NodeConfig::default(), 0)
    }
}

impl<K: KeyAllocator> NodeBuilder<K> {
    pub fn new(keys: K, config: NodeConfig, revision: Revision) -> Self {
        Self {
            keys,
            config,
            revision,
        }
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    fn identity(
        &mut self,
        parent_key: NodeKey,
        dewey_id: Option<DeweyId>,
    ) -> Result<NodeDelegate> {
        let key = self.keys.next_key()?;
        Ok(NodeDelegate::new(
            key,
            parent_key,
            self.config.default_type,
            self.revision,
            dewey_id,
        ))
    }

    pub fn document(&mut self) -> Result<DocumentNode> {
        let dewey_id = self.config.dewey_ids.then(DeweyId::root);
        let node = self.identity(NodeKey::NULL, dewey_id)?;
        tracing::debug!(node_key = %node.node_key(), "created document node");
        Ok(DocumentNode::new(StructNodeDelegate::new(node)))
    }

    /// Append a new node as the last child of `parent`.
    ///
    /// `last_child` must be the parent's current last child (`None` when it has none); its
    /// right-sibling link is pointed at the new node.
    pub fn append_child(
        &mut self,
        parent: &mut XmlNode,
        last_child: Option<&mut XmlNode>,
        new: NewNode,
    ) -> Result<XmlNode> {
        let parent_kind = parent.kind();
        if parent_kind.is_leaf() {
            return Err(Error::unsupported(parent_kind, "append_child"));
        }

        let expected_left = parent.as_struct_node().last_child_key();
        let left_key = last_child
            .as_deref()
            .map_or(NodeKey::NULL, |n| n.node().node_key());
        if expected_left != left_key {
            return Err(Error::InconsistentState(format!(
                "parent {} has last child {expected_left}, got {left_key}",
                parent.node().node_key()
            )));
        }

        let dewey_id = if self.config.dewey_ids {
            let left_id = last_child.as_deref().map(|n| n.node().dewey_id());
            match (parent.node().dewey_id(), left_id) {
                (None, _) => None,
                (Some(p), None) => Some(p.new_child_id()),
                (Some(_), Some(Some(l))) => Some(DeweyId::new_between(Some(l), None)?),
                (Some(_), Some(None)) => {
                    return Err(Error::InconsistentState(format!(
                        "left sibling {left_key} has no dewey id"
                    )))
                }
            }
        } else {
            None
        };

        let parent_key = parent.node().node_key();
        let mut structural = StructNodeDelegate::new(self.identity(parent_key, dewey_id)?);
        structural.set_left_sibling_key(left_key);
        let key = structural.node_delegate().node_key();
        let kind = new.kind();

        let child = match new {
            NewNode::Element(name) => {
                XmlNode::Element(ElementNode::new(structural, name, Vec::new()))
            }
            NewNode::Text(text) => {
                XmlNode::Text(TextNode::new(ValueNodeDelegate::new(text), structural))
            }
            NewNode::Comment(text) => {
                XmlNode::Comment(CommentNode::new(ValueNodeDelegate::new(text), structural))
            }
            NewNode::ProcessingInstruction { target, content } => XmlNode::ProcessingInstruction(
                PiNode::new(structural, target, ValueNodeDelegate::new(content)),
            ),
        };

        if let Some(left) = last_child {
            left.as_struct_node_mut().set_right_sibling_key(key);
        }
        let had_children = parent.as_struct_node().has_first_child();
        let mut links = parent
            .containment()
            .ok_or_else(|| Error::unsupported(parent_kind, "append_child"))?;
        if !had_children {
            links.set_first_child_key(key);
        }
        links
            .set_last_child_key(key)
            .increment_child_count()
            .increment_descendant_count();

        tracing::debug!(%kind, node_key = %key, parent = %parent_key, "appended child");
        Ok(child)
    }

    /// Create an attribute on `element` after its current last attribute.
    pub fn add_attribute(
        &mut self,
        element: &mut ElementNode,
        last_attribute: Option<&AttributeNode>,
        name: NameNodeDelegate,
        value: impl Into<Vec<u8>>,
    ) -> Result<AttributeNode> {
        let expected = element
            .attribute_keys()
            .last()
            .copied()
            .unwrap_or(NodeKey::NULL);
        let given = last_attribute.map_or(NodeKey::NULL, |a| a.node_key());
        if expected != given {
            return Err(Error::InconsistentState(format!(
                "element {} has last attribute {expected}, got {given}",
                element.node_key()
            )));
        }

        let dewey_id = match (self.config.dewey_ids, element.dewey_id()) {
            (true, Some(e)) => match last_attribute.map(|a| a.dewey_id()) {
                None => Some(e.new_attribute_id()),
                Some(Some(l)) => Some(DeweyId::new_between(Some(l), None)?),
                Some(None) => {
                    return Err(Error::InconsistentState(format!(
                        "last attribute {given} has no dewey id"
                    )))
                }
            },
            _ => None,
        };

        let node = self.identity(element.node_key(), dewey_id)?;
        let key = node.node_key();
        element.insert_attribute(key);
        tracing::debug!(
            node_key = %key,
            element = %element.node_key(),
            local_name_key = name.local_name_key(),
            "added attribute"
        );
        Ok(AttributeNode::new(
            StructNodeDelegate::new(node),
            name,
            ValueNodeDelegate::new(value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order_and_links_siblings() {
        let mut builder = NodeBuilder::default();
        let mut doc = XmlNode::from(builder.document().unwrap());
        let mut root = builder
            .append_child(&mut doc, None, NewNode::Element(NameNodeDelegate::local(1)))
            .unwrap();
        let mut text = builder
            .append_child(&mut root, None, NewNode::Text(b"hello".to_vec()))
            .unwrap();
        let comment = builder
            .append_child(&mut root, Some(&mut text), NewNode::Comment(b"c".to_vec()))
            .unwrap();

        assert_eq!(doc.as_struct_node().first_child_key(), root.node().node_key());
        assert_eq!(root.as_struct_node().child_count(), 2);
        assert_eq!(root.as_struct_node().last_child_key(), comment.node().node_key());
        assert_eq!(text.as_struct_node().right_sibling_key(), comment.node().node_key());
        assert_eq!(comment.as_struct_node().left_sibling_key(), text.node().node_key());
        assert_eq!(comment.node().parent_key(), root.node().node_key());
        let address = |n: &XmlNode| n.node().dewey_id().map(ToString::to_string);
        assert_eq!(address(&text).as_deref(), Some("1.3.3"));
        assert_eq!(address(&comment).as_deref(), Some("1.3.5"));
        assert_eq!(text.as_value_node().unwrap().value(), "hello");
    }

    #[test]
    fn refuses_to_append_below_a_leaf() {
        let mut builder = NodeBuilder::default();
        let mut doc = XmlNode::from(builder.document().unwrap());
        let mut text = builder
            .append_child(&mut doc, None, NewNode::Text(Vec::new()))
            .unwrap();
        let err = builder
            .append_child(&mut text, None, NewNode::Comment(Vec::new()))
            .unwrap_err();
        assert!(err.is_capability_misuse());
    }

    #[test]
    fn rejects_stale_left_sibling() {
        let mut builder = NodeBuilder::default();
        let mut doc = XmlNode::from(builder.document().unwrap());
        builder
            .append_child(&mut doc, None, NewNode::Comment(Vec::new()))
            .unwrap();
        let err = builder
            .append_child(&mut doc, None, NewNode::Comment(Vec::new()))
            .unwrap_err();
        assert!(matches!(err, Error::InconsistentState(_)));
    }

    #[test]
    fn attributes_get_attribute_addresses() {
        let mut builder = NodeBuilder::default();
        let mut doc = XmlNode::from(builder.document().unwrap());
        let XmlNode::Element(mut element) = builder
            .append_child(&mut doc, None, NewNode::Element(NameNodeDelegate::local(1)))
            .unwrap()
        else {
            panic!("expected an element");
        };
        let first = builder
            .add_attribute(&mut element, None, NameNodeDelegate::local(2), "a")
            .unwrap();
        let second = builder
            .add_attribute(&mut element, Some(&first), NameNodeDelegate::local(3), "b")
            .unwrap();

        assert_eq!(element.attribute_keys(), &[first.node_key(), second.node_key()]);
        assert_eq!(first.parent_key(), element.node_key());
        assert_eq!(first.dewey_id().unwrap().to_string(), "1.3.1.3");
        assert_eq!(second.dewey_id().unwrap().to_string(), "1.3.1.5");
        assert!(second.dewey_id().unwrap().is_attribute());
    }

    #[test]
    fn addresses_can_be_disabled() {
        let mut builder = NodeBuilder::new(
            MonotonicKeys::default(),
            NodeConfig::without_dewey_ids(),
            2,
        );
        let mut doc = XmlNode::from(builder.document().unwrap());
        let child = builder
            .append_child(&mut doc, None, NewNode::Text(Vec::new()))
            .unwrap();
        assert!(doc.node().dewey_id().is_none());
        assert!(child.node().dewey_id().is_none());
        assert_eq!(child.node().revision(), 2);
    }

    #[test]
    fn unaddressed_last_attribute_is_rejected() {
        let mut builder = NodeBuilder::default();
        let mut doc = XmlNode::from(builder.document().unwrap());
        let XmlNode::Element(mut element) = builder
            .append_child(&mut doc, None, NewNode::Element(NameNodeDelegate::local(1)))
            .unwrap()
        else {
            panic!("expected an element");
        };
        let mut first = builder
            .add_attribute(&mut element, None, NameNodeDelegate::local(2), "a")
            .unwrap();
        first.set_dewey_id(None);

        let err = builder
            .add_attribute(&mut element, Some(&first), NameNodeDelegate::local(3), "b")
            .unwrap_err();
        assert!(matches!(err, Error::InconsistentState(_)));
        assert_eq!(element.attribute_keys(), &[first.node_key()]);
    }

    #[test]
    fn exhausted_key_space_fails_instead_of_reusing_null() {
        let mut builder = NodeBuilder::new(
            MonotonicKeys::starting_after(NodeKey(u64::MAX - 2)),
            NodeConfig::default(),
            0,
        );
        let mut doc = XmlNode::from(builder.document().unwrap());
        assert_eq!(doc.node().node_key(), NodeKey(u64::MAX - 1));
        let err = builder
            .append_child(&mut doc, None, NewNode::Text(Vec::new()))
            .unwrap_err();
        assert!(matches!(err, Error::KeySpaceExhausted { .. }));
        assert_eq!(doc.as_struct_node().child_count(), 0);
    }
}
