use std::hash::{Hash, Hasher};

use crate::delegate::{NameNodeDelegate, StructNodeDelegate};
use crate::forwarding::forward_to_structural;
use crate::ids::NodeKey;
use crate::immutable::ImmutableElement;
use crate::kind::Kind;
use crate::traits::{ContainerNode, NameNode, Node, StructNode};
use crate::visitor::{Visitable, XmlNodeVisitor};

/// Element node. Holds children through its structural unit and keeps the keys of its
/// attributes, in document order, alongside.
#[derive(Clone, Debug)]
pub struct ElementNode {
    structural: StructNodeDelegate,
    name: NameNodeDelegate,
    attribute_keys: Vec<NodeKey>,
}

impl ElementNode {
    pub fn new(
        structural: StructNodeDelegate,
        name: NameNodeDelegate,
        attribute_keys: Vec<NodeKey>,
    ) -> Self {
        Self {
            structural,
            name,
            attribute_keys,
        }
    }

    pub fn attribute_keys(&self) -> &[NodeKey] {
        &self.attribute_keys
    }

    pub fn attribute_count(&self) -> usize {
        self.attribute_keys.len()
    }

    /// Key of the attribute at `index`, or `NodeKey::NULL` when out of range.
    pub fn attribute_key(&self, index: usize) -> NodeKey {
        self.attribute_keys
            .get(index)
            .copied()
            .unwrap_or(NodeKey::NULL)
    }

    pub fn insert_attribute(&mut self, key: NodeKey) {
        debug_assert!(!key.is_null(), "attribute key must not be NULL");
        if !self.attribute_keys.contains(&key) {
            self.attribute_keys.push(key);
        }
    }

    /// Returns `true` when the key was present.
    pub fn remove_attribute(&mut self, key: NodeKey) -> bool {
        let before = self.attribute_keys.len();
        self.attribute_keys.retain(|&k| k != key);
        self.attribute_keys.len() != before
    }
}

forward_to_structural!(ElementNode);

impl Node for ElementNode {
    fn kind(&self) -> Kind {
        Kind::Element
    }
}

impl StructNode for ElementNode {}

impl ContainerNode for ElementNode {}

impl NameNode for ElementNode {
    fn name_delegate(&self) -> &NameNodeDelegate {
        &self.name
    }

    fn name_delegate_mut(&mut self) -> &mut NameNodeDelegate {
        &mut self.name
    }
}

impl Visitable for ElementNode {
    fn accept_visitor<V: XmlNodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_element(ImmutableElement::of(self))
    }
}

impl PartialEq for ElementNode {
    fn eq(&self, other: &Self) -> bool {
        self.structural.node_delegate() == other.structural.node_delegate()
            && self.name == other.name
    }
}

impl Eq for ElementNode {}

impl Hash for ElementNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural.node_delegate().hash(state);
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegate::NodeDelegate;
    use crate::ids::TypeKey;

    fn element() -> ElementNode {
        let node = NodeDelegate::new(NodeKey(1), NodeKey(0), TypeKey::UNTYPED, 0, None);
        ElementNode::new(
            StructNodeDelegate::new(node),
            NameNodeDelegate::local(7),
            Vec::new(),
        )
    }

    #[test]
    fn tracks_attributes_without_duplicates() {
        let mut e = element();
        e.insert_attribute(NodeKey(2));
        e.insert_attribute(NodeKey(3));
        e.insert_attribute(NodeKey(2));
        assert_eq!(e.attribute_keys(), &[NodeKey(2), NodeKey(3)]);
        assert_eq!(e.attribute_key(1), NodeKey(3));
        assert!(e.attribute_key(5).is_null());

        assert!(e.remove_attribute(NodeKey(2)));
        assert!(!e.remove_attribute(NodeKey(2)));
        assert_eq!(e.attribute_count(), 1);
    }

    #[test]
    fn counters_work_through_both_surfaces() {
        let mut e = element();
        e.increment_child_count().unwrap();
        e.containment()
            .increment_child_count()
            .set_descendant_count(3)
            .set_first_child_key(NodeKey(4));
        assert_eq!(e.child_count(), 2);
        assert_eq!(e.descendant_count(), 3);
        assert_eq!(e.first_child_key(), NodeKey(4));

        e.decrement_descendant_count().unwrap();
        e.decrement_child_count().unwrap();
        assert_eq!(e.descendant_count(), 2);
        assert_eq!(e.child_count(), 1);
    }
}
