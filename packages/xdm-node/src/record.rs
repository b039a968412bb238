//! Decoded node fields exchanged with the storage layer.
//!
//! The storage layer decodes persisted bytes into a [`NodeRecord`] and converts it with
//! `XmlNode::try_from`. Conversion is where construction preconditions are checked: missing
//! required components and child links on leaf kinds are rejected.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::delegate::{NameNodeDelegate, NodeDelegate, StructNodeDelegate, ValueNodeDelegate};
use crate::dewey::DeweyId;
use crate::error::{Error, Result};
use crate::ids::{NodeKey, Revision, TypeKey};
use crate::kind::Kind;
use crate::node::{AttributeNode, CommentNode, DocumentNode, ElementNode, PiNode, TextNode, XmlNode};

/// Name keys of a record. See [`NameNodeDelegate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NameKeys {
    pub uri_key: i32,
    pub prefix_key: i32,
    pub local_name_key: i32,
    pub path_node_key: NodeKey,
}

/// Flat, decoded field values of one node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NodeRecord {
    pub kind: Option<Kind>,
    pub node_key: Option<NodeKey>,
    pub parent_key: NodeKey,
    pub type_key: TypeKey,
    pub revision: Revision,
    pub content_hash: u64,
    /// Byte form of the DeweyID, see [`DeweyId::to_bytes`].
    pub dewey_id: Option<Vec<u8>>,
    pub first_child_key: NodeKey,
    pub last_child_key: NodeKey,
    pub left_sibling_key: NodeKey,
    pub right_sibling_key: NodeKey,
    pub child_count: u64,
    pub descendant_count: u64,
    pub value: Option<Vec<u8>>,
    pub name: Option<NameKeys>,
    pub attribute_keys: Vec<NodeKey>,
}

impl NodeRecord {
    pub fn new(kind: Kind, node_key: NodeKey) -> Self {
        Self {
            kind: Some(kind),
            node_key: Some(node_key),
            ..Self::default()
        }
    }

    fn check_leaf(&self, kind: Kind) -> Result<()> {
        if !self.first_child_key.is_null()
            || !self.last_child_key.is_null()
            || self.child_count != 0
            || self.descendant_count != 0
        {
            return Err(Error::InvalidRecord(format!(
                "{kind} node cannot have children"
            )));
        }
        Ok(())
    }
}

impl From<NameKeys> for NameNodeDelegate {
    fn from(keys: NameKeys) -> Self {
        NameNodeDelegate::new(
            keys.uri_key,
            keys.prefix_key,
            keys.local_name_key,
            keys.path_node_key,
        )
    }
}

impl From<&NameNodeDelegate> for NameKeys {
    fn from(name: &NameNodeDelegate) -> Self {
        NameKeys {
            uri_key: name.uri_key(),
            prefix_key: name.prefix_key(),
            local_name_key: name.local_name_key(),
            path_node_key: name.path_node_key(),
        }
    }
}

impl TryFrom<NodeRecord> for XmlNode {
    type Error = Error;

    fn try_from(record: NodeRecord) -> Result<Self> {
        let kind = record.kind.ok_or(Error::MissingField("kind"))?;
        let node_key = record.node_key.ok_or(Error::MissingField("node_key"))?;
        if kind.is_leaf() {
            record.check_leaf(kind)?;
        }
        if !kind.has_value() && record.value.is_some() {
            return Err(Error::InvalidRecord(format!("{kind} node cannot carry a value")));
        }
        if !kind.has_name() && record.name.is_some() {
            return Err(Error::InvalidRecord(format!("{kind} node cannot carry a name")));
        }
        if kind != Kind::Element && !record.attribute_keys.is_empty() {
            return Err(Error::InvalidRecord(format!(
                "{kind} node cannot own attributes"
            )));
        }

        let dewey_id = record
            .dewey_id
            .as_deref()
            .map(DeweyId::from_bytes)
            .transpose()?;
        let mut node = NodeDelegate::new(
            node_key,
            record.parent_key,
            record.type_key,
            record.revision,
            dewey_id,
        );
        node.set_content_hash(record.content_hash);
        let structural = StructNodeDelegate::with_links(
            node,
            record.first_child_key,
            record.last_child_key,
            record.left_sibling_key,
            record.right_sibling_key,
            record.child_count,
            record.descendant_count,
        );

        let value = || {
            record
                .value
                .clone()
                .map(ValueNodeDelegate::new)
                .ok_or(Error::MissingField("value"))
        };
        let name = || {
            record
                .name
                .map(NameNodeDelegate::from)
                .ok_or(Error::MissingField("name"))
        };

        let xml = match kind {
            Kind::Document => XmlNode::Document(DocumentNode::new(structural)),
            Kind::Element => XmlNode::Element(ElementNode::new(
                structural,
                name()?,
                record.attribute_keys.clone(),
            )),
            Kind::Attribute => {
                XmlNode::Attribute(AttributeNode::new(structural, name()?, value()?))
            }
            Kind::Text => XmlNode::Text(TextNode::new(value()?, structural)),
            Kind::Comment => XmlNode::Comment(CommentNode::new(value()?, structural)),
            Kind::ProcessingInstruction => {
                XmlNode::ProcessingInstruction(PiNode::new(structural, name()?, value()?))
            }
        };
        tracing::debug!(%kind, %node_key, "materialized node from record");
        Ok(xml)
    }
}

impl From<&XmlNode> for NodeRecord {
    fn from(xml: &XmlNode) -> Self {
        let node = xml.node();
        let structure = xml.as_struct_node();
        NodeRecord {
            kind: Some(xml.kind()),
            node_key: Some(node.node_key()),
            parent_key: node.parent_key(),
            type_key: node.type_key(),
            revision: node.revision(),
            content_hash: node.content_hash(),
            dewey_id: node.dewey_id().map(DeweyId::to_bytes),
            first_child_key: structure.first_child_key(),
            last_child_key: structure.last_child_key(),
            left_sibling_key: structure.left_sibling_key(),
            right_sibling_key: structure.right_sibling_key(),
            child_count: structure.child_count(),
            descendant_count: structure.descendant_count(),
            value: xml.raw_value().map(<[u8]>::to_vec),
            name: xml.as_name_node().map(|n| NameKeys::from(n.name_delegate())),
            attribute_keys: match xml {
                XmlNode::Element(e) => e.attribute_keys().to_vec(),
                _ => Vec::new(),
            },
        }
    }
}

impl XmlNode {
    /// Materialize a node of the expected kind, failing with [`Error::KindMismatch`] otherwise.
    pub fn from_record_of_kind(record: NodeRecord, expected: Kind) -> Result<Self> {
        if let Some(kind) = record.kind {
            kind.expect(expected)?;
        }
        XmlNode::try_from(record)
    }
}
