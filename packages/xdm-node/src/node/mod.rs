//! Node-kind variants and the opaque [`XmlNode`] handed to consumers.

mod attribute;
mod comment;
mod document;
mod element;
mod pi;
mod text;

use std::sync::Arc;

pub use attribute::AttributeNode;
pub use comment::CommentNode;
pub use document::DocumentNode;
pub use element::ElementNode;
pub use pi::PiNode;
pub use text::TextNode;

use crate::kind::Kind;
use crate::traits::{Containment, ContainerNode, NameNode, Node, StructNode, ValueNode};
use crate::visitor::{Visitable, XmlNodeVisitor};

/// A node of any kind, exposed through its capabilities.
///
/// This `match` is the only place that branches on the variant; callers reach identity,
/// structure, value and name through the `as_*` accessors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum XmlNode {
    Document(DocumentNode),
    Element(ElementNode),
    Attribute(AttributeNode),
    Text(TextNode),
    Comment(CommentNode),
    ProcessingInstruction(PiNode),
}

macro_rules! each_variant {
    ($node:expr, $n:ident => $body:expr) => {
        match $node {
            XmlNode::Document($n) => $body,
            XmlNode::Element($n) => $body,
            XmlNode::Attribute($n) => $body,
            XmlNode::Text($n) => $body,
            XmlNode::Comment($n) => $body,
            XmlNode::ProcessingInstruction($n) => $body,
        }
    };
}

impl XmlNode {
    pub fn kind(&self) -> Kind {
        each_variant!(self, n => n.kind())
    }

    pub fn node(&self) -> &dyn Node {
        each_variant!(self, n => n as &dyn Node)
    }

    pub fn node_mut(&mut self) -> &mut dyn Node {
        each_variant!(self, n => n as &mut dyn Node)
    }

    pub fn as_struct_node(&self) -> &dyn StructNode {
        each_variant!(self, n => n as &dyn StructNode)
    }

    pub fn as_struct_node_mut(&mut self) -> &mut dyn StructNode {
        each_variant!(self, n => n as &mut dyn StructNode)
    }

    /// Infallible counter access; `None` for leaf kinds.
    pub fn containment(&mut self) -> Option<Containment<'_>> {
        match self {
            XmlNode::Document(n) => Some(n.containment()),
            XmlNode::Element(n) => Some(n.containment()),
            _ => None,
        }
    }

    pub fn as_value_node(&self) -> Option<&dyn ValueNode> {
        match self {
            XmlNode::Attribute(n) => Some(n as &dyn ValueNode),
            XmlNode::Text(n) => Some(n as &dyn ValueNode),
            XmlNode::Comment(n) => Some(n as &dyn ValueNode),
            XmlNode::ProcessingInstruction(n) => Some(n as &dyn ValueNode),
            XmlNode::Document(_) | XmlNode::Element(_) => None,
        }
    }

    pub fn as_value_node_mut(&mut self) -> Option<&mut dyn ValueNode> {
        match self {
            XmlNode::Attribute(n) => Some(n as &mut dyn ValueNode),
            XmlNode::Text(n) => Some(n as &mut dyn ValueNode),
            XmlNode::Comment(n) => Some(n as &mut dyn ValueNode),
            XmlNode::ProcessingInstruction(n) => Some(n as &mut dyn ValueNode),
            XmlNode::Document(_) | XmlNode::Element(_) => None,
        }
    }

    pub fn as_name_node(&self) -> Option<&dyn NameNode> {
        match self {
            XmlNode::Element(n) => Some(n as &dyn NameNode),
            XmlNode::Attribute(n) => Some(n as &dyn NameNode),
            XmlNode::ProcessingInstruction(n) => Some(n as &dyn NameNode),
            _ => None,
        }
    }

    pub fn as_name_node_mut(&mut self) -> Option<&mut dyn NameNode> {
        match self {
            XmlNode::Element(n) => Some(n as &mut dyn NameNode),
            XmlNode::Attribute(n) => Some(n as &mut dyn NameNode),
            XmlNode::ProcessingInstruction(n) => Some(n as &mut dyn NameNode),
            _ => None,
        }
    }

    /// Raw payload. `None` means the kind carries no value; an empty value is `Some(&[])`.
    pub fn raw_value(&self) -> Option<&[u8]> {
        self.as_value_node().map(|n| n.raw_value())
    }

    /// Publish this node as a read-only snapshot once its revision is committed.
    ///
    /// After this point the node is shared and no longer mutated; the value cache may still be
    /// filled lazily by concurrent readers.
    pub fn freeze(self) -> Arc<XmlNode> {
        Arc::new(self)
    }
}

impl Visitable for XmlNode {
    fn accept_visitor<V: XmlNodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        each_variant!(self, n => n.accept_visitor(visitor))
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($node:ty)),* $(,)?) => {
        $(
            impl From<$node> for XmlNode {
                fn from(node: $node) -> Self {
                    XmlNode::$variant(node)
                }
            }
        )*
    };
}

impl_from_variant!(
    Document(DocumentNode),
    Element(ElementNode),
    Attribute(AttributeNode),
    Text(TextNode),
    Comment(CommentNode),
    ProcessingInstruction(PiNode),
);
