use std::hash::{Hash, Hasher};

use crate::delegate::{StructNodeDelegate, ValueNodeDelegate};
use crate::forwarding::{forward_to_structural, leaf_structure};
use crate::immutable::ImmutableText;
use crate::kind::Kind;
use crate::traits::{Node, ValueNode};
use crate::visitor::{Visitable, XmlNodeVisitor};

/// Text node. A leaf.
#[derive(Clone, Debug)]
pub struct TextNode {
    structural: StructNodeDelegate,
    value: ValueNodeDelegate,
}

impl TextNode {
    pub fn new(value: ValueNodeDelegate, structural: StructNodeDelegate) -> Self {
        Self { structural, value }
    }
}

forward_to_structural!(TextNode);
leaf_structure!(TextNode);

impl Node for TextNode {
    fn kind(&self) -> Kind {
        Kind::Text
    }
}

impl ValueNode for TextNode {
    fn value_delegate(&self) -> &ValueNodeDelegate {
        &self.value
    }

    fn value_delegate_mut(&mut self) -> &mut ValueNodeDelegate {
        &mut self.value
    }
}

impl Visitable for TextNode {
    fn accept_visitor<V: XmlNodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_text(ImmutableText::of(self))
    }
}

impl PartialEq for TextNode {
    fn eq(&self, other: &Self) -> bool {
        self.structural.node_delegate() == other.structural.node_delegate()
            && self.value == other.value
    }
}

impl Eq for TextNode {}

impl Hash for TextNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural.node_delegate().hash(state);
        self.value.hash(state);
    }
}
