use std::hash::{Hash, Hasher};

use crate::delegate::{NameNodeDelegate, StructNodeDelegate, ValueNodeDelegate};
use crate::forwarding::{forward_to_structural, leaf_structure};
use crate::immutable::ImmutableAttribute;
use crate::kind::Kind;
use crate::traits::{NameNode, Node, ValueNode};
use crate::visitor::{Visitable, XmlNodeVisitor};

/// Attribute node. Its parent is the owning element; it is not one of the element's children.
#[derive(Clone, Debug)]
pub struct AttributeNode {
    structural: StructNodeDelegate,
    name: NameNodeDelegate,
    value: ValueNodeDelegate,
}

impl AttributeNode {
    pub fn new(
        structural: StructNodeDelegate,
        name: NameNodeDelegate,
        value: ValueNodeDelegate,
    ) -> Self {
        Self {
            structural,
            name,
            value,
        }
    }
}

forward_to_structural!(AttributeNode);
leaf_structure!(AttributeNode);

impl Node for AttributeNode {
    fn kind(&self) -> Kind {
        Kind::Attribute
    }
}

impl NameNode for AttributeNode {
    fn name_delegate(&self) -> &NameNodeDelegate {
        &self.name
    }

    fn name_delegate_mut(&mut self) -> &mut NameNodeDelegate {
        &mut self.name
    }
}

impl ValueNode for AttributeNode {
    fn value_delegate(&self) -> &ValueNodeDelegate {
        &self.value
    }

    fn value_delegate_mut(&mut self) -> &mut ValueNodeDelegate {
        &mut self.value
    }
}

impl Visitable for AttributeNode {
    fn accept_visitor<V: XmlNodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_attribute(ImmutableAttribute::of(self))
    }
}

impl PartialEq for AttributeNode {
    fn eq(&self, other: &Self) -> bool {
        self.structural.node_delegate() == other.structural.node_delegate()
            && self.name == other.name
            && self.value == other.value
    }
}

impl Eq for AttributeNode {}

impl Hash for AttributeNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural.node_delegate().hash(state);
        self.name.hash(state);
        self.value.hash(state);
    }
}
