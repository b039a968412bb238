use std::hash::{Hash, Hasher};

use crate::delegate::{NameNodeDelegate, StructNodeDelegate, ValueNodeDelegate};
use crate::forwarding::{forward_to_structural, leaf_structure};
use crate::immutable::ImmutablePi;
use crate::kind::Kind;
use crate::traits::{NameNode, Node, ValueNode};
use crate::visitor::{Visitable, XmlNodeVisitor};

/// Processing instruction. The name unit holds the target, the value unit the content.
#[derive(Clone, Debug)]
pub struct PiNode {
    structural: StructNodeDelegate,
    name: NameNodeDelegate,
    value: ValueNodeDelegate,
}

impl PiNode {
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

forward_to_structural!(PiNode);
leaf_structure!(PiNode);

impl Node for PiNode {
    fn kind(&self) -> Kind {
        Kind::ProcessingInstruction
    }
}

impl NameNode for PiNode {
    fn name_delegate(&self) -> &NameNodeDelegate {
        &self.name
    }

    fn name_delegate_mut(&mut self) -> &mut NameNodeDelegate {
        &mut self.name
    }
}

impl ValueNode for PiNode {
    fn value_delegate(&self) -> &ValueNodeDelegate {
        &self.value
    }

    fn value_delegate_mut(&mut self) -> &mut ValueNodeDelegate {
        &mut self.value
    }
}

impl Visitable for PiNode {
    fn accept_visitor<V: XmlNodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_pi(ImmutablePi::of(self))
    }
}

impl PartialEq for PiNode {
    fn eq(&self, other: &Self) -> bool {
        self.structural.node_delegate() == other.structural.node_delegate()
            && self.name == other.name
            && self.value == other.value
    }
}

impl Eq for PiNode {}

impl Hash for PiNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural.node_delegate().hash(state);
        self.name.hash(state);
        self.value.hash(state);
    }
}
