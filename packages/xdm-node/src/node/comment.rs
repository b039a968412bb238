use std::hash::{Hash, Hasher};

use crate::delegate::{StructNodeDelegate, ValueNodeDelegate};
use crate::forwarding::{forward_to_structural, leaf_structure};
use crate::immutable::ImmutableComment;
use crate::kind::Kind;
use crate::traits::{Node, ValueNode};
use crate::visitor::{Visitable, XmlNodeVisitor};

/// Comment node. A leaf: it takes part in sibling order but never has children.
#[derive(Clone, Debug)]
pub struct CommentNode {
    structural: StructNodeDelegate,
    value: ValueNodeDelegate,
}

impl CommentNode {
    pub fn new(value: ValueNodeDelegate, structural: StructNodeDelegate) -> Self {
        Self { structural, value }
    }
}

forward_to_structural!(CommentNode);
leaf_structure!(CommentNode);

impl Node for CommentNode {
    fn kind(&self) -> Kind {
        Kind::Comment
    }
}

impl ValueNode for CommentNode {
    fn value_delegate(&self) -> &ValueNodeDelegate {
        &self.value
    }

    fn value_delegate_mut(&mut self) -> &mut ValueNodeDelegate {
        &mut self.value
    }
}

impl Visitable for CommentNode {
    fn accept_visitor<V: XmlNodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_comment(ImmutableComment::of(self))
    }
}

impl PartialEq for CommentNode {
    fn eq(&self, other: &Self) -> bool {
        self.structural.node_delegate() == other.structural.node_delegate()
            && self.value == other.value
    }
}

impl Eq for CommentNode {}

impl Hash for CommentNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural.node_delegate().hash(state);
        self.value.hash(state);
    }
}
