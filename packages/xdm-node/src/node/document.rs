use std::hash::{Hash, Hasher};

use crate::delegate::StructNodeDelegate;
use crate::forwarding::forward_to_structural;
use crate::immutable::ImmutableDocument;
use crate::kind::Kind;
use crate::traits::{ContainerNode, Node, StructNode};
use crate::visitor::{Visitable, XmlNodeVisitor};

/// Document root. Has no parent and no siblings.
#[derive(Clone, Debug)]
pub struct DocumentNode {
    structural: StructNodeDelegate,
}

impl DocumentNode {
    pub fn new(structural: StructNodeDelegate) -> Self {
        Self { structural }
    }
}

forward_to_structural!(DocumentNode);

impl Node for DocumentNode {
    fn kind(&self) -> Kind {
        Kind::Document
    }
}

impl StructNode for DocumentNode {}

impl ContainerNode for DocumentNode {}

impl Visitable for DocumentNode {
    fn accept_visitor<V: XmlNodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_document(ImmutableDocument::of(self))
    }
}

impl PartialEq for DocumentNode {
    fn eq(&self, other: &Self) -> bool {
        self.structural.node_delegate() == other.structural.node_delegate()
    }
}

impl Eq for DocumentNode {}

impl Hash for DocumentNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural.node_delegate().hash(state);
    }
}
