//! Kind-typed visitor dispatch.
//!
//! Each variant implements [`Visitable`] by wrapping itself in its immutable view and calling
//! the one entry point for its kind. Traversal algorithms live in higher layers and only consume
//! this contract.

use crate::immutable::{
    ImmutableAttribute, ImmutableComment, ImmutableDocument, ImmutableElement, ImmutablePi,
    ImmutableText,
};

/// What a traversal should do after visiting a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    #[default]
    Continue,
    /// Do not descend into the node's children.
    SkipSubtree,
    /// Do not visit the node's remaining right siblings.
    SkipSiblings,
    Terminate,
}

pub trait XmlNodeVisitor {
    type Output;

    fn visit_document(&mut self, node: ImmutableDocument<'_>) -> Self::Output;
    fn visit_element(&mut self, node: ImmutableElement<'_>) -> Self::Output;
    fn visit_attribute(&mut self, node: ImmutableAttribute<'_>) -> Self::Output;
    fn visit_text(&mut self, node: ImmutableText<'_>) -> Self::Output;
    fn visit_comment(&mut self, node: ImmutableComment<'_>) -> Self::Output;
    fn visit_pi(&mut self, node: ImmutablePi<'_>) -> Self::Output;
}

pub trait Visitable {
    /// Invoke the visitor entry point for this node's kind and return its result unchanged.
    fn accept_visitor<V: XmlNodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output;
}
