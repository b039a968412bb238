//! Read-only views handed to visitors.

use std::ops::Deref;

use crate::node::{AttributeNode, CommentNode, DocumentNode, ElementNode, PiNode, TextNode};

/// Immutable view of a node variant. Only `&self` accessors are reachable through it.
#[derive(Debug)]
pub struct Immutable<'a, N>(&'a N);

impl<'a, N> Immutable<'a, N> {
    pub fn of(node: &'a N) -> Self {
        Self(node)
    }

    pub fn get(&self) -> &'a N {
        self.0
    }
}

impl<N> Clone for Immutable<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Immutable<'_, N> {}

impl<N> Deref for Immutable<'_, N> {
    type Target = N;

    fn deref(&self) -> &N {
        self.0
    }
}

pub type ImmutableDocument<'a> = Immutable<'a, DocumentNode>;
pub type ImmutableElement<'a> = Immutable<'a, ElementNode>;
pub type ImmutableAttribute<'a> = Immutable<'a, AttributeNode>;
pub type ImmutableText<'a> = Immutable<'a, TextNode>;
pub type ImmutableComment<'a> = Immutable<'a, CommentNode>;
pub type ImmutablePi<'a> = Immutable<'a, PiNode>;
