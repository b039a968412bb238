//! Forwarding base: resolves the composed units of a node variant.
//!
//! The capability traits in [`crate::traits`] provide their accessors as default methods over
//! these two traits, so a variant only has to say where its units live and which operations it
//! rejects.

use crate::delegate::{NodeDelegate, StructNodeDelegate};

pub trait ForwardingNode {
    fn delegate(&self) -> &NodeDelegate;
    fn delegate_mut(&mut self) -> &mut NodeDelegate;
}

pub trait StructForwardingNode: ForwardingNode {
    fn struct_delegate(&self) -> &StructNodeDelegate;
    fn struct_delegate_mut(&mut self) -> &mut StructNodeDelegate;
}

/// Implements both forwarding traits for a variant that stores its structural unit in the
/// `structural` field.
macro_rules! forward_to_structural {
    ($node:ty) => {
        impl $crate::forwarding::ForwardingNode for $node {
            fn delegate(&self) -> &$crate::delegate::NodeDelegate {
                self.structural.node_delegate()
            }

            fn delegate_mut(&mut self) -> &mut $crate::delegate::NodeDelegate {
                self.structural.node_delegate_mut()
            }
        }

        impl $crate::forwarding::StructForwardingNode for $node {
            fn struct_delegate(&self) -> &$crate::delegate::StructNodeDelegate {
                &self.structural
            }

            fn struct_delegate_mut(&mut self) -> &mut $crate::delegate::StructNodeDelegate {
                &mut self.structural
            }
        }
    };
}

/// Implements [`crate::traits::StructNode`] for a kind that can never contain children:
/// child links read as NULL, the descendant count reads as zero, and every operation that
/// would grow or shrink the subtree fails with [`crate::Error::UnsupportedOperation`].
macro_rules! leaf_structure {
    ($node:ty) => {
        impl $crate::traits::StructNode for $node {
            fn first_child_key(&self) -> $crate::ids::NodeKey {
                $crate::ids::NodeKey::NULL
            }

            fn set_first_child_key(&mut self, _key: $crate::ids::NodeKey) -> $crate::Result<()> {
                Err($crate::Error::unsupported(
                    $crate::traits::Node::kind(self),
                    "set_first_child_key",
                ))
            }

            fn last_child_key(&self) -> $crate::ids::NodeKey {
                $crate::ids::NodeKey::NULL
            }

            fn set_last_child_key(&mut self, _key: $crate::ids::NodeKey) -> $crate::Result<()> {
                Err($crate::Error::unsupported(
                    $crate::traits::Node::kind(self),
                    "set_last_child_key",
                ))
            }

            fn child_count(&self) -> u64 {
                0
            }

            fn increment_child_count(&mut self) -> $crate::Result<()> {
                Err($crate::Error::unsupported(
                    $crate::traits::Node::kind(self),
                    "increment_child_count",
                ))
            }

            fn decrement_child_count(&mut self) -> $crate::Result<()> {
                Err($crate::Error::unsupported(
                    $crate::traits::Node::kind(self),
                    "decrement_child_count",
                ))
            }

            fn descendant_count(&self) -> u64 {
                0
            }

            fn increment_descendant_count(&mut self) -> $crate::Result<()> {
                Err($crate::Error::unsupported(
                    $crate::traits::Node::kind(self),
                    "increment_descendant_count",
                ))
            }

            fn decrement_descendant_count(&mut self) -> $crate::Result<()> {
                Err($crate::Error::unsupported(
                    $crate::traits::Node::kind(self),
                    "decrement_descendant_count",
                ))
            }

            fn set_descendant_count(&mut self, _count: u64) -> $crate::Result<()> {
                Err($crate::Error::unsupported(
                    $crate::traits::Node::kind(self),
                    "set_descendant_count",
                ))
            }
        }
    };
}

pub(crate) use forward_to_structural;
pub(crate) use leaf_structure;
