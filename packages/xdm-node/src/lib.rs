#![forbid(unsafe_code)]
//! Node representation layer of a versioned XML tree store.
//!
//! Node kinds are composed from small units (identity, structure, value, name) instead of a
//! type hierarchy, and expose themselves through capability traits. Storage, transactions and
//! traversal live elsewhere and only talk to the contracts defined here.

pub mod builder;
pub mod config;
pub mod delegate;
pub mod dewey;
pub mod error;
pub mod forwarding;
pub mod ids;
pub mod immutable;
pub mod keys;
pub mod kind;
pub mod node;
pub mod record;
pub mod traits;
pub mod visitor;

pub use builder::{NewNode, NodeBuilder};
pub use config::NodeConfig;
pub use delegate::{NameNodeDelegate, NodeDelegate, StructNodeDelegate, ValueNodeDelegate};
pub use dewey::DeweyId;
pub use error::{Error, Result};
pub use forwarding::{ForwardingNode, StructForwardingNode};
pub use ids::{NodeKey, Revision, TypeKey};
pub use immutable::{
    Immutable, ImmutableAttribute, ImmutableComment, ImmutableDocument, ImmutableElement,
    ImmutablePi, ImmutableText,
};
pub use keys::{KeyAllocator, MonotonicKeys};
pub use kind::Kind;
pub use node::{AttributeNode, CommentNode, DocumentNode, ElementNode, PiNode, TextNode, XmlNode};
pub use record::{NameKeys, NodeRecord};
pub use traits::{
    cmp_document_order, ContainerNode, Containment, NameNode, Node, StructNode, ValueNode,
};
pub use visitor::{Visitable, VisitResult, XmlNodeVisitor};
