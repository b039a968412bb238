use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const FNV_OFFSET_BASIS: u32 = 0x811c9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Unique identifier for a node within a revision.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeKey(pub u64);

impl NodeKey {
    /// Reserved sentinel for "no such node" (absent parent, child or sibling).
    pub const NULL: NodeKey = NodeKey(u64::MAX);
    /// Key of the document root.
    pub const DOCUMENT: NodeKey = NodeKey(0);

    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    pub fn get(self) -> Option<NodeKey> {
        (!self.is_null()).then_some(self)
    }
}

impl Default for NodeKey {
    fn default() -> Self {
        Self::NULL
    }
}

impl From<Option<NodeKey>> for NodeKey {
    fn from(key: Option<NodeKey>) -> Self {
        key.unwrap_or(Self::NULL)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("null")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Reference into the schema/type registry. Orthogonal to [`crate::Kind`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeKey(pub i32);

impl TypeKey {
    /// Type of nodes that carry no schema type (`xs:untyped`).
    pub const UNTYPED: TypeKey = TypeKey::from_name("xs:untyped");

    /// Registry key for a type name: 32-bit FNV-1a over the UTF-8 bytes.
    pub const fn from_name(name: &str) -> TypeKey {
        let bytes = name.as_bytes();
        let mut h = FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            h ^= bytes[i] as u32;
            h = h.wrapping_mul(FNV_PRIME);
            i += 1;
        }
        TypeKey(h as i32)
    }
}

impl Default for TypeKey {
    fn default() -> Self {
        Self::UNTYPED
    }
}

/// Revision number a node version was written in.
pub type Revision = u32;
