#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::TypeKey;

/// Per-resource settings for node creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NodeConfig {
    /// Assign DeweyIDs to new nodes. When off, nodes carry no address and document order
    /// must come from traversal.
    pub dewey_ids: bool,
    /// Type key given to new nodes.
    pub default_type: TypeKey,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            dewey_ids: true,
            default_type: TypeKey::UNTYPED,
        }
    }
}

impl NodeConfig {
    pub fn without_dewey_ids() -> Self {
        Self {
            dewey_ids: false,
            ..Self::default()
        }
    }
}
