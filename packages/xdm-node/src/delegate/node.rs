use std::hash::{Hash, Hasher};

use crate::dewey::DeweyId;
use crate::ids::{NodeKey, Revision, TypeKey};

/// Identity unit shared by every node kind.
///
/// Equality and hashing cover the positional content (parent key, type key, DeweyID) only.
/// The node key, revision and hash slot are per-materialization bookkeeping, so two versions of
/// the same logical node compare equal across revisions.
#[derive(Clone, Debug)]
pub struct NodeDelegate {
    node_key: NodeKey,
    parent_key: NodeKey,
    type_key: TypeKey,
    revision: Revision,
    content_hash: u64,
    dewey_id: Option<DeweyId>,
}

impl NodeDelegate {
    pub fn new(
        node_key: NodeKey,
        parent_key: NodeKey,
        type_key: TypeKey,
        revision: Revision,
        dewey_id: Option<DeweyId>,
    ) -> Self {
        Self {
            node_key,
            parent_key,
            type_key,
            revision,
            content_hash: 0,
            dewey_id,
        }
    }

    pub fn node_key(&self) -> NodeKey {
        self.node_key
    }

    pub fn parent_key(&self) -> NodeKey {
        self.parent_key
    }

    pub fn set_parent_key(&mut self, parent_key: NodeKey) {
        self.parent_key = parent_key;
    }

    pub fn has_parent(&self) -> bool {
        !self.parent_key.is_null()
    }

    pub fn type_key(&self) -> TypeKey {
        self.type_key
    }

    pub fn set_type_key(&mut self, type_key: TypeKey) {
        self.type_key = type_key;
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Content hash maintained by the versioning layer. Zero until set.
    pub fn content_hash(&self) -> u64 {
        self.content_hash
    }

    pub fn set_content_hash(&mut self, hash: u64) {
        self.content_hash = hash;
    }

    pub fn dewey_id(&self) -> Option<&DeweyId> {
        self.dewey_id.as_ref()
    }

    pub fn set_dewey_id(&mut self, dewey_id: Option<DeweyId>) {
        self.dewey_id = dewey_id;
    }
}

impl PartialEq for NodeDelegate {
    fn eq(&self, other: &Self) -> bool {
        self.parent_key == other.parent_key
            && self.type_key == other.type_key
            && self.dewey_id == other.dewey_id
    }
}

impl Eq for NodeDelegate {}

impl Hash for NodeDelegate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parent_key.hash(state);
        self.type_key.hash(state);
        self.dewey_id.hash(state);
    }
}
