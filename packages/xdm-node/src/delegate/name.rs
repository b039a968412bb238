use crate::ids::NodeKey;

/// Name unit for elements, attributes and processing instructions.
///
/// Names are stored as keys into the name registry; `path_node_key` points at the node's entry
/// in the path summary. Only the name keys take part in equality.
#[derive(Clone, Debug)]
pub struct NameNodeDelegate {
    uri_key: i32,
    prefix_key: i32,
    local_name_key: i32,
    path_node_key: NodeKey,
}

impl NameNodeDelegate {
    /// Key used for an absent prefix or namespace URI.
    pub const NO_NAME: i32 = -1;

    pub fn new(uri_key: i32, prefix_key: i32, local_name_key: i32, path_node_key: NodeKey) -> Self {
        Self {
            uri_key,
            prefix_key,
            local_name_key,
            path_node_key,
        }
    }

    /// A name without prefix or namespace.
    pub fn local(local_name_key: i32) -> Self {
        Self::new(Self::NO_NAME, Self::NO_NAME, local_name_key, NodeKey::NULL)
    }

    pub fn uri_key(&self) -> i32 {
        self.uri_key
    }

    pub fn set_uri_key(&mut self, key: i32) {
        self.uri_key = key;
    }

    pub fn prefix_key(&self) -> i32 {
        self.prefix_key
    }

    pub fn set_prefix_key(&mut self, key: i32) {
        self.prefix_key = key;
    }

    pub fn local_name_key(&self) -> i32 {
        self.local_name_key
    }

    pub fn set_local_name_key(&mut self, key: i32) {
        self.local_name_key = key;
    }

    pub fn path_node_key(&self) -> NodeKey {
        self.path_node_key
    }

    pub fn set_path_node_key(&mut self, key: NodeKey) {
        self.path_node_key = key;
    }
}

impl PartialEq for NameNodeDelegate {
    fn eq(&self, other: &Self) -> bool {
        self.uri_key == other.uri_key
            && self.prefix_key == other.prefix_key
            && self.local_name_key == other.local_name_key
    }
}

impl Eq for NameNodeDelegate {}

impl std::hash::Hash for NameNodeDelegate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uri_key.hash(state);
        self.prefix_key.hash(state);
        self.local_name_key.hash(state);
    }
}
