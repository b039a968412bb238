use crate::delegate::node::NodeDelegate;
use crate::ids::NodeKey;

/// Structural unit: child/sibling links and subtree counters.
///
/// The unit itself does not know which kinds may contain children; its mutators always work.
/// Node variants decide which of them are reachable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructNodeDelegate {
    node: NodeDelegate,
    first_child: NodeKey,
    last_child: NodeKey,
    left_sibling: NodeKey,
    right_sibling: NodeKey,
    child_count: u64,
    descendant_count: u64,
}

impl StructNodeDelegate {
    pub fn new(node: NodeDelegate) -> Self {
        Self {
            node,
            first_child: NodeKey::NULL,
            last_child: NodeKey::NULL,
            left_sibling: NodeKey::NULL,
            right_sibling: NodeKey::NULL,
            child_count: 0,
            descendant_count: 0,
        }
    }

    pub fn with_links(
        node: NodeDelegate,
        first_child: NodeKey,
        last_child: NodeKey,
        left_sibling: NodeKey,
        right_sibling: NodeKey,
        child_count: u64,
        descendant_count: u64,
    ) -> Self {
        Self {
            node,
            first_child,
            last_child,
            left_sibling,
            right_sibling,
            child_count,
            descendant_count,
        }
    }

    pub fn node_delegate(&self) -> &NodeDelegate {
        &self.node
    }

    pub fn node_delegate_mut(&mut self) -> &mut NodeDelegate {
        &mut self.node
    }

    pub fn first_child_key(&self) -> NodeKey {
        self.first_child
    }

    pub fn set_first_child_key(&mut self, key: NodeKey) {
        self.first_child = key;
    }

    pub fn last_child_key(&self) -> NodeKey {
        self.last_child
    }

    pub fn set_last_child_key(&mut self, key: NodeKey) {
        self.last_child = key;
    }

    pub fn left_sibling_key(&self) -> NodeKey {
        self.left_sibling
    }

    pub fn set_left_sibling_key(&mut self, key: NodeKey) {
        self.left_sibling = key;
    }

    pub fn right_sibling_key(&self) -> NodeKey {
        self.right_sibling
    }

    pub fn set_right_sibling_key(&mut self, key: NodeKey) {
        self.right_sibling = key;
    }

    pub fn has_first_child(&self) -> bool {
        !self.first_child.is_null()
    }

    pub fn has_last_child(&self) -> bool {
        !self.last_child.is_null()
    }

    pub fn has_left_sibling(&self) -> bool {
        !self.left_sibling.is_null()
    }

    pub fn has_right_sibling(&self) -> bool {
        !self.right_sibling.is_null()
    }

    pub fn child_count(&self) -> u64 {
        self.child_count
    }

    pub fn increment_child_count(&mut self) {
        self.child_count += 1;
    }

    pub fn decrement_child_count(&mut self) {
        debug_assert!(self.child_count > 0, "child count underflow");
        self.child_count = self.child_count.saturating_sub(1);
    }

    pub fn descendant_count(&self) -> u64 {
        self.descendant_count
    }

    pub fn increment_descendant_count(&mut self) {
        self.descendant_count += 1;
    }

    pub fn decrement_descendant_count(&mut self) {
        debug_assert!(self.descendant_count > 0, "descendant count underflow");
        self.descendant_count = self.descendant_count.saturating_sub(1);
    }

    pub fn set_descendant_count(&mut self, count: u64) {
        self.descendant_count = count;
    }
}
