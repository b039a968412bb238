//! Capability contracts exposed to traversal, versioning and indexing layers.
//!
//! Consumers work against these traits and never downcast. Mutating methods take `&mut self`:
//! a node is mutable only while owned by the single writer that materialized it. Once its
//! revision is committed it is shared read-only (see [`crate::XmlNode::freeze`]).

use std::cmp::Ordering;

use crate::delegate::{NameNodeDelegate, StructNodeDelegate, ValueNodeDelegate};
use crate::dewey::DeweyId;
use crate::error::Result;
use crate::forwarding::{ForwardingNode, StructForwardingNode};
use crate::ids::{NodeKey, Revision, TypeKey};
use crate::kind::Kind;

/// Identity capability, available on every kind.
pub trait Node: ForwardingNode {
    fn kind(&self) -> Kind;

    fn node_key(&self) -> NodeKey {
        self.delegate().node_key()
    }

    fn parent_key(&self) -> NodeKey {
        self.delegate().parent_key()
    }

    fn set_parent_key(&mut self, key: NodeKey) {
        self.delegate_mut().set_parent_key(key);
    }

    fn has_parent(&self) -> bool {
        self.delegate().has_parent()
    }

    fn type_key(&self) -> TypeKey {
        self.delegate().type_key()
    }

    fn set_type_key(&mut self, type_key: TypeKey) {
        self.delegate_mut().set_type_key(type_key);
    }

    fn dewey_id(&self) -> Option<&DeweyId> {
        self.delegate().dewey_id()
    }

    fn set_dewey_id(&mut self, dewey_id: Option<DeweyId>) {
        self.delegate_mut().set_dewey_id(dewey_id);
    }

    fn revision(&self) -> Revision {
        self.delegate().revision()
    }

    fn content_hash(&self) -> u64 {
        self.delegate().content_hash()
    }

    fn set_content_hash(&mut self, hash: u64) {
        self.delegate_mut().set_content_hash(hash);
    }

    /// Whether both handles refer to the same node in the revision (by key, not content).
    fn is_same_item(&self, other: &dyn Node) -> bool {
        self.node_key() == other.node_key()
    }
}

/// Structural-navigation capability, available on every kind.
///
/// Leaf kinds report NULL child links and a descendant count of zero, and their counter
/// mutators fail with [`crate::Error::UnsupportedOperation`]. Code that knows it holds a
/// container should prefer [`ContainerNode::containment`], which cannot fail.
pub trait StructNode: Node + StructForwardingNode {
    fn first_child_key(&self) -> NodeKey {
        self.struct_delegate().first_child_key()
    }

    fn set_first_child_key(&mut self, key: NodeKey) -> Result<()> {
        self.struct_delegate_mut().set_first_child_key(key);
        Ok(())
    }

    fn has_first_child(&self) -> bool {
        !self.first_child_key().is_null()
    }

    fn last_child_key(&self) -> NodeKey {
        self.struct_delegate().last_child_key()
    }

    fn set_last_child_key(&mut self, key: NodeKey) -> Result<()> {
        self.struct_delegate_mut().set_last_child_key(key);
        Ok(())
    }

    fn has_last_child(&self) -> bool {
        !self.last_child_key().is_null()
    }

    fn left_sibling_key(&self) -> NodeKey {
        self.struct_delegate().left_sibling_key()
    }

    fn set_left_sibling_key(&mut self, key: NodeKey) {
        self.struct_delegate_mut().set_left_sibling_key(key);
    }

    fn has_left_sibling(&self) -> bool {
        !self.left_sibling_key().is_null()
    }

    fn right_sibling_key(&self) -> NodeKey {
        self.struct_delegate().right_sibling_key()
    }

    fn set_right_sibling_key(&mut self, key: NodeKey) {
        self.struct_delegate_mut().set_right_sibling_key(key);
    }

    fn has_right_sibling(&self) -> bool {
        !self.right_sibling_key().is_null()
    }

    fn child_count(&self) -> u64 {
        self.struct_delegate().child_count()
    }

    fn increment_child_count(&mut self) -> Result<()> {
        self.struct_delegate_mut().increment_child_count();
        Ok(())
    }

    fn decrement_child_count(&mut self) -> Result<()> {
        self.struct_delegate_mut().decrement_child_count();
        Ok(())
    }

    fn descendant_count(&self) -> u64 {
        self.struct_delegate().descendant_count()
    }

    fn increment_descendant_count(&mut self) -> Result<()> {
        self.struct_delegate_mut().increment_descendant_count();
        Ok(())
    }

    fn decrement_descendant_count(&mut self) -> Result<()> {
        self.struct_delegate_mut().decrement_descendant_count();
        Ok(())
    }

    fn set_descendant_count(&mut self, count: u64) -> Result<()> {
        self.struct_delegate_mut().set_descendant_count(count);
        Ok(())
    }
}

/// Compile-time containment capability. Only kinds that can hold children implement it.
pub trait ContainerNode: StructNode {
    fn containment(&mut self) -> Containment<'_> {
        Containment(self.struct_delegate_mut())
    }
}

/// Infallible handle on a container's child links and subtree counters.
pub struct Containment<'a>(&'a mut StructNodeDelegate);

impl Containment<'_> {
    pub fn set_first_child_key(&mut self, key: NodeKey) -> &mut Self {
        self.0.set_first_child_key(key);
        self
    }

    pub fn set_last_child_key(&mut self, key: NodeKey) -> &mut Self {
        self.0.set_last_child_key(key);
        self
    }

    pub fn increment_child_count(&mut self) -> &mut Self {
        self.0.increment_child_count();
        self
    }

    pub fn decrement_child_count(&mut self) -> &mut Self {
        self.0.decrement_child_count();
        self
    }

    pub fn increment_descendant_count(&mut self) -> &mut Self {
        self.0.increment_descendant_count();
        self
    }

    pub fn decrement_descendant_count(&mut self) -> &mut Self {
        self.0.decrement_descendant_count();
        self
    }

    pub fn set_descendant_count(&mut self, count: u64) -> &mut Self {
        self.0.set_descendant_count(count);
        self
    }
}

/// Value capability, available only on value-bearing kinds.
pub trait ValueNode: Node {
    fn value_delegate(&self) -> &ValueNodeDelegate;
    fn value_delegate_mut(&mut self) -> &mut ValueNodeDelegate;

    fn raw_value(&self) -> &[u8] {
        self.value_delegate().raw_value()
    }

    /// Decoded text of the raw value, cached until the next [`ValueNode::set_value`].
    fn value(&self) -> &str {
        self.value_delegate().value()
    }

    fn set_value(&mut self, raw: Vec<u8>) {
        self.value_delegate_mut().set_value(raw);
    }
}

/// Name capability of elements, attributes and processing instructions.
pub trait NameNode: Node {
    fn name_delegate(&self) -> &NameNodeDelegate;
    fn name_delegate_mut(&mut self) -> &mut NameNodeDelegate;

    fn uri_key(&self) -> i32 {
        self.name_delegate().uri_key()
    }

    fn set_uri_key(&mut self, key: i32) {
        self.name_delegate_mut().set_uri_key(key);
    }

    fn prefix_key(&self) -> i32 {
        self.name_delegate().prefix_key()
    }

    fn set_prefix_key(&mut self, key: i32) {
        self.name_delegate_mut().set_prefix_key(key);
    }

    fn local_name_key(&self) -> i32 {
        self.name_delegate().local_name_key()
    }

    fn set_local_name_key(&mut self, key: i32) {
        self.name_delegate_mut().set_local_name_key(key);
    }

    fn path_node_key(&self) -> NodeKey {
        self.name_delegate().path_node_key()
    }

    fn set_path_node_key(&mut self, key: NodeKey) {
        self.name_delegate_mut().set_path_node_key(key);
    }
}

/// Document order of two nodes by address. `None` when either node has no DeweyID.
pub fn cmp_document_order(a: &dyn Node, b: &dyn Node) -> Option<Ordering> {
    Some(a.dewey_id()?.cmp(b.dewey_id()?))
}
