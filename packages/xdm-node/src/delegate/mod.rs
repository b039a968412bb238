//! Reusable units composed by the node variants. Each unit owns exactly one concern.

pub mod name;
pub mod node;
pub mod structural;
pub mod value;

pub use name::NameNodeDelegate;
pub use node::NodeDelegate;
pub use structural::StructNodeDelegate;
pub use value::ValueNodeDelegate;
