use thiserror::Error;

use crate::ids::NodeKey;
use crate::kind::Kind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A structural counter mutator was called on a node kind that cannot contain children.
    #[error("unsupported operation: {operation} on {kind} node")]
    UnsupportedOperation { kind: Kind, operation: &'static str },
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: Kind, found: Kind },
    #[error("invalid dewey id: {0}")]
    InvalidDeweyId(String),
    #[error("inconsistent state: {0}")]
    InconsistentState(String),
    #[error("node key space exhausted after {last}")]
    KeySpaceExhausted { last: NodeKey },
}

impl Error {
    pub(crate) fn unsupported(kind: Kind, operation: &'static str) -> Self {
        tracing::error!(%kind, operation, "structural mutator called on a leaf node");
        Error::UnsupportedOperation { kind, operation }
    }

    /// Whether this error signals capability misuse (a caller bug) rather than bad input data.
    pub fn is_capability_misuse(&self) -> bool {
        matches!(self, Error::UnsupportedOperation { .. })
    }
}
