use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Value unit: owns the raw payload of value-bearing kinds.
///
/// The decoded text is cached on first read and cleared by every write. The cache is a
/// `OnceLock`, so readers of a published snapshot may fill it concurrently; writes need
/// `&mut self` and therefore a single owner.
#[derive(Debug, Default)]
pub struct ValueNodeDelegate {
    raw: Vec<u8>,
    decoded: OnceLock<String>,
}

impl ValueNodeDelegate {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self {
            raw: raw.into(),
            decoded: OnceLock::new(),
        }
    }

    pub fn raw_value(&self) -> &[u8] {
        &self.raw
    }

    /// UTF-8 decoding of the raw value. Invalid sequences decode to U+FFFD.
    pub fn value(&self) -> &str {
        self.decoded.get_or_init(|| {
            tracing::trace!(len = self.raw.len(), "decoding node value");
            String::from_utf8_lossy(&self.raw).into_owned()
        })
    }

    /// Whether the decoded form is currently cached.
    pub fn is_decoded(&self) -> bool {
        self.decoded.get().is_some()
    }

    pub fn set_value(&mut self, raw: impl Into<Vec<u8>>) {
        self.raw = raw.into();
        self.decoded = OnceLock::new();
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }
}

impl Clone for ValueNodeDelegate {
    fn clone(&self) -> Self {
        Self::new(self.raw.clone())
    }
}

impl PartialEq for ValueNodeDelegate {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ValueNodeDelegate {}

impl Hash for ValueNodeDelegate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}
