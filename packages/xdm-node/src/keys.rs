use crate::error::{Error, Result};
use crate::ids::NodeKey;

/// Source of node keys for newly created nodes.
///
/// Keys are assigned monotonically; `observe` lets a writer continue after keys that were
/// loaded from storage.
pub trait KeyAllocator {
    /// Fails once the next key would collide with [`NodeKey::NULL`].
    fn next_key(&mut self) -> Result<NodeKey>;
    fn observe(&mut self, key: NodeKey);
    /// Highest key handed out or observed so far.
    fn current(&self) -> Option<NodeKey>;
}

/// Counter-based allocator. The first key it hands out is [`NodeKey::DOCUMENT`].
#[derive(Clone, Debug, Default)]
pub struct MonotonicKeys {
    last: Option<u64>,
}

impl MonotonicKeys {
    /// Allocator that continues after `last`.
    pub fn starting_after(last: NodeKey) -> Self {
        let mut keys = Self::default();
        keys.observe(last);
        keys
    }
}

impl KeyAllocator for MonotonicKeys {
    fn next_key(&mut self) -> Result<NodeKey> {
        let next = match self.last {
            None => NodeKey::DOCUMENT,
            Some(k) => match k.checked_add(1).map(NodeKey) {
                Some(key) if !key.is_null() => key,
                _ => return Err(Error::KeySpaceExhausted { last: NodeKey(k) }),
            },
        };
        self.last = Some(next.0);
        Ok(next)
    }

    fn observe(&mut self, key: NodeKey) {
        if key.is_null() {
            return;
        }
        self.last = Some(self.last.map_or(key.0, |k| k.max(key.0)));
    }

    fn current(&self) -> Option<NodeKey> {
        self.last.map(NodeKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_out_increasing_keys() {
        let mut keys = MonotonicKeys::default();
        assert_eq!(keys.current(), None);
        assert_eq!(keys.next_key(), Ok(NodeKey::DOCUMENT));
        assert_eq!(keys.next_key(), Ok(NodeKey(1)));
        assert_eq!(keys.current(), Some(NodeKey(1)));
    }

    #[test]
    fn observe_never_moves_backwards() {
        let mut keys = MonotonicKeys::starting_after(NodeKey(10));
        keys.observe(NodeKey(4));
        keys.observe(NodeKey::NULL);
        assert_eq!(keys.next_key(), Ok(NodeKey(11)));
    }

    #[test]
    fn never_hands_out_the_sentinel() {
        let mut keys = MonotonicKeys::starting_after(NodeKey(u64::MAX - 2));
        assert_eq!(keys.next_key(), Ok(NodeKey(u64::MAX - 1)));
        assert_eq!(
            keys.next_key(),
            Err(Error::KeySpaceExhausted {
                last: NodeKey(u64::MAX - 1)
            })
        );
        assert_eq!(keys.current(), Some(NodeKey(u64::MAX - 1)));
    }
}
