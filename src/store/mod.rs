//! The storage capability the score layer is written against.

pub use memory::MemoryStore;

pub mod memory;

use crate::Days;

/// A string key/value store whose entries carry a lifetime.
///
/// Writes are fire-and-forget. An implementation that cannot persist a value
/// drops it quietly, and a later `get` simply comes back empty.
pub trait Store {
    /// Current value under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Replace whatever is under `key`, keeping it for `ttl` days.
    fn set(&mut self, key: &str, value: &str, ttl: Days);
    /// Remove `key`. Removing a missing key is a no-op.
    fn delete(&mut self, key: &str);
}

impl<S: Store + ?Sized> Store for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
    fn set(&mut self, key: &str, value: &str, ttl: Days) {
        (**self).set(key, value, ttl)
    }
    fn delete(&mut self, key: &str) {
        (**self).delete(key)
    }
}
