use super::Store;
use crate::Days;
use std::collections::BTreeMap;

/// Plain map, no clock. Lifetimes are recorded for inspection but never
/// enforced, which keeps it deterministic for callers that only care about
/// last-write-wins semantics.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, (String, Days)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
    /// Lifetime the entry under `key` was last written with.
    pub fn ttl(&self, key: &str) -> Option<Days> {
        self.entries.get(key).map(|(_, ttl)| *ttl)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|(value, _)| value.clone())
    }
    fn set(&mut self, key: &str, value: &str, ttl: Days) {
        self.entries.insert(key.to_owned(), (value.to_owned(), ttl));
    }
    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
