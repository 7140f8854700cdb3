use ahash::RandomState;
use std::collections::HashSet;
use std::hash::Hash;

/// Membership tracking for traversals, cycle detection and flood-fills.
///
/// Contents are unordered.
#[derive(Clone)]
pub struct Set<K>(HashSet<K, RandomState>);

impl<K> Default for Set<K>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Set<K>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        Self(HashSet::with_hasher(RandomState::new()))
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashSet::with_capacity_and_hasher(
            capacity,
            RandomState::new(),
        ))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.0.contains(key)
    }

    /// Returns `true` if the key was not present before.
    pub fn add(&mut self, key: K) -> bool {
        self.0.insert(key)
    }

    /// Returns `true` if the key was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }
}

impl<K> std::fmt::Debug for Set<K>
where
    K: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}
