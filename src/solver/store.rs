use std::hash::{Hash, Hasher};
use std::ops::Index;

use fnv::{FnvHashMap, FnvHasher};

/// Handle of an interned state, stable for the lifetime of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

/// Owns every state generated during one search and maps value-equal states to the same `StateId`.
///
/// The hash only narrows down candidates, equality is always checked within a bucket.
#[derive(Debug)]
pub struct StateStore<T> {
    states: Vec<T>,
    buckets: FnvHashMap<u64, Vec<StateId>>,
}

impl<T: Eq + Hash> StateStore<T> {
    pub fn new() -> Self {
        StateStore {
            states: Vec::new(),
            buckets: FnvHashMap::default(),
        }
    }

    /// Returns the handle of the value-equal state if there already is one (`state` is dropped),
    /// otherwise takes ownership of `state` and returns a new handle.
    pub fn intern(&mut self, state: T) -> StateId {
        let bucket = self.buckets.entry(hash(&state)).or_insert_with(Vec::new);
        for &id in bucket.iter() {
            if self.states[id.0] == state {
                return id;
            }
        }

        let id = StateId(self.states.len());
        self.states.push(state);
        bucket.push(id);
        id
    }

    pub fn find(&self, state: &T) -> Option<StateId> {
        self.buckets
            .get(&hash(state))?
            .iter()
            .cloned()
            .find(|&id| self.states[id.0] == *state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<T: Eq + Hash> Default for StateStore<T> {
    fn default() -> Self {
        StateStore::new()
    }
}

impl<T> Index<StateId> for StateStore<T> {
    type Output = T;

    fn index(&self, id: StateId) -> &T {
        &self.states[id.0]
    }
}

fn hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = FnvHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::state::PuzzleState;

    #[test]
    fn interning_equal_states() {
        let level = r"
######
#@ $.#
######
";
        let a: PuzzleState = level.parse().unwrap();
        let b: PuzzleState = level.parse().unwrap();
        assert_eq!(a.content_hash(), b.content_hash());

        let mut store = StateStore::new();
        let id_a = store.intern(a);
        let id_b = store.intern(b);
        assert_eq!(id_a, id_b);
        assert_eq!(store.len(), 1);

        let c = store[id_a].successors().remove(0);
        assert_eq!(store.find(&c), None);
        let id_c = store.intern(c.clone());
        assert_ne!(id_a, id_c);
        assert_eq!(store.find(&c), Some(id_c));
        assert_eq!(store.len(), 2);
    }

    /// Every value lands in the same bucket.
    #[derive(Debug, PartialEq, Eq)]
    struct Colliding(u8);

    impl Hash for Colliding {
        fn hash<H: Hasher>(&self, state: &mut H) {
            state.write_u8(0);
        }
    }

    #[test]
    fn hash_collisions() {
        let mut store = StateStore::new();
        let ids: Vec<_> = (0..10).map(|i| store.intern(Colliding(i))).collect();
        assert_eq!(store.len(), 10);
        for (i, &id) in ids.iter().enumerate() {
            assert_eq!(store.intern(Colliding(i as u8)), id);
            assert_eq!(store[id], Colliding(i as u8));
        }
        assert_eq!(store.len(), 10);
        assert_eq!(store.buckets.len(), 1);
    }
}
