//! State identifiers and state sets.

use fixedbitset::FixedBitSet;
use std::fmt;

/// States are dense indices into a per-automaton arena.
pub type StateId = u32;

/// A set of states backed by a bit set.
///
/// Iteration is always in increasing state order, which is what makes
/// [`to_vec`](StateSet::to_vec) usable as a canonical key during subset
/// construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create an empty set sized for automatons with `capacity` states.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Create a set holding only `state`.
    pub fn singleton(state: StateId, capacity: usize) -> Self {
        let mut set = Self::with_capacity(capacity);
        set.insert(state);
        set
    }

    /// Insert a state, growing the underlying bit set if needed.
    pub fn insert(&mut self, state: StateId) {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        self.bits.insert(idx);
    }

    /// Membership test.
    pub fn contains(&self, state: StateId) -> bool {
        let idx = state as usize;
        idx < self.bits.len() && self.bits.contains(idx)
    }

    /// True if no state is present.
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Number of states present.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over the states in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }

    /// Add every state of `other` to this set.
    pub fn union_with(&mut self, other: &StateSet) {
        if other.bits.len() > self.bits.len() {
            self.bits.grow(other.bits.len());
        }
        self.bits.union_with(&other.bits);
    }

    /// True if the two sets share at least one state.
    pub fn intersects(&self, other: &StateSet) -> bool {
        self.bits.intersection(&other.bits).next().is_some()
    }

    /// Canonical sorted representation, used as a lookup key when sets
    /// of NFA states are mapped to DFA states.
    pub fn to_vec(&self) -> Vec<StateId> {
        self.iter().collect()
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut set = Self::with_capacity(0);
        for state in iter {
            set.insert(state);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = StateSet::with_capacity(8);
        assert!(set.is_empty());

        set.insert(2);
        set.insert(5);
        assert_eq!(set.len(), 2);
        assert!(set.contains(2));
        assert!(set.contains(5));
        assert!(!set.contains(3));
        assert!(!set.contains(100));
    }

    #[test]
    fn grows_past_capacity() {
        let mut set = StateSet::with_capacity(2);
        set.insert(40);
        assert!(set.contains(40));
        assert!(!set.contains(39));
    }

    #[test]
    fn union_and_intersects() {
        let mut a: StateSet = [1, 3].into_iter().collect();
        let b: StateSet = [3, 4].into_iter().collect();
        let c: StateSet = [0, 2].into_iter().collect();

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));

        a.union_with(&b);
        assert_eq!(a.to_vec(), vec![1, 3, 4]);
    }

    #[test]
    fn to_vec_is_sorted() {
        let set: StateSet = [9, 0, 4].into_iter().collect();
        assert_eq!(set.to_vec(), vec![0, 4, 9]);
    }
}
