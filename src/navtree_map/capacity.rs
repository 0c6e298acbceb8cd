use super::NavTreeMap;
use crate::compare::Natural;
use crate::raw::RawNavTree;

impl<K, V> NavTreeMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before
    /// its node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let map: NavTreeMap<i32, i32> = NavTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, C> NavTreeMap<K, V, C> {
    /// Creates an empty map ordered by `comparator` with room for at least
    /// `capacity` entries.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        NavTreeMap {
            raw: RawNavTree::with_capacity(capacity),
            comparator,
        }
    }

    /// Returns how many entries the map can hold without reallocating.
    ///
    /// Slots freed by removals are reused before new ones are allocated.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
