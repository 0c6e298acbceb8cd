//! An append-only collection that keeps the first of any equal elements.

use alloc::vec::Vec;
use core::slice;

/// A list that silently drops elements equal to one it already holds.
///
/// Elements stay in the order they were first pushed. This is the collection
/// returned by [`NavTreeMap::key_set`](crate::NavTreeMap::key_set) and
/// [`NavTreeMap::entry_set`](crate::NavTreeMap::entry_set): fed by an in-order
/// walk, insertion order is key order. It is a detached copy; later changes to
/// the map do not show up in it.
///
/// Every [`push`](DistinctVec::push) scans the existing elements, so building a
/// `DistinctVec` of `n` elements costs O(n²) comparisons.
///
/// # Examples
///
/// ```
/// use navtree::DistinctVec;
///
/// let mut seen = DistinctVec::new();
/// assert!(seen.push("b"));
/// assert!(seen.push("a"));
/// assert!(!seen.push("b"));
///
/// assert_eq!(seen.as_slice(), ["b", "a"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DistinctVec<T> {
    items: Vec<T>,
}

impl<T> DistinctVec<T> {
    /// Makes a new, empty `DistinctVec`. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Views the elements as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> DistinctVec<T> {
    /// Appends `item` unless an equal element is already present.
    ///
    /// Returns whether `item` was appended.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn push(&mut self, item: T) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Returns `true` if an element equal to `item` is present.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Default for DistinctVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for DistinctVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut distinct = Self::new();
        distinct.extend(iter);
        distinct
    }
}

impl<T: PartialEq> Extend<T> for DistinctVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> IntoIterator for DistinctVec<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DistinctVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    #[test]
    fn empty() {
        let distinct: DistinctVec<u8> = DistinctVec::default();
        assert!(distinct.is_empty());
        assert_eq!(distinct.len(), 0);
        assert_eq!(distinct.iter().next(), None);
    }

    #[test]
    fn keeps_first_occurrence_in_order() {
        let distinct: DistinctVec<_> = [3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(distinct.as_slice(), [3, 1, 2]);
        assert!(distinct.contains(&2));
        assert!(!distinct.contains(&4));
        assert_eq!(distinct.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn pairs_are_compared_whole() {
        let mut distinct = DistinctVec::new();
        assert!(distinct.push((1, 'a')));
        assert!(distinct.push((1, 'b')));
        assert!(!distinct.push((1, 'a')));
        assert_eq!(distinct.len(), 2);
    }

    proptest! {
        #[test]
        fn matches_dedup_model(items in prop::collection::vec(0u8..32, 0..128)) {
            let mut model: Vec<u8> = Vec::new();
            for &item in &items {
                if !model.contains(&item) {
                    model.push(item);
                }
            }

            let distinct: DistinctVec<u8> = items.iter().copied().collect();
            prop_assert_eq!(distinct.len(), model.len());
            prop_assert_eq!(distinct.iter().copied().collect::<Vec<_>>(), model);
        }
    }
}
