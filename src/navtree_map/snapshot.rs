use core::borrow::Borrow;
use core::cmp::Ordering;

use tracing::debug;

use super::NavTreeMap;
use crate::compare::Comparator;
use crate::distinct_vec::DistinctVec;
use crate::error::NavError;
use crate::raw::Span;

impl<K, V, C> NavTreeMap<K, V, C> {
    /// Returns a new map holding copies of every entry whose key is strictly
    /// less than `end`.
    ///
    /// The result is a detached snapshot ordered by a clone of this map's
    /// comparator. Changes to either map are not seen by the other.
    ///
    /// Entries are copied in key order, so the snapshot's tree degenerates into
    /// a chain; lookups in it cost O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let map = NavTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// let head = map.head_map(&3);
    /// assert!(head.keys().eq(&[1, 2]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h + m²) for m copied entries.
    #[must_use]
    pub fn head_map<Q>(&self, end: &Q) -> Self
    where
        K: Clone + Borrow<Q>,
        V: Clone,
        Q: ?Sized,
        C: Comparator<K> + Comparator<Q> + Clone,
    {
        self.snapshot(|key| {
            if self.locate(key, end).is_lt() {
                Span::Within
            } else {
                Span::Above
            }
        })
    }

    /// Returns a new map holding copies of every entry whose key is greater
    /// than or equal to `start`.
    ///
    /// Like [`head_map`](NavTreeMap::head_map), the result is a detached snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let map = NavTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// let tail = map.tail_map(&2);
    /// assert!(tail.keys().eq(&[2, 3]));
    /// ```
    #[must_use]
    pub fn tail_map<Q>(&self, start: &Q) -> Self
    where
        K: Clone + Borrow<Q>,
        V: Clone,
        Q: ?Sized,
        C: Comparator<K> + Comparator<Q> + Clone,
    {
        self.snapshot(|key| {
            if self.locate(key, start).is_lt() {
                Span::Below
            } else {
                Span::Within
            }
        })
    }

    /// Returns a new map holding copies of every entry with
    /// `start <= key < end`.
    ///
    /// An equal `start` and `end` give an empty map. The result is a detached
    /// snapshot, as for [`head_map`](NavTreeMap::head_map).
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidRange`] if `start` is ordered after `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::{NavError, NavTreeMap};
    ///
    /// let map: NavTreeMap<i32, ()> = (0..10).map(|k| (k, ())).collect();
    /// let middle = map.sub_map(&3, &6)?;
    /// assert!(middle.keys().eq(&[3, 4, 5]));
    ///
    /// assert!(map.sub_map(&4, &4)?.is_empty());
    /// assert_eq!(map.sub_map(&6, &3), Err(NavError::InvalidRange));
    /// # Ok::<(), NavError>(())
    /// ```
    pub fn sub_map<Q>(&self, start: &Q, end: &Q) -> Result<Self, NavError>
    where
        K: Clone + Borrow<Q>,
        V: Clone,
        Q: ?Sized,
        C: Comparator<K> + Comparator<Q> + Clone,
    {
        if <C as Comparator<Q>>::compare(&self.comparator, start, end).is_gt() {
            return Err(NavError::InvalidRange);
        }
        Ok(self.snapshot(|key| {
            if self.locate(key, start).is_lt() {
                Span::Below
            } else if self.locate(key, end).is_lt() {
                Span::Within
            } else {
                Span::Above
            }
        }))
    }

    /// Copies every key, in order, into a [`DistinctVec`].
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let map = NavTreeMap::from([(2, 'b'), (1, 'a')]);
    /// assert_eq!(map.key_set().as_slice(), [1, 2]);
    /// ```
    #[must_use]
    pub fn key_set(&self) -> DistinctVec<K>
    where
        K: Clone + PartialEq,
    {
        self.raw.handles().map(|handle| self.raw.node(handle).key().clone()).collect()
    }

    /// Copies every entry, in key order, into a [`DistinctVec`].
    #[must_use]
    pub fn entry_set(&self) -> DistinctVec<(K, V)>
    where
        K: Clone + PartialEq,
        V: Clone + PartialEq,
    {
        self.raw
            .handles()
            .map(|handle| {
                let node = self.raw.node(handle);
                (node.key().clone(), node.value().clone())
            })
            .collect()
    }

    /// Orders a stored key against a range bound given in borrowed form.
    fn locate<Q>(&self, key: &K, bound: &Q) -> Ordering
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.comparator.compare(key.borrow(), bound)
    }

    /// Builds a map from clones of the entries `locate` places within its span.
    fn snapshot<F>(&self, locate: F) -> Self
    where
        F: FnMut(&K) -> Span,
        K: Clone,
        V: Clone,
        C: Comparator<K> + Clone,
    {
        let mut snapshot = Self::with_comparator(self.comparator.clone());
        for handle in self.raw.walk(locate) {
            let node = self.raw.node(handle);
            snapshot.insert(node.key().clone(), node.value().clone());
        }
        debug!(source_len = self.len(), len = snapshot.len(), "copied snapshot");
        snapshot
    }
}
