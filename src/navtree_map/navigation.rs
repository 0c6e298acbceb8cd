use core::borrow::Borrow;

use super::NavTreeMap;
use crate::compare::Comparator;
use crate::error::NavError;
use crate::raw::Neighbor;

impl<K, V, C> NavTreeMap<K, V, C> {
    /// Returns the least key in the map.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Empty`] if the map has no entries. Use
    /// [`first_entry`](NavTreeMap::first_entry) for an `Option` instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::{NavError, NavTreeMap};
    ///
    /// let mut map = NavTreeMap::new();
    /// assert_eq!(map.first_key(), Err(NavError::Empty));
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// assert_eq!(map.first_key(), Ok(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn first_key(&self) -> Result<&K, NavError> {
        let handle = self.raw.first().ok_or(NavError::Empty)?;
        Ok(self.raw.node(handle).key())
    }

    /// Returns the greatest key in the map.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Empty`] if the map has no entries.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn last_key(&self) -> Result<&K, NavError> {
        let handle = self.raw.last().ok_or(NavError::Empty)?;
        Ok(self.raw.node(handle).key())
    }

    /// Returns the entry with the least key, or `None` if the map is empty.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|handle| self.entry_at(handle))
    }

    /// Returns the entry with the greatest key, or `None` if the map is empty.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|handle| self.entry_at(handle))
    }

    /// Removes and returns the entry with the least key.
    ///
    /// Polling repeatedly drains the map in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let mut map = NavTreeMap::from([(2, 'b'), (1, 'a')]);
    /// assert_eq!(map.poll_first_entry(), Some((1, 'a')));
    /// assert_eq!(map.poll_first_entry(), Some((2, 'b')));
    /// assert_eq!(map.poll_first_entry(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn poll_first_entry(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes and returns the entry with the greatest key.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn poll_last_entry(&mut self) -> Option<(K, V)> {
        self.raw.pop_last()
    }

    /// Returns the greatest key strictly less than `key`.
    ///
    /// `key` itself need not be in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let map = NavTreeMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.lower_key(&20), Some(&10));
    /// assert_eq!(map.lower_key(&25), Some(&20));
    /// assert_eq!(map.lower_key(&10), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn lower_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.lower_entry(key).map(|(k, _)| k)
    }

    /// Returns the entry with the greatest key strictly less than `key`.
    pub fn lower_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.neighbor(key, Neighbor::Lower)
    }

    /// Returns the greatest key less than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let map = NavTreeMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.floor_key(&20), Some(&20));
    /// assert_eq!(map.floor_key(&25), Some(&20));
    /// assert_eq!(map.floor_key(&5), None);
    /// ```
    pub fn floor_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.floor_entry(key).map(|(k, _)| k)
    }

    /// Returns the entry with the greatest key less than or equal to `key`.
    pub fn floor_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.neighbor(key, Neighbor::Floor)
    }

    /// Returns the least key strictly greater than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let map = NavTreeMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.higher_key(&20), Some(&30));
    /// assert_eq!(map.higher_key(&30), None);
    /// ```
    pub fn higher_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.higher_entry(key).map(|(k, _)| k)
    }

    /// Returns the entry with the least key strictly greater than `key`.
    pub fn higher_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.neighbor(key, Neighbor::Higher)
    }

    /// Returns the least key greater than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let map = NavTreeMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.ceiling_key(&20), Some(&20));
    /// assert_eq!(map.ceiling_key(&21), Some(&30));
    /// assert_eq!(map.ceiling_key(&31), None);
    /// ```
    pub fn ceiling_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.ceiling_entry(key).map(|(k, _)| k)
    }

    /// Returns the entry with the least key greater than or equal to `key`.
    pub fn ceiling_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.neighbor(key, Neighbor::Ceiling)
    }

    fn neighbor<Q>(&self, key: &Q, neighbor: Neighbor) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let handle = self.raw.seek(key, neighbor, &self.comparator)?;
        Some(self.entry_at(handle))
    }
}
