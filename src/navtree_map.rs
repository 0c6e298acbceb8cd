use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use alloc::vec::Vec;

use crate::compare::{Comparator, Natural};
use crate::raw::{Handle, Node, RawNavTree};

mod capacity;
mod navigation;
mod snapshot;

/// An ordered map on a plain binary search tree with parent links.
///
/// Keys are arranged by a [`Comparator`], [`Natural`] (the key's [`Ord`]) unless
/// another is given at construction. Besides point lookups the map answers
/// navigation queries ([`floor_key`](NavTreeMap::floor_key),
/// [`higher_entry`](NavTreeMap::higher_entry), ...), removes from either end
/// ([`poll_first_entry`](NavTreeMap::poll_first_entry)) and copies out key
/// ranges ([`sub_map`](NavTreeMap::sub_map)).
///
/// # Shape and cost
///
/// The tree is **not** self-balancing. Its height depends on the order keys
/// arrive in: random arrival gives O(log n) height on average, sorted arrival
/// a single chain of height n. Every operation documented as O(h) is linear in
/// that height. Traversals never recurse, so a degenerate tree is slow but
/// cannot overflow the stack.
///
/// # Absent versus failing
///
/// Lookups that find nothing return `None`. Only
/// [`first_key`](NavTreeMap::first_key), [`last_key`](NavTreeMap::last_key) and
/// [`sub_map`](NavTreeMap::sub_map) return a [`NavError`](crate::NavError).
///
/// # Examples
///
/// ```
/// use navtree::NavTreeMap;
///
/// let mut map = NavTreeMap::new();
/// for key in [5, 3, 8, 1, 4, 7, 9] {
///     map.insert(key, key * 10);
/// }
///
/// assert_eq!(map.first_key(), Ok(&1));
/// assert_eq!(map.last_key(), Ok(&9));
/// assert_eq!(map.floor_key(&6), Some(&5));
/// assert_eq!(map.ceiling_key(&6), Some(&7));
///
/// let middle = map.sub_map(&3, &8).unwrap();
/// assert_eq!(middle.key_set().as_slice(), [3, 4, 5, 7]);
/// ```
///
/// It is a logic error for a key to change its ordering relative to other keys
/// while it is in the map. The resulting behavior is unspecified but stays
/// inside the map that observed it.
pub struct NavTreeMap<K, V, C = Natural> {
    raw: RawNavTree<K, V>,
    comparator: C,
}

/// An iterator over the entries of a `NavTreeMap`, in key order.
///
/// This `struct` is created by the [`iter`](NavTreeMap::iter) method.
pub struct Iter<'a, K, V> {
    tree: &'a RawNavTree<K, V>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// A mutable iterator over the entries of a `NavTreeMap`, in key order.
///
/// This `struct` is created by the [`iter_mut`](NavTreeMap::iter_mut) method.
pub struct IterMut<'a, K, V> {
    order: alloc::vec::IntoIter<Handle>,
    nodes: Vec<Option<&'a mut Node<K, V>>>,
}

/// An owning iterator over the entries of a `NavTreeMap`, in key order.
///
/// This `struct` is created by the `into_iter` method on [`NavTreeMap`]
/// (provided by the [`IntoIterator`] trait).
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `NavTreeMap`, in order.
///
/// This `struct` is created by the [`keys`](NavTreeMap::keys) method.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `NavTreeMap`, in key order.
///
/// This `struct` is created by the [`values`](NavTreeMap::values) method.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// A mutable iterator over the values of a `NavTreeMap`, in key order.
///
/// This `struct` is created by the [`values_mut`](NavTreeMap::values_mut) method.
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<K, V> NavTreeMap<K, V> {
    /// Makes a new, empty `NavTreeMap` ordered by the keys' [`Ord`].
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let mut map = NavTreeMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C> NavTreeMap<K, V, C> {
    /// Makes a new, empty `NavTreeMap` ordered by `comparator`.
    ///
    /// The comparator is fixed for the life of the map and is cloned into
    /// every map built from it by [`head_map`](NavTreeMap::head_map),
    /// [`tail_map`](NavTreeMap::tail_map) and [`sub_map`](NavTreeMap::sub_map).
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let mut desc = NavTreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// desc.insert(1, "a");
    /// desc.insert(2, "b");
    /// assert_eq!(desc.first_key(), Ok(&2));
    /// ```
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            raw: RawNavTree::new(),
            comparator,
        }
    }

    /// Builds a map ordered by `comparator` from an iterator of pairs.
    ///
    /// Later pairs overwrite the values of earlier pairs with an equal key.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::{NavTreeMap, Reverse};
    ///
    /// let map = NavTreeMap::from_iter_with_comparator([(1, 'a'), (2, 'b'), (1, 'z')], Reverse);
    /// assert_eq!(map.len(), 2);
    /// assert!(map.iter().eq([(&2, &'b'), (&1, &'z')]));
    /// ```
    pub fn from_iter_with_comparator<I>(iter: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        C: Comparator<K>,
    {
        let mut map = Self::with_comparator(comparator);
        map.extend(iter);
        map
    }

    /// Returns the comparator that orders this map.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Clears the map, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let mut a = NavTreeMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, as long as the
    /// comparator orders the borrowed form the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let mut map = NavTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let handle = self.raw.search(key, &self.comparator)?;
        Some(self.raw.node(handle).value())
    }

    /// Returns the stored key and its value for a key equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let handle = self.raw.search(key, &self.comparator)?;
        Some(self.entry_at(handle))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let mut map = NavTreeMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let handle = self.raw.search(key, &self.comparator)?;
        Some(self.raw.node_mut(handle).value_mut())
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.raw.search(key, &self.comparator).is_some()
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// Values are unordered, so every entry may be visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let map = NavTreeMap::from([(1, "a"), (2, "b")]);
    /// assert!(map.contains_value(&"b"));
    /// assert!(!map.contains_value(&"c"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.raw.handles().any(|handle| self.raw.node(handle).value() == value)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned.
    ///
    /// If the map did have this key present, the value is updated in place and
    /// the old value is returned. The stored key is not replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let mut map = NavTreeMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map[&37], "b");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        C: Comparator<K>,
    {
        self.raw.insert(key, value, &self.comparator)
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let mut map = NavTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if it
    /// was present.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let handle = self.raw.search(key, &self.comparator)?;
        Some(self.raw.delete(handle))
    }

    /// Retains only the entries for which `f` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let mut map: NavTreeMap<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert!(map.into_iter().eq(vec![(0, 0), (2, 20), (4, 40), (6, 60)]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n + r·h), where r is the number of removed entries.
    pub fn retain<F>(&mut self, mut f: F)
    where
        K: Clone,
        C: Comparator<K>,
        F: FnMut(&K, &mut V) -> bool,
    {
        // Deleting may move pairs between nodes, so doomed entries are named by key.
        let mut doomed = Vec::new();
        for (key, value) in self.iter_mut() {
            if !f(key, value) {
                doomed.push(key.clone());
            }
        }
        for key in &doomed {
            self.remove_entry(key);
        }
    }

    /// Moves all entries from `other` into `self`, leaving `other` empty.
    ///
    /// Values from `other` overwrite values of equal keys in `self`. Every entry
    /// is re-placed under `self`'s comparator, even when `other` was ordered by a
    /// differently configured one.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let mut a = NavTreeMap::from([(1, "a"), (3, "c")]);
    /// let mut b = NavTreeMap::from([(3, "d"), (4, "e")]);
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.len(), 3);
    /// assert!(b.is_empty());
    /// assert_eq!(a[&3], "d");
    /// ```
    pub fn append(&mut self, other: &mut Self)
    where
        C: Comparator<K>,
    {
        for (key, value) in other.raw.drain_to_vec() {
            self.insert(key, value);
        }
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let map = NavTreeMap::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let mut iter = map.iter();
    /// assert_eq!(iter.next(), Some((&1, &"a")));
    /// assert_eq!(iter.next_back(), Some((&3, &"c")));
    /// assert_eq!(iter.next(), Some((&2, &"b")));
    /// assert_eq!(iter.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) to create the iterator; O(1) amortized per step.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Gets a mutable iterator over the entries of the map, sorted by key.
    ///
    /// # Complexity
    ///
    /// O(n) to create the iterator; O(1) per step.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let (order, nodes) = self.raw.order_and_nodes_mut();
        IterMut {
            order: order.into_iter(),
            nodes,
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Gets a mutable iterator over the values of the map, in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let mut map = NavTreeMap::from([(1, 10), (2, 20)]);
    /// for value in map.values_mut() {
    ///     *value += 1;
    /// }
    /// assert!(map.values().eq(&[11, 21]));
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut { inner: self.iter_mut() }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    fn entry_at(&self, handle: Handle) -> (&K, &V) {
        let node = self.raw.node(handle);
        (node.key(), node.value())
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for NavTreeMap<K, V, C> {
    /// Copies the tree node for node, so the clone has the same shape.
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for NavTreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for NavTreeMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for NavTreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Default> Default for NavTreeMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for NavTreeMap<K, V, C> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_iter_with_comparator(iter, C::default())
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for NavTreeMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Copy, V: Copy, C: Comparator<K>> Extend<(&'a K, &'a V)> for NavTreeMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&key, &value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for NavTreeMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, Q, V, C> Index<&Q> for NavTreeMap<K, V, C>
where
    K: Borrow<Q>,
    Q: ?Sized,
    C: Comparator<Q>,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, C> IntoIterator for &'a NavTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut NavTreeMap<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V, C> IntoIterator for NavTreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::NavTreeMap;
    ///
    /// let map = NavTreeMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.remaining -= 1;
        self.front = self.tree.successor(handle);
        let node = self.tree.node(handle);
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.remaining -= 1;
        self.back = self.tree.predecessor(handle);
        let node = self.tree.node(handle);
        Some((node.key(), node.value()))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> IterMut<'a, K, V> {
    fn claim(&mut self, handle: Handle) -> (&'a K, &'a mut V) {
        self.nodes[handle.index()]
            .take()
            .expect("`IterMut` - node visited twice!")
            .entry_mut()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.order.next()?;
        Some(self.claim(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let handle = self.order.next_back()?;
        Some(self.claim(handle))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {
    fn len(&self) -> usize {
        self.order.len()
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.order.len()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<K, V> fmt::Debug for ValuesMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesMut").field("remaining", &self.inner.len()).finish()
    }
}
