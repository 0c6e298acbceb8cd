use core::cmp::Ordering;

/// A total order used to arrange the keys of a [`NavTreeMap`](crate::NavTreeMap).
///
/// `L` is the stored key type and `R` the type it is compared against, so a map
/// keyed by `String` can be queried with `&str` as long as the comparator
/// orders both consistently.
///
/// Any `Fn(&L, &R) -> Ordering` closure is a comparator:
///
/// ```
/// use navtree::NavTreeMap;
///
/// let mut by_len = NavTreeMap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// by_len.insert("three", 3);
/// by_len.insert("one", 1);
/// by_len.insert("eleven", 11);
///
/// let keys: Vec<_> = by_len.keys().copied().collect();
/// assert_eq!(keys, ["one", "three", "eleven"]);
/// ```
pub trait Comparator<L: ?Sized, R: ?Sized = L> {
    /// Compares `left` against `right`.
    fn compare(&self, left: &L, right: &R) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation. The default comparator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

/// Orders keys by the reverse of their [`Ord`] implementation.
///
/// ```
/// use navtree::{NavTreeMap, Reverse};
///
/// let map = NavTreeMap::from_iter_with_comparator([(1, 'a'), (3, 'c'), (2, 'b')], Reverse);
/// assert_eq!(map.first_key(), Ok(&3));
/// assert_eq!(map.lower_key(&2), Some(&3));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse;

impl<T: ?Sized + Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T: ?Sized + Ord> Comparator<T> for Reverse {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        right.cmp(left)
    }
}

impl<L: ?Sized, R: ?Sized, F> Comparator<L, R> for F
where
    F: Fn(&L, &R) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &L, right: &R) -> Ordering {
        self(left, right)
    }
}
