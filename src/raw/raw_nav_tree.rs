use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;
use smallvec::SmallVec;
use tracing::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::compare::Comparator;

/// Pending ancestors of an in-order walk. Degenerate trees spill to the heap
/// rather than the call stack.
type Stack = SmallVec<[Handle; 32]>;

/// The unbalanced binary search tree backing `NavTreeMap`.
///
/// The tree never compares keys on its own; every ordered operation takes the
/// map's comparator.
#[derive(Clone)]
pub(crate) struct RawNavTree<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of nodes reachable from `root`.
    len: usize,
}

/// The neighbor a seek looks for, relative to the probe key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Neighbor {
    /// Greatest key strictly less than the probe.
    Lower,
    /// Greatest key less than or equal to the probe.
    Floor,
    /// Least key strictly greater than the probe.
    Higher,
    /// Least key greater than or equal to the probe.
    Ceiling,
}

impl Neighbor {
    /// Whether a node whose key orders `ordering` against the probe qualifies.
    const fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Neighbor::Lower => ordering.is_lt(),
            Neighbor::Floor => ordering.is_le(),
            Neighbor::Higher => ordering.is_gt(),
            Neighbor::Ceiling => ordering.is_ge(),
        }
    }

    /// Direction to keep descending after a node qualifies: toward the probe.
    const fn toward(self) -> Side {
        match self {
            Neighbor::Lower | Neighbor::Floor => Side::Right,
            Neighbor::Higher | Neighbor::Ceiling => Side::Left,
        }
    }
}

/// Where a key lies relative to the span an in-order walk is collecting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Span {
    /// Before the span: the node and its left subtree are skipped.
    Below,
    /// Inside the span: the node is yielded and both subtrees are searched.
    Within,
    /// After the span: the node and its right subtree are skipped.
    Above,
}

impl<K, V> RawNavTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops every node at once.
    pub(crate) fn clear(&mut self) {
        trace!(len = self.len, "clearing tree");
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Follows `side` links from `handle` to the end of the chain.
    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(child) = self.nodes.get(handle).child(side) {
            handle = child;
        }
        handle
    }

    /// Leftmost node of the subtree rooted at `handle`.
    pub(crate) fn minimum(&self, handle: Handle) -> Handle {
        self.extreme(handle, Side::Left)
    }

    /// Rightmost node of the subtree rooted at `handle`.
    pub(crate) fn maximum(&self, handle: Handle) -> Handle {
        self.extreme(handle, Side::Right)
    }

    /// Node holding the least key, if any.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.minimum(root))
    }

    /// Node holding the greatest key, if any.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.maximum(root))
    }

    /// In-order neighbor of `handle` in direction `side`, found through parent links.
    fn step(&self, handle: Handle, side: Side) -> Option<Handle> {
        let node = self.nodes.get(handle);
        if let Some(child) = node.child(side) {
            return Some(self.extreme(child, side.opposite()));
        }

        // Climb until we arrive from the opposite side; that ancestor is next.
        let mut current = handle;
        let mut parent = node.parent();
        while let Some(up) = parent {
            let up_node = self.nodes.get(up);
            if up_node.child(side) != Some(current) {
                return Some(up);
            }
            current = up;
            parent = up_node.parent();
        }
        None
    }

    /// Next node in ascending key order.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Right)
    }

    /// Next node in descending key order.
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Left)
    }

    /// Lazily walks the tree in key order, visiting only nodes `locate` places
    /// [`Span::Within`] and pruning subtrees that cannot reach the span.
    pub(crate) fn walk<F>(&self, locate: F) -> Walk<'_, K, V, F>
    where
        F: FnMut(&K) -> Span,
    {
        Walk {
            tree: self,
            stack: Stack::new(),
            cursor: self.root,
            locate,
        }
    }

    /// Walks every node in key order.
    pub(crate) fn handles(&self) -> Walk<'_, K, V, impl FnMut(&K) -> Span> {
        self.walk(|_| Span::Within)
    }

    /// Removes every node, returning the pairs in key order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let order: Vec<Handle> = self.handles().collect();
        let entries = order.into_iter().map(|handle| self.nodes.take(handle).into_entry()).collect();
        self.clear();
        entries
    }

    /// Key order paired with mutable access to every node.
    ///
    /// The second vector is indexed by [`Handle::index`].
    pub(crate) fn order_and_nodes_mut(&mut self) -> (Vec<Handle>, Vec<Option<&mut Node<K, V>>>) {
        let order = self.handles().collect();
        (order, self.nodes.slots_mut())
    }

    /// Removes `handle` from the tree, returning the pair it held.
    ///
    /// A node with two children keeps its slot: the in-order successor's pair
    /// is moved into it and the successor's node is unlinked instead.
    pub(crate) fn delete(&mut self, handle: Handle) -> (K, V) {
        let node = self.nodes.get(handle);
        if let (Some(_), Some(right)) = (node.left(), node.right()) {
            // The minimum of the right subtree has no left child.
            let successor = self.minimum(right);
            trace!(?handle, ?successor, "deleting node with two children");
            let (key, value) = self.unlink(successor);
            return self.nodes.get_mut(handle).replace_entry(key, value);
        }
        trace!(?handle, "deleting node with at most one child");
        self.unlink(handle)
    }

    /// Splices out a node with at most one child.
    fn unlink(&mut self, handle: Handle) -> (K, V) {
        let node = self.nodes.take(handle);
        debug_assert!(!node.has_two_children(), "`RawNavTree::unlink()` - node has two children!");
        let child = node.left().or(node.right());
        let parent = node.parent();

        if let Some(child) = child {
            self.nodes.get_mut(child).set_parent(parent);
        }
        match parent {
            None => self.root = child,
            Some(parent) => {
                let parent_node = self.nodes.get_mut(parent);
                let side = parent_node
                    .side_of(handle)
                    .expect("`RawNavTree::unlink()` - parent link without a matching child link!");
                parent_node.set_child(side, child);
            }
        }

        self.len -= 1;
        node.into_entry()
    }

    /// Removes and returns the pair with the least key.
    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.first()?;
        Some(self.delete(first))
    }

    /// Removes and returns the pair with the greatest key.
    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.last()?;
        Some(self.delete(last))
    }

    /// Finds the node holding a key equal to `key`.
    pub(crate) fn search<Q, C>(&self, key: &Q, comparator: &C) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match comparator.compare(key, node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Inserts a pair, returning the previous value if the key was present.
    ///
    /// An existing key keeps its node and its stored key; only the value is replaced.
    pub(crate) fn insert<C>(&mut self, key: K, value: V, comparator: &C) -> Option<V>
    where
        C: Comparator<K>,
    {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.alloc(Node::new(key, value, None)));
            self.len = 1;
            trace!("attached root node");
            return None;
        };

        loop {
            let node = self.nodes.get(current);
            let side = match comparator.compare(&key, node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Some(self.nodes.get_mut(current).replace_value(value)),
            };
            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let handle = self.nodes.alloc(Node::new(key, value, Some(current)));
                    self.nodes.get_mut(current).set_child(side, Some(handle));
                    self.len += 1;
                    trace!(?handle, parent = ?current, ?side, len = self.len, "attached node");
                    return None;
                }
            }
        }
    }

    /// Finds the requested neighbor of `key`, which need not be present.
    ///
    /// Descends once from the root, remembering the last node that qualified.
    pub(crate) fn seek<Q, C>(&self, key: &Q, neighbor: Neighbor, comparator: &C) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let toward = neighbor.toward();
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let side = if neighbor.accepts(comparator.compare(node.key().borrow(), key)) {
                best = Some(handle);
                toward
            } else {
                toward.opposite()
            };
            current = node.child(side);
        }
        best
    }
}

/// In-order walk over a [`RawNavTree`] with an explicit stack.
pub(crate) struct Walk<'a, K, V, F> {
    tree: &'a RawNavTree<K, V>,
    stack: Stack,
    cursor: Option<Handle>,
    locate: F,
}

impl<K, V, F> Iterator for Walk<'_, K, V, F>
where
    F: FnMut(&K) -> Span,
{
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        while let Some(handle) = self.cursor {
            let node = self.tree.nodes.get(handle);
            self.cursor = match (self.locate)(node.key()) {
                Span::Below => node.right(),
                Span::Within => {
                    self.stack.push(handle);
                    node.left()
                }
                Span::Above => node.left(),
            };
        }

        let handle = self.stack.pop()?;
        self.cursor = self.tree.nodes.get(handle).right();
        Some(handle)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::manual_assert, clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use crate::compare::{Natural, Reverse};
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use proptest::prelude::*;

    impl<K: core::fmt::Debug, V> RawNavTree<K, V> {
        /// Checks ordering, parent/child symmetry and the length counter.
        pub(crate) fn validate_invariants<C: Comparator<K>>(&self, comparator: &C) {
            let mut errors: Vec<String> = Vec::new();
            let mut reachable = 0usize;

            match self.root {
                None => {
                    if self.len != 0 {
                        errors.push(alloc::format!("empty root but len={}", self.len));
                    }
                }
                Some(root) => {
                    if let Some(parent) = self.nodes.get(root).parent() {
                        errors.push(alloc::format!("root {:?} has parent {:?}", root, parent));
                    }

                    // (node, exclusive lower bound, exclusive upper bound)
                    let mut pending = vec![(root, None::<Handle>, None::<Handle>)];
                    while let Some((handle, low, high)) = pending.pop() {
                        reachable += 1;
                        let node = self.nodes.get(handle);

                        if let Some(low) = low
                            && !comparator.compare(node.key(), self.nodes.get(low).key()).is_gt()
                        {
                            errors.push(alloc::format!("{:?} not above its lower bound", node.key()));
                        }
                        if let Some(high) = high
                            && !comparator.compare(node.key(), self.nodes.get(high).key()).is_lt()
                        {
                            errors.push(alloc::format!("{:?} not below its upper bound", node.key()));
                        }

                        for (side, child) in [(Side::Left, node.left()), (Side::Right, node.right())] {
                            let Some(child) = child else { continue };
                            if self.nodes.get(child).parent() != Some(handle) {
                                errors.push(alloc::format!(
                                    "{:?} child of {:?} does not point back to it",
                                    side,
                                    node.key()
                                ));
                            }
                            match side {
                                Side::Left => pending.push((child, low, Some(handle))),
                                Side::Right => pending.push((child, Some(handle), high)),
                            }
                        }
                    }
                }
            }

            if reachable != self.len {
                errors.push(alloc::format!("len={} but {} nodes reachable", self.len, reachable));
            }
            if self.nodes.len() != self.len {
                errors.push(alloc::format!("len={} but arena holds {}", self.len, self.nodes.len()));
            }

            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        fn keys_in_order(&self) -> Vec<&K> {
            self.handles().map(|h| self.nodes.get(h).key()).collect()
        }

        fn height(&self) -> usize {
            let mut deepest = 0;
            let mut pending: Vec<(Handle, usize)> = self.root.into_iter().map(|r| (r, 1)).collect();
            while let Some((handle, depth)) = pending.pop() {
                deepest = deepest.max(depth);
                let node = self.nodes.get(handle);
                pending.extend(node.left().into_iter().chain(node.right()).map(|c| (c, depth + 1)));
            }
            deepest
        }
    }

    fn tree_of(keys: &[i32]) -> RawNavTree<i32, i32> {
        let mut tree = RawNavTree::new();
        for &key in keys {
            tree.insert(key, key * 10, &Natural);
        }
        tree
    }

    fn key_at(tree: &RawNavTree<i32, i32>, handle: Option<Handle>) -> Option<i32> {
        handle.map(|h| *tree.node(h).key())
    }

    #[test]
    fn empty_tree() {
        let tree: RawNavTree<i32, i32> = RawNavTree::new();
        tree.validate_invariants(&Natural);
        assert!(tree.is_empty());
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.search(&1, &Natural), None);
        assert_eq!(tree.seek(&1, Neighbor::Floor, &Natural), None);
        assert_eq!(tree.handles().count(), 0);
    }

    #[test]
    fn insert_shapes_tree_by_arrival_order() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        tree.validate_invariants(&Natural);
        assert_eq!(tree.height(), 3);

        let chain = tree_of(&[1, 2, 3, 4, 5, 6, 7]);
        chain.validate_invariants(&Natural);
        assert_eq!(chain.height(), 7);
    }

    #[test]
    fn equal_key_replaces_value_in_place() {
        let mut tree = tree_of(&[2, 1, 3]);
        let before = tree.search(&1, &Natural);
        assert_eq!(tree.insert(1, 99, &Natural), Some(10));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.search(&1, &Natural), before);
        assert_eq!(*tree.node(before.unwrap()).value(), 99);
    }

    #[test]
    fn delete_leaf_single_child_and_two_children() {
        let mut tree = tree_of(&[5, 3, 8, 1, 4, 7, 9, 6]);

        // Leaf.
        let leaf = tree.search(&1, &Natural).unwrap();
        assert_eq!(tree.delete(leaf), (1, 10));
        tree.validate_invariants(&Natural);

        // One child: 7 has only 6 below it.
        let single = tree.search(&7, &Natural).unwrap();
        assert_eq!(tree.delete(single), (7, 70));
        tree.validate_invariants(&Natural);
        assert_eq!(tree.node(tree.search(&6, &Natural).unwrap()).parent(), tree.search(&8, &Natural));

        // Two children: the root keeps its slot and takes its successor's pair.
        let root = tree.root.unwrap();
        assert_eq!(tree.delete(root), (5, 50));
        tree.validate_invariants(&Natural);
        assert_eq!(tree.root, Some(root));
        assert_eq!(*tree.node(root).key(), 6);
        assert_eq!(tree.keys_in_order(), [&3, &4, &6, &8, &9]);
    }

    #[test]
    fn delete_root_down_to_empty() {
        let mut tree = tree_of(&[2, 1]);
        assert_eq!(tree.delete(tree.root.unwrap()), (2, 20));
        assert_eq!(*tree.node(tree.root.unwrap()).key(), 1);
        assert_eq!(tree.node(tree.root.unwrap()).parent(), None);
        assert_eq!(tree.delete(tree.root.unwrap()), (1, 10));
        tree.validate_invariants(&Natural);
        assert!(tree.is_empty());
        assert_eq!(tree.root, None);
    }

    #[test]
    fn seek_all_four_neighbors() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        let seek = |key: i32, neighbor: Neighbor| key_at(&tree, tree.seek(&key, neighbor, &Natural));

        assert_eq!(seek(6, Neighbor::Floor), Some(5));
        assert_eq!(seek(6, Neighbor::Ceiling), Some(7));
        assert_eq!(seek(5, Neighbor::Floor), Some(5));
        assert_eq!(seek(5, Neighbor::Lower), Some(4));
        assert_eq!(seek(5, Neighbor::Ceiling), Some(5));
        assert_eq!(seek(5, Neighbor::Higher), Some(7));
        assert_eq!(seek(1, Neighbor::Lower), None);
        assert_eq!(seek(0, Neighbor::Floor), None);
        assert_eq!(seek(9, Neighbor::Higher), None);
        assert_eq!(seek(10, Neighbor::Ceiling), None);
    }

    #[test]
    fn successor_and_predecessor_follow_parent_links() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        let mut ascending = vec![];
        let mut cursor = tree.first();
        while let Some(h) = cursor {
            ascending.push(*tree.node(h).key());
            cursor = tree.successor(h);
        }
        assert_eq!(ascending, [1, 3, 4, 5, 7, 8, 9]);

        let mut descending = vec![];
        let mut cursor = tree.last();
        while let Some(h) = cursor {
            descending.push(*tree.node(h).key());
            cursor = tree.predecessor(h);
        }
        assert_eq!(descending, [9, 8, 7, 5, 4, 3, 1]);
    }

    #[test]
    fn walk_prunes_outside_span() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        let mut located = 0;
        let keys: Vec<i32> = tree
            .walk(|&k| {
                located += 1;
                if k < 3 {
                    Span::Below
                } else if k >= 8 {
                    Span::Above
                } else {
                    Span::Within
                }
            })
            .map(|h| *tree.node(h).key())
            .collect();
        assert_eq!(keys, [3, 4, 5, 7]);
        // 9 hangs right of 8, which lies above the span, so it is never located.
        assert_eq!(located, 6);
    }

    #[test]
    fn walk_survives_degenerate_depth() {
        let mut tree = RawNavTree::new();
        for key in 0..5_000 {
            tree.insert(key, (), &Natural);
        }
        assert_eq!(tree.handles().count(), 5_000);
        assert_eq!(tree.height(), 5_000);
    }

    #[test]
    fn reverse_comparator_mirrors_layout() {
        let mut tree = RawNavTree::new();
        for key in [5, 3, 8, 1] {
            tree.insert(key, (), &Reverse);
        }
        tree.validate_invariants(&Reverse);
        assert_eq!(tree.keys_in_order(), [&8, &5, &3, &1]);
        assert_eq!(key_at_unit(&tree, tree.seek(&4, Neighbor::Lower, &Reverse)), Some(5));
    }

    fn key_at_unit(tree: &RawNavTree<i32, ()>, handle: Option<Handle>) -> Option<i32> {
        handle.map(|h| *tree.node(h).key())
    }

    #[test]
    fn drain_to_vec_is_sorted_and_empties() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3]);
        assert_eq!(tree.drain_to_vec(), [(1, 10), (2, 20), (3, 30), (4, 40), (6, 60)]);
        tree.validate_invariants(&Natural);
        assert!(tree.is_empty());
    }

    #[test]
    fn clone_keeps_shape() {
        let tree = tree_of(&[5, 3, 8, 1]);
        let copy = tree.clone();
        copy.validate_invariants(&Natural);
        assert_eq!(copy.root, tree.root);
        assert_eq!(copy.keys_in_order(), tree.keys_in_order());
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i16),
        Remove(i16),
        PopFirst,
        PopLast,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (-300i16..300).prop_map(Op::Insert),
            3 => (-300i16..300).prop_map(Op::Remove),
            1 => Just(Op::PopFirst),
            1 => Just(Op::PopLast),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..400)) {
            let mut tree: RawNavTree<i16, i32> = RawNavTree::new();
            let mut model: BTreeMap<i16, i32> = BTreeMap::new();

            for (step, op) in ops.into_iter().enumerate() {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let value = step as i32;
                match op {
                    Op::Insert(key) => {
                        prop_assert_eq!(tree.insert(key, value, &Natural), model.insert(key, value));
                    }
                    Op::Remove(key) => {
                        let removed = tree.search(&key, &Natural).map(|h| tree.delete(h));
                        prop_assert_eq!(removed, model.remove_entry(&key));
                    }
                    Op::PopFirst => prop_assert_eq!(tree.pop_first(), model.pop_first()),
                    Op::PopLast => prop_assert_eq!(tree.pop_last(), model.pop_last()),
                }
                tree.validate_invariants(&Natural);
                prop_assert_eq!(tree.len(), model.len());
            }

            let walked: Vec<i16> = tree.keys_in_order().into_iter().copied().collect();
            let expected: Vec<i16> = model.keys().copied().collect();
            prop_assert_eq!(walked, expected);
        }

        #[test]
        fn seek_matches_model(keys in prop::collection::vec(-100i32..100, 0..120), probe in -110i32..110) {
            let tree = tree_of(&keys);
            let model: BTreeMap<i32, ()> = keys.iter().map(|&k| (k, ())).collect();

            let lower = model.range(..probe).next_back().map(|(k, _)| *k);
            let floor = model.range(..=probe).next_back().map(|(k, _)| *k);
            let higher = model.range(probe + 1..).next().map(|(k, _)| *k);
            let ceiling = model.range(probe..).next().map(|(k, _)| *k);

            prop_assert_eq!(key_at(&tree, tree.seek(&probe, Neighbor::Lower, &Natural)), lower);
            prop_assert_eq!(key_at(&tree, tree.seek(&probe, Neighbor::Floor, &Natural)), floor);
            prop_assert_eq!(key_at(&tree, tree.seek(&probe, Neighbor::Higher, &Natural)), higher);
            prop_assert_eq!(key_at(&tree, tree.seek(&probe, Neighbor::Ceiling, &Natural)), ceiling);
        }
    }
}
