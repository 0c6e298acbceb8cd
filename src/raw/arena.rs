use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for tree nodes.
///
/// Freed slots are recycled before the backing vector grows, so a handle stays
/// valid until the node it names is taken.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.vacant.pop() {
            self.slots[handle.index()] = Some(element);
            return handle;
        }

        assert!(
            self.slots.len() <= Handle::MAX,
            "`Arena::alloc()` - node limit of {} reached",
            Handle::MAX + 1
        );
        self.slots.push(Some(element));
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.index()].as_ref().expect("`Arena::get()` - stale handle!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.index()].as_mut().expect("`Arena::get_mut()` - stale handle!")
    }

    /// Removes the element, leaving the slot free for reuse.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.index()].take().expect("`Arena::take()` - stale handle!");
        self.vacant.push(handle);
        element
    }

    /// Hands out every occupied slot mutably, indexed by slot.
    ///
    /// Slot `i` of the result belongs to `Handle::from_index(i)`; vacant slots
    /// are `None`.
    pub(crate) fn slots_mut(&mut self) -> Vec<Option<&mut T>> {
        self.slots.iter_mut().map(Option::as_mut).collect()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn capacity_is_reserved_up_front() {
        let arena: Arena<u8> = Arena::with_capacity(24);
        assert!(arena.capacity() >= 24);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn vacant_slot_is_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        assert_eq!(arena.take(a), 'a');
        let c = arena.alloc('c');
        assert_eq!(c, a);
        assert_eq!(*arena.get(b), 'b');
        assert_eq!(*arena.get(c), 'c');
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn slots_mut_lines_up_with_handles() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        let _ = arena.take(a);
        let slots = arena.slots_mut();
        assert!(slots[a.index()].is_none());
        assert_eq!(slots[b.index()].as_deref(), Some(&2));
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - stale handle!")]
    fn stale_handle_panics() {
        let mut arena = Arena::new();
        let h = arena.alloc(7u32);
        let _ = arena.take(h);
        let _ = arena.get(h);
    }

    #[test]
    #[should_panic(expected = "`Arena::alloc()` - node limit")]
    fn alloc_past_limit_panics() {
        let mut arena = Arena::new();
        for _ in 0..=Handle::MAX + 1 {
            arena.alloc(());
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        Write(usize, u32),
        Take(usize),
        Clear,
    }

    fn operation() -> impl Strategy<Value = Operation> {
        prop_oneof![
            10 => any::<u32>().prop_map(Operation::Alloc),
            4 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::Write(which, value)),
            5 => any::<usize>().prop_map(Operation::Take),
            1 => Just(Operation::Clear),
        ]
    }

    proptest! {
        #[test]
        fn arena_tracks_a_vec_model(operations in prop::collection::vec(operation(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => model.push((arena.alloc(value), value)),
                    Operation::Write(which, value) if !model.is_empty() => {
                        let index = which % model.len();
                        *arena.get_mut(model[index].0) = value;
                        model[index].1 = value;
                    }
                    Operation::Take(which) if !model.is_empty() => {
                        let (handle, value) = model.swap_remove(which % model.len());
                        prop_assert_eq!(arena.take(handle), value);
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                    Operation::Write(..) | Operation::Take(_) => {}
                }

                prop_assert_eq!(arena.len(), model.len());
                for &(handle, value) in &model {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }
        }
    }
}
