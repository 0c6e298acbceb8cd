use core::num::NonZero;

// Tests use a narrow representation so the capacity limit is reachable.
#[cfg(test)]
type Slot = u16;
#[cfg(not(test))]
type Slot = u32;

/// Address of a node slot in the arena.
///
/// Stored off-by-one in a `NonZero` so that `Option<Handle>` (every child and
/// parent link) costs no more than the handle itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<Slot>);

impl Handle {
    /// Largest slot index a handle can address.
    pub(crate) const MAX: usize = (Slot::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - slot index exceeds `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        let slot = (index + 1) as Slot;
        match NonZero::new(slot) {
            Some(slot) => Self(slot),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
