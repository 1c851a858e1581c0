/// Occupancy bookkeeping for one slot of the arena.
///
/// The item itself lives in the arena at the same index; this only records whether the slot
/// holds an initialized item and which occupant it is.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SlotMeta {
    occupied: bool,

    /// Advanced every time the slot becomes occupied. Starts at zero for a never-used slot, so the
    /// first occupant has generation 1.
    generation: u64,
}

impl SlotMeta {
    #[must_use]
    pub(crate) fn is_occupied(&self) -> bool {
        self.occupied
    }

    #[must_use]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// The generation the slot will have once it is next occupied.
    #[must_use]
    pub(crate) fn next_generation(&self) -> u64 {
        self.generation.wrapping_add(1)
    }

    pub(crate) fn occupy(&mut self) {
        debug_assert!(!self.occupied, "occupied slot was occupied again");

        self.occupied = true;
        self.generation = self.next_generation();
    }

    pub(crate) fn vacate(&mut self) {
        debug_assert!(self.occupied, "vacant slot was vacated again");

        self.occupied = false;
    }
}
