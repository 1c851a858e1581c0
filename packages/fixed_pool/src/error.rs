use std::fmt;

use thiserror::Error;

/// Errors that can occur when operating on a [`FixedPool`][crate::FixedPool].
///
/// None of these errors modify the pool - after an error, the pool is in the same state it was
/// in before the failed call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Every slot of the pool is occupied, so no new item can be created.
    #[error("not enough slots, objects created: {live}")]
    PoolExhausted {
        /// The number of live items in the pool at the time of the failed call.
        live: usize,
    },

    /// The caller referenced a slot by index but the index is out of bounds or the slot is empty.
    #[error("slot {index} is empty or out of bounds in pool of capacity {capacity}")]
    InvalidSlot {
        /// The index the caller provided.
        index: usize,

        /// The capacity of the pool, as an upper bound for valid indexes.
        capacity: usize,
    },

    /// The caller provided an object reference or handle that does not identify a live item
    /// of this pool.
    #[error("object not found in pool storage: {reason}")]
    ObjectNotOwned {
        /// Which ownership check failed.
        reason: NotOwnedReason,
    },

    /// The caller provided a handle whose item has since been destroyed. The slot may have been
    /// reused by a different item in the meantime.
    #[error("handle for slot {index} (generation {generation}) no longer refers to a live item")]
    StaleHandle {
        /// The slot index recorded in the handle.
        index: usize,

        /// The slot generation recorded in the handle.
        generation: u64,
    },
}

/// Explains why an object was found not to belong to a pool.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum NotOwnedReason {
    /// The address is before the start or past the end of the pool's storage.
    OutsideArena,

    /// The address is inside the pool's storage but does not start a slot.
    Misaligned,

    /// The address starts a slot that currently holds no item.
    VacantSlot,

    /// The handle was issued by a different pool instance.
    ForeignPool,
}

impl fmt::Display for NotOwnedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::OutsideArena => "address is outside the pool storage",
            Self::Misaligned => "address does not start a slot",
            Self::VacantSlot => "slot holds no item",
            Self::ForeignPool => "handle belongs to a different pool",
        };

        f.write_str(description)
    }
}

/// A specialized `Result` type for pool operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);
    assert_impl_all!(NotOwnedReason: Send, Sync, Copy, Debug);

    #[test]
    fn pool_exhausted_reports_live_count() {
        let error = Error::PoolExhausted { live: 2 };

        assert_eq!(error.to_string(), "not enough slots, objects created: 2");
    }

    #[test]
    fn invalid_slot_reports_index_and_capacity() {
        let error = Error::InvalidSlot {
            index: 7,
            capacity: 4,
        };

        assert_eq!(
            error.to_string(),
            "slot 7 is empty or out of bounds in pool of capacity 4"
        );
    }

    #[test]
    fn object_not_owned_includes_reason() {
        let error = Error::ObjectNotOwned {
            reason: NotOwnedReason::Misaligned,
        };

        assert_eq!(
            error.to_string(),
            "object not found in pool storage: address does not start a slot"
        );
    }
}
