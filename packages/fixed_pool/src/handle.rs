use std::sync::atomic::{self, AtomicU64};

/// Identifies one pool instance for the purpose of rejecting handles issued by other pools.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct PoolId(u64);

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(0);

impl PoolId {
    #[must_use]
    pub(crate) fn next() -> Self {
        // Only uniqueness matters, no ordering with other memory operations.
        Self(NEXT_POOL_ID.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

/// A handle that identifies one specific item in a [`FixedPool`][crate::FixedPool].
///
/// Handles are returned by [`FixedPool::insert()`][1] and [`FixedPoolInserter::handle()`][2] or
/// obtained from a reference via [`FixedPool::handle_of()`][3].
///
/// Unlike a bare slot index, a handle remembers which occupant of the slot it was issued for.
/// After the item is destroyed, the handle is rejected with [`Error::StaleHandle`][4] even if the
/// same slot has been filled again by a different item. Handles issued by one pool are rejected
/// by every other pool.
///
/// # Example
///
/// ```rust
/// use fixed_pool::{Error, FixedPool};
///
/// let mut pool = FixedPool::<i32, 1>::new();
///
/// let first = pool.insert(42)?;
/// assert_eq!(*pool.get_by_handle(first)?, 42);
///
/// pool.destroy_by_handle(first)?;
/// let second = pool.insert(24)?;
///
/// // Both items lived in slot 0 but the handles still tell them apart.
/// assert_eq!(first.index(), second.index());
/// assert!(matches!(
///     pool.get_by_handle(first),
///     Err(Error::StaleHandle { .. })
/// ));
/// # Ok::<(), fixed_pool::Error>(())
/// ```
///
/// [1]: crate::FixedPool::insert
/// [2]: crate::FixedPoolInserter::handle
/// [3]: crate::FixedPool::handle_of
/// [4]: crate::Error::StaleHandle
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    pool_id: PoolId,
    index: usize,
    generation: u64,
}

impl Handle {
    #[must_use]
    pub(crate) fn new(pool_id: PoolId, index: usize, generation: u64) -> Self {
        Self {
            pool_id,
            index,
            generation,
        }
    }

    /// The index of the slot the item was placed in.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Which occupant of the slot this handle was issued for.
    ///
    /// Every time a slot is filled, its generation advances by one.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub(crate) fn pool_id(&self) -> PoolId {
        self.pool_id
    }
}
