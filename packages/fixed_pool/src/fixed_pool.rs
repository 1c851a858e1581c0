use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use std::any::type_name;
use std::ptr::{self, NonNull};
use std::{fmt, mem, thread};

use num_integer::Integer;

use crate::{
    DropPolicy, Error, FixedPoolBuilder, Handle, NotOwnedReason, PoolId, Result, SlotMeta,
};

/// A fixed-capacity object pool that holds up to `CAPACITY` items of type `T`.
///
/// Storage for all items is allocated once, when the pool is created, as one contiguous arena of
/// `CAPACITY` slots. The pool never grows, never shrinks and never moves its items, so the address
/// of an item is stable for as long as the item is alive.
///
/// There are multiple ways to create items in the pool:
///
/// * [`create()`][1] - places a value in the lowest-indexed free slot and returns a reference.
/// * [`create_with()`][2] and [`try_create_with()`][3] - build the value from a closure once a
///   free slot has been found. A failing or panicking closure leaves the slot free.
/// * [`insert()`][4] - places a value and returns a [`Handle`] that can later be used to access or
///   destroy exactly that item.
/// * [`begin_insert()`][5] - reserves a slot and tells you its index and handle before the value
///   is placed, which is useful if the item needs to know its own identity.
///
/// Items are destroyed explicitly by index via [`destroy()`][6] or by handle via
/// [`destroy_by_handle()`][7]. Any items still alive when the pool is dropped are dropped
/// together with the pool, in ascending slot order.
///
/// # Reverse lookup
///
/// Given a reference to an item, [`position()`][8] recovers the index of the slot the item lives
/// in using only the item's address. The address must start a slot of this pool's arena and the
/// slot must currently be occupied. Because the lookup is purely address-based, an address that
/// was recorded before its item was destroyed resolves to whatever item now occupies that slot.
/// Use a [`Handle`] if you need to tell successive occupants of a slot apart.
///
/// # Example
///
/// ```rust
/// use fixed_pool::{Error, FixedPool};
///
/// let mut pool = FixedPool::<String, 2>::new();
///
/// pool.create("Alice".to_string())?;
/// pool.create("Bob".to_string())?;
/// assert_eq!(pool.count(), 2);
///
/// // The pool is full.
/// assert!(matches!(
///     pool.create("Charlie".to_string()),
///     Err(Error::PoolExhausted { live: 2 })
/// ));
///
/// let alice = pool.get(0)?;
/// let index = pool.position(alice)?;
/// pool.destroy(index)?;
///
/// // The freed slot is reused by the next item.
/// pool.create("Charlie".to_string())?;
/// assert_eq!(pool.get(0)?, "Charlie");
/// # Ok::<(), fixed_pool::Error>(())
/// ```
///
/// [1]: Self::create
/// [2]: Self::create_with
/// [3]: Self::try_create_with
/// [4]: Self::insert
/// [5]: Self::begin_insert
/// [6]: Self::destroy
/// [7]: Self::destroy_by_handle
/// [8]: Self::position
pub struct FixedPool<T, const CAPACITY: usize> {
    /// Start of the arena of `CAPACITY` slots. Dangling (but aligned) if `CAPACITY` is zero.
    arena: NonNull<T>,

    /// Occupancy of each slot in the arena, indexed the same way.
    slots: Box<[SlotMeta]>,

    /// The number of occupied slots.
    count: usize,

    pool_id: PoolId,

    drop_policy: DropPolicy,
}

impl<T, const CAPACITY: usize> FixedPool<T, CAPACITY> {
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[must_use]
    pub(crate) fn new_inner(drop_policy: DropPolicy) -> Self {
        assert!(
            size_of::<T>() > 0,
            "FixedPool must have non-zero item size"
        );

        let arena = if CAPACITY == 0 {
            NonNull::dangling()
        } else {
            let layout = Self::layout();

            // SAFETY: The layout is valid for an array of T and not zero-sized
            // (guarded by the item size assertion above and the capacity check).
            NonNull::new(unsafe { alloc(layout).cast::<T>() })
                .unwrap_or_else(|| handle_alloc_error(layout))
        };

        Self {
            arena,
            slots: vec![SlotMeta::default(); CAPACITY].into_boxed_slice(),
            count: 0,
            pool_id: PoolId::next(),
            drop_policy,
        }
    }

    /// Creates a new [`FixedPool`] with the default configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::FixedPool;
    ///
    /// let pool = FixedPool::<u64, 32>::new();
    ///
    /// assert_eq!(pool.count(), 0);
    /// assert_eq!(pool.capacity(), 32);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a new [`FixedPool`].
    ///
    /// Use this when you want to customize the pool configuration beyond the defaults.
    pub fn builder() -> FixedPoolBuilder<T, CAPACITY> {
        FixedPoolBuilder::new()
    }

    #[must_use]
    fn layout() -> Layout {
        Layout::array::<T>(CAPACITY).expect("pool arena must fit in the address space")
    }

    /// The number of live items in the pool.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The maximum number of items the pool can hold. This never changes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Whether the pool holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether every slot of the pool is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count == CAPACITY
    }

    fn slot_ptr(&self, index: usize) -> NonNull<T> {
        assert!(
            index < CAPACITY,
            "slot {index} index out of bounds in pool of {}",
            type_name::<T>()
        );

        // SAFETY: Guarded by bounds check above, so the pointer stays within the arena.
        unsafe { self.arena.add(index) }
    }

    fn occupied_meta(&self, index: usize) -> Result<&SlotMeta> {
        self.slots
            .get(index)
            .filter(|meta| meta.is_occupied())
            .ok_or(Error::InvalidSlot {
                index,
                capacity: CAPACITY,
            })
    }

    fn occupied_meta_mut(&mut self, index: usize) -> Result<&mut SlotMeta> {
        self.slots
            .get_mut(index)
            .filter(|meta| meta.is_occupied())
            .ok_or(Error::InvalidSlot {
                index,
                capacity: CAPACITY,
            })
    }

    /// Gets a reference to the item in the slot with the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSlot`] if the index is out of bounds or the slot is empty.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.occupied_meta(index)?;

        // SAFETY: The slot is occupied, so it holds an initialized T. The returned reference
        // borrows the pool, so the item cannot be destroyed while the reference is alive.
        Ok(unsafe { self.slot_ptr(index).as_ref() })
    }

    /// Gets an exclusive reference to the item in the slot with the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSlot`] if the index is out of bounds or the slot is empty.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.occupied_meta(index)?;

        let mut slot = self.slot_ptr(index);

        // SAFETY: The slot is occupied, so it holds an initialized T. We hold an exclusive
        // reference to the pool, so no other reference to the item can exist.
        Ok(unsafe { slot.as_mut() })
    }

    /// Reserves the lowest-indexed free slot for a new item.
    ///
    /// Nothing is stored until you call [`FixedPoolInserter::insert()`]. Dropping the inserter
    /// without inserting leaves the pool unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<String, 4>::new();
    ///
    /// let inserter = pool.begin_insert()?;
    /// let index = inserter.index();
    ///
    /// let item = inserter.insert(format!("I live in slot {index}"));
    /// assert_eq!(item, "I live in slot 0");
    /// # Ok::<(), fixed_pool::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::PoolExhausted`] if every slot is occupied.
    pub fn begin_insert(&mut self) -> Result<FixedPoolInserter<'_, T, CAPACITY>> {
        #[cfg(debug_assertions)]
        self.integrity_check();

        // First fit: the lowest free index always wins.
        let Some(index) = self.slots.iter().position(|meta| !meta.is_occupied()) else {
            tracing::debug!(
                item_type = type_name::<T>(),
                capacity = CAPACITY,
                "pool exhausted"
            );

            return Err(Error::PoolExhausted { live: self.count });
        };

        Ok(FixedPoolInserter { pool: self, index })
    }

    /// Places a value in the lowest-indexed free slot and returns a reference to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PoolExhausted`] if every slot is occupied. The value is dropped.
    pub fn create(&mut self, value: T) -> Result<&mut T> {
        Ok(self.begin_insert()?.insert(value))
    }

    /// Builds a value in the lowest-indexed free slot and returns a reference to it.
    ///
    /// The closure is only called if a free slot exists. If it panics, the slot stays free.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PoolExhausted`] if every slot is occupied.
    pub fn create_with<F>(&mut self, f: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        let inserter = self.begin_insert()?;
        Ok(inserter.insert(f()))
    }

    /// Builds a value with a fallible constructor in the lowest-indexed free slot and returns a
    /// reference to it.
    ///
    /// The closure is only called if a free slot exists. If it fails, the slot stays free and the
    /// constructor's error is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::{Error, FixedPool};
    ///
    /// #[derive(Debug)]
    /// enum ParseItemError {
    ///     Pool(Error),
    ///     Parse(std::num::ParseIntError),
    /// }
    ///
    /// impl From<Error> for ParseItemError {
    ///     fn from(error: Error) -> Self {
    ///         Self::Pool(error)
    ///     }
    /// }
    ///
    /// let mut pool = FixedPool::<u32, 2>::new();
    ///
    /// let result = pool.try_create_with(|| "12x".parse::<u32>().map_err(ParseItemError::Parse));
    /// assert!(matches!(result, Err(ParseItemError::Parse(_))));
    /// assert_eq!(pool.count(), 0);
    ///
    /// let item = pool.try_create_with(|| "12".parse::<u32>().map_err(ParseItemError::Parse))?;
    /// assert_eq!(*item, 12);
    /// # Ok::<(), ParseItemError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::PoolExhausted`] (converted into `E`) if every slot is occupied, or the
    /// error returned by the closure.
    pub fn try_create_with<E, F>(&mut self, f: F) -> std::result::Result<&mut T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: From<Error>,
    {
        let inserter = self.begin_insert()?;
        let value = f()?;
        Ok(inserter.insert(value))
    }

    /// Places a value in the lowest-indexed free slot and returns a handle to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PoolExhausted`] if every slot is occupied. The value is dropped.
    pub fn insert(&mut self, value: T) -> Result<Handle> {
        let inserter = self.begin_insert()?;
        let handle = inserter.handle();
        inserter.insert(value);
        Ok(handle)
    }

    /// Destroys the item in the slot with the given index, making the slot free for reuse.
    ///
    /// The item is dropped in place. The slot's memory is not cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSlot`] if the index is out of bounds or the slot is empty.
    pub fn destroy(&mut self, index: usize) -> Result<()> {
        // The slot is marked free before the item is dropped, so a panicking drop cannot lead
        // to the item being dropped a second time during pool teardown.
        self.occupied_meta_mut(index)?.vacate();

        self.count = self
            .count
            .checked_sub(1)
            .expect("we verified above that the slot was occupied so count must be non-zero");

        // SAFETY: The slot was occupied, so it holds an initialized T. Nothing can reference
        // the item because we hold an exclusive reference to the pool.
        unsafe {
            self.slot_ptr(index).as_ptr().drop_in_place();
        }

        tracing::trace!(
            item_type = type_name::<T>(),
            index,
            live = self.count,
            "destroyed item"
        );

        Ok(())
    }

    /// Finds the index of the slot that holds the referenced item.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::{Error, FixedPool, NotOwnedReason};
    ///
    /// let mut pool = FixedPool::<u32, 4>::new();
    /// pool.create(10)?;
    /// pool.create(20)?;
    ///
    /// let second = pool.get(1)?;
    /// assert_eq!(pool.position(second)?, 1);
    ///
    /// let outsider = 20;
    /// assert!(matches!(
    ///     pool.position(&outsider),
    ///     Err(Error::ObjectNotOwned {
    ///         reason: NotOwnedReason::OutsideArena
    ///     })
    /// ));
    /// # Ok::<(), fixed_pool::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectNotOwned`] if the item does not start an occupied slot of
    /// this pool.
    pub fn position(&self, item: &T) -> Result<usize> {
        self.position_of_ptr(ptr::from_ref(item))
    }

    /// Finds the index of the slot that starts at the given address.
    ///
    /// The pointer is never dereferenced, so it is fine to pass an address whose item has
    /// already been destroyed - the lookup then fails unless the slot has been filled again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectNotOwned`] if the address is outside the arena, does not start a
    /// slot, or the slot it starts is empty.
    pub fn position_of_ptr(&self, item: *const T) -> Result<usize> {
        let not_owned = |reason| Error::ObjectNotOwned { reason };

        let offset = item
            .addr()
            .checked_sub(self.arena.as_ptr().addr())
            .ok_or_else(|| not_owned(NotOwnedReason::OutsideArena))?;

        let (index, remainder) = offset.div_rem(&size_of::<T>());

        if index >= CAPACITY {
            return Err(not_owned(NotOwnedReason::OutsideArena));
        }

        if remainder != 0 {
            return Err(not_owned(NotOwnedReason::Misaligned));
        }

        if !self.slots.get(index).is_some_and(SlotMeta::is_occupied) {
            return Err(not_owned(NotOwnedReason::VacantSlot));
        }

        Ok(index)
    }

    /// Returns a handle to the referenced item, identifying its current occupancy of the slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectNotOwned`] under the same conditions as [`position()`][1].
    ///
    /// [1]: Self::position
    pub fn handle_of(&self, item: &T) -> Result<Handle> {
        let index = self.position(item)?;
        let meta = self.occupied_meta(index)?;

        Ok(Handle::new(self.pool_id, index, meta.generation()))
    }

    fn index_of_handle(&self, handle: Handle) -> Result<usize> {
        if handle.pool_id() != self.pool_id {
            return Err(Error::ObjectNotOwned {
                reason: NotOwnedReason::ForeignPool,
            });
        }

        match self.slots.get(handle.index()) {
            Some(meta) if meta.is_occupied() && meta.generation() == handle.generation() => {
                Ok(handle.index())
            }
            _ => Err(Error::StaleHandle {
                index: handle.index(),
                generation: handle.generation(),
            }),
        }
    }

    /// Gets a reference to the item identified by the handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectNotOwned`] if the handle was issued by another pool and
    /// [`Error::StaleHandle`] if its item has been destroyed.
    pub fn get_by_handle(&self, handle: Handle) -> Result<&T> {
        self.get(self.index_of_handle(handle)?)
    }

    /// Gets an exclusive reference to the item identified by the handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectNotOwned`] if the handle was issued by another pool and
    /// [`Error::StaleHandle`] if its item has been destroyed.
    pub fn get_by_handle_mut(&mut self, handle: Handle) -> Result<&mut T> {
        let index = self.index_of_handle(handle)?;
        self.get_mut(index)
    }

    /// Destroys the item identified by the handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectNotOwned`] if the handle was issued by another pool and
    /// [`Error::StaleHandle`] if its item has already been destroyed.
    pub fn destroy_by_handle(&mut self, handle: Handle) -> Result<()> {
        let index = self.index_of_handle(handle)?;
        self.destroy(index)
    }

    /// Iterates over the live items together with their slot indexes, in ascending index order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<char, 3>::new();
    /// pool.create('a')?;
    /// pool.create('b')?;
    /// pool.create('c')?;
    /// pool.destroy(1)?;
    ///
    /// let items: Vec<_> = pool.iter().collect();
    /// assert_eq!(items, [(0, &'a'), (2, &'c')]);
    /// # Ok::<(), fixed_pool::Error>(())
    /// ```
    pub fn iter(&self) -> Iter<'_, T, CAPACITY> {
        Iter {
            pool: self,
            next_index: 0,
        }
    }

    /// Drops every live item at or after `start`, in ascending slot order.
    ///
    /// If an item panics on drop, the remaining items are still dropped while unwinding.
    fn drop_live_items_from(&mut self, start: usize) {
        let mut next = start;

        while let Some(offset) = self
            .slots
            .get(next..)
            .and_then(|rest| rest.iter().position(SlotMeta::is_occupied))
        {
            let index = next
                .checked_add(offset)
                .expect("guarded by slot table length");
            next = index.wrapping_add(1);

            self.occupied_meta_mut(index)
                .expect("we just found this slot to be occupied")
                .vacate();

            self.count = self
                .count
                .checked_sub(1)
                .expect("the slot was occupied so count must be non-zero");

            let slot = self.slot_ptr(index);

            let guard = ContinueDropping { pool: self, next };

            // SAFETY: The slot was occupied, so it holds an initialized T. It is marked vacant
            // already, so it is dropped exactly once even if its drop panics.
            unsafe {
                slot.as_ptr().drop_in_place();
            }

            mem::forget(guard);
        }
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    pub(crate) fn integrity_check(&self) {
        let observed_occupied_count = self
            .slots
            .iter()
            .filter(|meta| meta.is_occupied())
            .count();

        assert!(
            self.count == observed_occupied_count,
            "self.count {} does not match the observed occupied count {} in pool of {}",
            self.count,
            observed_occupied_count,
            type_name::<T>()
        );

        assert!(
            self.count <= CAPACITY,
            "self.count {} exceeds capacity {CAPACITY} in pool of {}",
            self.count,
            type_name::<T>()
        );
    }
}

impl<T, const CAPACITY: usize> Default for FixedPool<T, CAPACITY> {
    /// Creates a new [`FixedPool`] with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CAPACITY: usize> fmt::Debug for FixedPool<T, CAPACITY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedPool")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("capacity", &CAPACITY)
            .field("count", &self.count)
            .field("drop_policy", &self.drop_policy)
            .finish_non_exhaustive()
    }
}

impl<T, const CAPACITY: usize> Drop for FixedPool<T, CAPACITY> {
    fn drop(&mut self) {
        let was_empty = self.is_empty();

        if !was_empty {
            tracing::debug!(
                item_type = type_name::<T>(),
                live = self.count,
                "dropping pool with live items"
            );
        }

        {
            // Declared first so it runs last, also when an item panics during teardown.
            let _arena = DeallocOnDrop::<T, CAPACITY>(self.arena);

            self.drop_live_items_from(0);
        }

        // We do this check at the end so we clean up the items and memory first.
        //
        // If we are already panicking, we do not want to panic again because that will
        // simply obscure whatever the original panic was, leading to debug difficulties.
        if self.drop_policy == DropPolicy::MustNotDropItems && !thread::panicking() {
            assert!(
                was_empty,
                "dropped a non-empty pool of {} with a policy that says it must be empty when dropped",
                type_name::<T>()
            );
        }
    }
}

/// Resumes pool teardown with the next slot if dropping an item panics.
struct ContinueDropping<'p, T, const CAPACITY: usize> {
    pool: &'p mut FixedPool<T, CAPACITY>,
    next: usize,
}

impl<T, const CAPACITY: usize> Drop for ContinueDropping<'_, T, CAPACITY> {
    fn drop(&mut self) {
        self.pool.drop_live_items_from(self.next);
    }
}

/// Releases the arena of a pool when dropped.
struct DeallocOnDrop<T, const CAPACITY: usize>(NonNull<T>);

impl<T, const CAPACITY: usize> Drop for DeallocOnDrop<T, CAPACITY> {
    fn drop(&mut self) {
        if CAPACITY > 0 {
            // SAFETY: The layout must match between alloc and dealloc. It does.
            unsafe {
                dealloc(self.0.as_ptr().cast(), FixedPool::<T, CAPACITY>::layout());
            }
        }
    }
}

// SAFETY: Yes, there are raw pointers involved here but nothing inherently non-thread-mobile
// about it, so as long as T itself can move between threads, the pool can do so, too.
unsafe impl<T: Send, const CAPACITY: usize> Send for FixedPool<T, CAPACITY> {}

/// An inserter for a [`FixedPool`] that has reserved a free slot for a new item.
///
/// Created by calling [`FixedPool::begin_insert()`]. The index and handle of the new item are
/// known before the item is inserted.
#[derive(Debug)]
pub struct FixedPoolInserter<'p, T, const CAPACITY: usize> {
    pool: &'p mut FixedPool<T, CAPACITY>,

    /// Index of the vacant slot the item will be inserted into.
    index: usize,
}

impl<'p, T, const CAPACITY: usize> FixedPoolInserter<'p, T, CAPACITY> {
    /// The index of the slot the item will be inserted into.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The handle the item will be identified by once inserted.
    ///
    /// If the inserter is abandoned, the handle will never refer to a live item.
    #[must_use]
    pub fn handle(&self) -> Handle {
        let generation = self
            .pool
            .slots
            .get(self.index)
            .map(SlotMeta::next_generation)
            .expect("inserter is only created for an in-bounds slot");

        Handle::new(self.pool.pool_id, self.index, generation)
    }

    /// Inserts the item into the reserved slot and returns an exclusive reference to it.
    pub fn insert(self, value: T) -> &'p mut T {
        let slot = self.pool.slot_ptr(self.index);

        // SAFETY: The slot is in bounds and vacant (we hold the exclusive borrow of the pool
        // since we found it vacant), so we are writing into uninitialized storage without
        // overwriting any live item.
        unsafe {
            slot.as_ptr().write(value);
        }

        self.pool
            .slots
            .get_mut(self.index)
            .expect("inserter is only created for an in-bounds slot")
            .occupy();

        self.pool.count = self
            .pool
            .count
            .checked_add(1)
            .expect("count cannot exceed capacity, which is an in-memory array length");

        tracing::trace!(
            item_type = type_name::<T>(),
            index = self.index,
            live = self.pool.count,
            "created item"
        );

        // SAFETY: We just initialized the item. The reference keeps the pool exclusively
        // borrowed for 'p, so the item cannot be destroyed while the reference is alive.
        unsafe { &mut *slot.as_ptr() }
    }
}

/// Iterator over the live items of a [`FixedPool`], in ascending slot index order.
///
/// Created by [`FixedPool::iter()`].
#[derive(Debug)]
pub struct Iter<'p, T, const CAPACITY: usize> {
    pool: &'p FixedPool<T, CAPACITY>,
    next_index: usize,
}

impl<'p, T, const CAPACITY: usize> Iterator for Iter<'p, T, CAPACITY> {
    type Item = (usize, &'p T);

    fn next(&mut self) -> Option<Self::Item> {
        let pool = self.pool;

        while self.next_index < CAPACITY {
            let index = self.next_index;
            self.next_index = index.wrapping_add(1);

            if let Ok(item) = pool.get(index) {
                return Some((index, item));
            }
        }

        None
    }
}

impl<'p, T, const CAPACITY: usize> IntoIterator for &'p FixedPool<T, CAPACITY> {
    type Item = (usize, &'p T);
    type IntoIter = Iter<'p, T, CAPACITY>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
