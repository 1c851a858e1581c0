use std::marker::PhantomData;

use crate::{DropPolicy, FixedPool};

/// Builder for creating an instance of [`FixedPool`].
///
/// You only need to use this builder if you want to customize the pool configuration.
/// The default configuration used by [`FixedPool::new()`][1] is sufficient for most use cases.
///
/// # Examples
///
/// ```
/// use fixed_pool::{DropPolicy, FixedPool};
///
/// let pool = FixedPool::<u32, 16>::builder()
///     .drop_policy(DropPolicy::MayDropItems)
///     .build();
///
/// assert_eq!(pool.capacity(), 16);
/// ```
///
/// [1]: FixedPool::new
#[must_use]
pub struct FixedPoolBuilder<T, const CAPACITY: usize> {
    drop_policy: DropPolicy,

    _item: PhantomData<T>,
}

impl<T, const CAPACITY: usize> std::fmt::Debug for FixedPoolBuilder<T, CAPACITY> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedPoolBuilder")
            .field(
                "item_type",
                &std::format_args!("{}", std::any::type_name::<T>()),
            )
            .field("capacity", &CAPACITY)
            .field("drop_policy", &self.drop_policy)
            .finish()
    }
}

impl<T, const CAPACITY: usize> FixedPoolBuilder<T, CAPACITY> {
    pub(crate) fn new() -> Self {
        Self {
            drop_policy: DropPolicy::default(),
            _item: PhantomData,
        }
    }

    /// Sets the [drop policy][DropPolicy] for the pool. This governs how
    /// to treat remaining items in the pool when the pool is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_pool::{DropPolicy, FixedPool};
    ///
    /// let pool = FixedPool::<u32, 4>::builder()
    ///     .drop_policy(DropPolicy::MustNotDropItems)
    ///     .build();
    /// ```
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Builds the pool with the specified configuration, allocating storage for all
    /// `CAPACITY` items up front.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_pool::FixedPool;
    ///
    /// let pool = FixedPool::<u32, 4>::builder().build();
    /// assert!(pool.is_empty());
    /// ```
    #[must_use]
    pub fn build(self) -> FixedPool<T, CAPACITY> {
        FixedPool::new_inner(self.drop_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_may_drop() {
        let builder = FixedPoolBuilder::<u32, 2>::new();

        assert_eq!(builder.drop_policy, DropPolicy::MayDropItems);
    }

    #[test]
    fn debug_names_item_type() {
        let builder = FixedPoolBuilder::<u32, 2>::new().drop_policy(DropPolicy::MustNotDropItems);

        let debug = format!("{builder:?}");

        assert!(debug.contains("u32"));
        assert!(debug.contains("MustNotDropItems"));
    }
}
