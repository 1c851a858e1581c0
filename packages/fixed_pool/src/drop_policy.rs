/// Determines how the pool treats items that are still alive when the pool is dropped.
///
/// Either way, every remaining item is dropped exactly once, in ascending slot order.
///
/// # Examples
///
/// ```
/// use fixed_pool::{DropPolicy, FixedPool};
///
/// // The drop policy is set at pool creation time.
/// let pool = FixedPool::<u32, 8>::builder()
///     .drop_policy(DropPolicy::MustNotDropItems)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// The pool will drop its items when the pool is dropped. This is the default.
    #[default]
    MayDropItems,

    /// The pool will drop its items and then panic if it still contained items when dropped.
    ///
    /// This may be valuable if there are external requirements before the items can be dropped.
    /// For example, an item may be registered elsewhere by address and must be explicitly
    /// destroyed (and unregistered) before the pool goes away.
    MustNotDropItems,
}
