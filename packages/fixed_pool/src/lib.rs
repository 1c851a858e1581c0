//! A fixed-capacity object pool with explicit creation and destruction of items.
//!
//! This crate provides [`FixedPool`], which allocates storage for exactly `CAPACITY` items of
//! type `T` when it is created and never allocates again. Items are placed into the
//! lowest-indexed free slot, stay at a stable address until they are explicitly destroyed and
//! are dropped together with the pool if still alive at that point.
//!
//! # Key Features
//!
//! - **Fixed capacity**: Storage is one contiguous arena allocated up front
//! - **First-fit placement**: A new item always takes the lowest free slot index
//! - **Explicit lifetime control**: Items are destroyed on request, by index or by [`Handle`]
//! - **Reverse lookup**: [`FixedPool::position()`] recovers the slot index from an item's address
//! - **Reuse detection**: [`Handle`]s tell successive occupants of one slot apart
//! - **Fallible construction**: A failing constructor never leaves a slot occupied
//! - **Recoverable errors**: Every failure is reported as an [`Error`] and leaves the pool unchanged
//!
//! # Example
//!
//! ```rust
//! use fixed_pool::{Error, FixedPool};
//!
//! let mut pool = FixedPool::<String, 2>::new();
//!
//! let alice = pool.insert("Alice".to_string())?;
//! pool.create("Bob".to_string())?;
//!
//! // Both slots are taken.
//! assert!(matches!(
//!     pool.create("Charlie".to_string()),
//!     Err(Error::PoolExhausted { live: 2 })
//! ));
//!
//! // Look up the slot of an item from a reference to it.
//! let bob = pool.get(1)?;
//! assert_eq!(pool.position(bob)?, 1);
//!
//! pool.destroy_by_handle(alice)?;
//! assert_eq!(pool.count(), 1);
//! # Ok::<(), fixed_pool::Error>(())
//! ```
//!
//! # Thread safety
//!
//! The pool is a single-owner data structure. It can be moved to another thread if `T: Send` but
//! it cannot be shared between threads without external synchronization.

mod builder;
mod drop_policy;
mod error;
mod fixed_pool;
mod handle;
mod slot_meta;

pub use builder::*;
pub use drop_policy::*;
pub use error::{Error, NotOwnedReason};
pub(crate) use error::Result;
pub use fixed_pool::*;
pub use handle::Handle;
pub(crate) use handle::PoolId;
pub(crate) use slot_meta::*;
