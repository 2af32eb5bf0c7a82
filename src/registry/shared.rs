//! Shared builder handles.
//!
//! The registry never owns a builder.  Callers own builders through a
//! [`SharedBuilder`] and the registry keeps a `Weak` to the same
//! allocation, so dropping the last `SharedBuilder` retires the entry.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::traits::SandwichBuilder;

/// Owning, lockable handle to a builder of any strategy.
pub type SharedBuilder = Arc<Mutex<dyn SandwichBuilder>>;

/// Wraps a builder in a [`SharedBuilder`].
///
/// # Examples
///
/// ```
/// use sandwich_builder::builders::{MultigrainChickenBbq, VirtualSandwichBuilder};
/// use sandwich_builder::registry::{lock, share};
/// use sandwich_builder::traits::SandwichBuilder;
///
/// let builder = share(VirtualSandwichBuilder::new(MultigrainChickenBbq));
/// let sandwich = lock(&builder).build().expect("just built");
/// assert_eq!(sandwich.describe(), "Multigrain with Chicken and BBQ");
/// ```
#[must_use]
pub fn share<B: SandwichBuilder + 'static>(builder: B) -> SharedBuilder {
    Arc::new(Mutex::new(builder))
}

/// Locks a shared builder.
///
/// A panic while another holder had the lock leaves the builder either
/// empty or holding a complete sandwich, so poisoning is ignored.
pub fn lock(builder: &SharedBuilder) -> MutexGuard<'_, dyn SandwichBuilder + 'static> {
    builder.lock().unwrap_or_else(PoisonError::into_inner)
}
