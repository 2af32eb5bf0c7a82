//! The abstract builder contract shared by both construction strategies.
//!
//! [`SandwichBuilder`] covers the full lifecycle of one assembly:
//!
//! 1. **Orchestrate**: [`SandwichBuilder::create_sandwich`] allocates a
//!    fresh [`Sandwich`] and runs the bread, patty and sauce steps in that
//!    fixed order.
//! 2. **Retrieve**: [`SandwichBuilder::get_sandwich`] hands the finished
//!    sandwich to the caller and leaves the builder empty.
//! 3. **Identify**: [`SandwichBuilder::description`] names the recipe;
//!    the registry uses it as the lookup key.
//!
//! # Reuse
//!
//! Builders are long-lived.  Each call to `create_sandwich` replaces any
//! sandwich that was built but never retrieved, so consecutive cycles
//! never leak ingredients into each other.

use crate::domain::Sandwich;
use crate::error::BuilderError;

/// Core trait for every sandwich builder.
///
/// Implementors own at most one sandwich at a time.  The trait is
/// object-safe so that heterogeneous builders can be stored behind
/// `dyn SandwichBuilder`, which is how the registry holds them.
///
/// # Implementors
///
/// - `VirtualSandwichBuilder`: steps supplied by a boxed recipe
/// - `PolicySandwichBuilder<B, P, S>`: steps supplied by three
///   compile-time policies
/// - `Box<B>` for any builder `B`, which is what the factory returns
pub trait SandwichBuilder: Send + core::fmt::Debug {
    /// Builds a new sandwich and keeps it until it is retrieved.
    ///
    /// Steps run in the order bread, patty, sauce.  A previously built
    /// but unretrieved sandwich is discarded.
    fn create_sandwich(&mut self);

    /// Hands out the sandwich built by the last
    /// [`create_sandwich`](Self::create_sandwich) call.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::EmptyRetrieval`] if nothing has been built
    /// since the previous retrieval.
    fn get_sandwich(&mut self) -> Result<Sandwich, BuilderError>;

    /// Returns `true` while a built sandwich is waiting to be retrieved.
    #[must_use]
    fn has_sandwich(&self) -> bool;

    /// Returns the stable name of this builder's recipe.
    #[must_use]
    fn description(&self) -> &str;

    /// Runs one complete create-then-retrieve cycle.
    ///
    /// # Errors
    ///
    /// Propagates [`get_sandwich`](Self::get_sandwich) errors, which a
    /// correct implementation never produces right after orchestration.
    fn build(&mut self) -> Result<Sandwich, BuilderError> {
        self.create_sandwich();
        self.get_sandwich()
    }
}

impl<B: SandwichBuilder + ?Sized> SandwichBuilder for Box<B> {
    fn create_sandwich(&mut self) {
        (**self).create_sandwich();
    }

    fn get_sandwich(&mut self) -> Result<Sandwich, BuilderError> {
        (**self).get_sandwich()
    }

    fn has_sandwich(&self) -> bool {
        (**self).has_sandwich()
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}
