//! Single-step construction policies for the statically composed builder.
//!
//! Bread, patty and sauce are independent of each other, so each one is
//! supplied by its own policy type.  A policy is a zero-sized marker with
//! one associated function and a description token; it holds no state and
//! is never instantiated.
//!
//! `PolicySandwichBuilder<B, P, S>` picks one policy of each kind at
//! compile time, so every step call is resolved statically.

use crate::domain::Sandwich;

/// Supplies the bread step.
pub trait BreadPolicy: 'static {
    /// Identifier used in builder descriptions, e.g. `"OreganoBread"`.
    const TOKEN: &'static str;

    /// Adds this policy's bread to `sandwich`.
    fn build_bread(sandwich: &mut Sandwich);
}

/// Supplies the patty step.
pub trait PattyPolicy: 'static {
    /// Identifier used in builder descriptions, e.g. `"ChickenPatty"`.
    const TOKEN: &'static str;

    /// Adds this policy's patty to `sandwich`.
    fn build_patty(sandwich: &mut Sandwich);
}

/// Supplies the sauce step.
pub trait SaucePolicy: 'static {
    /// Identifier used in builder descriptions, e.g. `"BBQSauce"`.
    const TOKEN: &'static str;

    /// Adds this policy's sauce to `sandwich`.
    fn build_sauce(sandwich: &mut Sandwich);
}
