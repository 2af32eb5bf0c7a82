//! Feature-gated builder implementations.
//!
//! # Builders
//!
//! | Feature | Builder | Steps supplied by |
//! |---------|---------|-------------------|
//! | `virtual-builder` | [`VirtualSandwichBuilder`] | a boxed [`SandwichRecipe`](crate::traits::SandwichRecipe) |
//! | `policy-builder` | [`PolicySandwichBuilder`] | three compile-time policies |
//!
//! Both builders run the same orchestration (bread, patty, sauce) and
//! produce equal sandwiches for equal ingredients.

#[cfg(feature = "policy-builder")]
mod policies;
#[cfg(feature = "policy-builder")]
mod policy_builder;
#[cfg(feature = "virtual-builder")]
mod recipes;
#[cfg(feature = "virtual-builder")]
mod virtual_builder;

#[cfg(all(test, feature = "virtual-builder", feature = "policy-builder"))]
mod proptest_properties;

#[cfg(feature = "policy-builder")]
pub use policies::{
    BbqSaucePolicy, ChickenPattyPolicy, CornPattyPolicy, GarlicBreadPolicy, HamPattyPolicy,
    MultigrainBreadPolicy, OreganoBreadPolicy, SweetOnionSaucePolicy, TeriyakiSaucePolicy,
};
#[cfg(feature = "policy-builder")]
pub use policy_builder::{policy_builder_for, PolicySandwichBuilder};
#[cfg(feature = "virtual-builder")]
pub use recipes::{GarlicBreadCornTeriyaki, IngredientRecipe, MultigrainChickenBbq, OreganoHamSweetOnion};
#[cfg(feature = "virtual-builder")]
pub use virtual_builder::VirtualSandwichBuilder;
