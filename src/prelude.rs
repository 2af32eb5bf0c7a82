//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use sandwich_builder::prelude::*;
//! ```

#[cfg(feature = "policy-builder")]
pub use crate::builders::{policy_builder_for, PolicySandwichBuilder};
#[cfg(feature = "virtual-builder")]
pub use crate::builders::VirtualSandwichBuilder;
pub use crate::config::{BuilderConfig, CustomRecipe, RecipeConfig, Strategy};
pub use crate::domain::{Bread, Patty, Sandwich, Sauce};
pub use crate::error::{BuilderError, Result};
pub use crate::factory::DefaultBuilderFactory;
pub use crate::registry::{lock, share, BuilderRegistry, SharedBuilder};
pub use crate::traits::{
    BreadPolicy, FromConfig, PattyPolicy, SandwichBuilder, SandwichRecipe, SaucePolicy,
};
