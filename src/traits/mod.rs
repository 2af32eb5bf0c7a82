//! Core trait abstractions for sandwich construction.
//!
//! This module defines the seams every builder is assembled from:
//! [`SandwichBuilder`] for the create/retrieve lifecycle,
//! [`SandwichRecipe`] for dynamically dispatched steps, the three policy
//! traits for statically composed steps, and [`FromConfig`] for
//! configuration-driven construction.

mod from_config;
mod policy;
mod recipe;
mod sandwich_builder;

pub use from_config::FromConfig;
pub use policy::{BreadPolicy, PattyPolicy, SaucePolicy};
pub use recipe::SandwichRecipe;
pub use sandwich_builder::SandwichBuilder;
