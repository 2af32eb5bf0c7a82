//! Builder configuration enums and structs.
//!
//! This module contains the [`BuilderConfig`] enum, the top-level
//! declarative blueprint for creating any builder, along with the
//! per-recipe configuration structs it wraps.

mod builder_config;
mod custom;
mod recipe;
mod strategy;

pub use builder_config::BuilderConfig;
pub use custom::CustomRecipe;
pub use recipe::RecipeConfig;
pub use strategy::Strategy;

pub(crate) use strategy::{compose_description, SEPARATOR};
