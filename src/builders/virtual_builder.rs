//! Dynamically dispatched builder.
//!
//! [`VirtualSandwichBuilder`] owns the algorithm skeleton and delegates
//! each step to a boxed [`SandwichRecipe`].  Recipes supply the steps but
//! cannot reorder them or skip the finalization: `create_sandwich` is
//! implemented here, once, for every recipe.

use tracing::trace;

use super::recipes::IngredientRecipe;
use crate::config::{CustomRecipe, RecipeConfig};
use crate::domain::Sandwich;
use crate::error::BuilderError;
use crate::traits::{FromConfig, SandwichBuilder, SandwichRecipe};

/// Builder whose steps are resolved at runtime through a recipe object.
///
/// # Examples
///
/// ```
/// use sandwich_builder::builders::{GarlicBreadCornTeriyaki, VirtualSandwichBuilder};
/// use sandwich_builder::traits::SandwichBuilder;
///
/// let mut builder = VirtualSandwichBuilder::new(GarlicBreadCornTeriyaki);
/// builder.create_sandwich();
/// let sandwich = builder.get_sandwich().expect("just built");
/// assert_eq!(sandwich.describe(), "Garlic Bread with Corn and Teriyaki");
///
/// // The builder released the sandwich; a second retrieval fails.
/// assert!(builder.get_sandwich().is_err());
/// ```
#[derive(Debug)]
pub struct VirtualSandwichBuilder {
    recipe: Box<dyn SandwichRecipe>,
    sandwich: Option<Sandwich>,
}

impl VirtualSandwichBuilder {
    /// Creates a builder driven by `recipe`.
    #[must_use]
    pub fn new(recipe: impl SandwichRecipe + 'static) -> Self {
        Self::from_boxed(Box::new(recipe))
    }

    /// Creates a builder from an already boxed recipe.
    #[must_use]
    pub fn from_boxed(recipe: Box<dyn SandwichRecipe>) -> Self {
        Self {
            recipe,
            sandwich: None,
        }
    }

    /// Returns the recipe driving this builder.
    #[must_use]
    pub fn recipe(&self) -> &dyn SandwichRecipe {
        self.recipe.as_ref()
    }
}

impl SandwichBuilder for VirtualSandwichBuilder {
    fn create_sandwich(&mut self) {
        let mut sandwich = Sandwich::new();
        self.recipe.build_bread(&mut sandwich);
        self.recipe.build_patty(&mut sandwich);
        self.recipe.build_sauce(&mut sandwich);
        trace!(
            description = self.recipe.description(),
            sandwich = %sandwich,
            "sandwich assembled"
        );
        self.sandwich = Some(sandwich);
    }

    fn get_sandwich(&mut self) -> Result<Sandwich, BuilderError> {
        self.sandwich.take().ok_or(BuilderError::EmptyRetrieval)
    }

    fn has_sandwich(&self) -> bool {
        self.sandwich.is_some()
    }

    fn description(&self) -> &str {
        self.recipe.description()
    }
}

impl FromConfig<RecipeConfig> for VirtualSandwichBuilder {
    fn from_config(config: &RecipeConfig) -> Result<Self, BuilderError> {
        Ok(Self::new(IngredientRecipe::new(*config)))
    }
}

impl FromConfig<CustomRecipe> for VirtualSandwichBuilder {
    fn from_config(config: &CustomRecipe) -> Result<Self, BuilderError> {
        config.validate()?;
        Ok(Self::new(config.clone()))
    }
}
