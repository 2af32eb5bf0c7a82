//! Concrete recipes for [`VirtualSandwichBuilder`](super::VirtualSandwichBuilder).
//!
//! Three fixed recipes write their literals directly.
//! [`IngredientRecipe`] covers any catalogue combination, and
//! [`CustomRecipe`] turns free-form strings into a recipe.

use crate::config::{CustomRecipe, RecipeConfig, Strategy};
use crate::domain::Sandwich;
use crate::traits::SandwichRecipe;

/// Multigrain bread, chicken patty, BBQ sauce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MultigrainChickenBbq;

impl SandwichRecipe for MultigrainChickenBbq {
    fn description(&self) -> &str {
        "Virtual::MultigrainBread::ChickenPatty::BBQSauce"
    }

    fn build_bread(&self, sandwich: &mut Sandwich) {
        sandwich.add_bread("Multigrain");
    }

    fn build_patty(&self, sandwich: &mut Sandwich) {
        sandwich.add_patty("Chicken");
    }

    fn build_sauce(&self, sandwich: &mut Sandwich) {
        sandwich.add_sauce("BBQ");
    }
}

/// Oregano bread, ham patty, sweet onion sauce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OreganoHamSweetOnion;

impl SandwichRecipe for OreganoHamSweetOnion {
    fn description(&self) -> &str {
        "Virtual::OreganoBread::HamPatty::SweetOnionSauce"
    }

    fn build_bread(&self, sandwich: &mut Sandwich) {
        sandwich.add_bread("Oregano Bread");
    }

    fn build_patty(&self, sandwich: &mut Sandwich) {
        sandwich.add_patty("Ham");
    }

    fn build_sauce(&self, sandwich: &mut Sandwich) {
        sandwich.add_sauce("Sweet Onion");
    }
}

/// Garlic bread, corn patty, teriyaki sauce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GarlicBreadCornTeriyaki;

impl SandwichRecipe for GarlicBreadCornTeriyaki {
    fn description(&self) -> &str {
        "Virtual::GarlicBread::CornPatty::TeriyakiSauce"
    }

    fn build_bread(&self, sandwich: &mut Sandwich) {
        sandwich.add_bread("Garlic Bread");
    }

    fn build_patty(&self, sandwich: &mut Sandwich) {
        sandwich.add_patty("Corn");
    }

    fn build_sauce(&self, sandwich: &mut Sandwich) {
        sandwich.add_sauce("Teriyaki");
    }
}

/// Recipe for any catalogue ingredient triple, chosen at runtime.
///
/// Its description uses the `Virtual` prefix, so it never collides with
/// the policy builder for the same triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IngredientRecipe {
    config: RecipeConfig,
    description: String,
}

impl IngredientRecipe {
    /// Creates a recipe for `config`.
    #[must_use]
    pub fn new(config: RecipeConfig) -> Self {
        Self {
            description: config.description(Strategy::Virtual),
            config,
        }
    }

    /// Returns the ingredient triple.
    #[must_use]
    pub const fn config(&self) -> &RecipeConfig {
        &self.config
    }
}

impl SandwichRecipe for IngredientRecipe {
    fn description(&self) -> &str {
        &self.description
    }

    fn build_bread(&self, sandwich: &mut Sandwich) {
        sandwich.add_bread(self.config.bread().name());
    }

    fn build_patty(&self, sandwich: &mut Sandwich) {
        sandwich.add_patty(self.config.patty().name());
    }

    fn build_sauce(&self, sandwich: &mut Sandwich) {
        sandwich.add_sauce(self.config.sauce().name());
    }
}

impl SandwichRecipe for CustomRecipe {
    fn description(&self) -> &str {
        CustomRecipe::description(self)
    }

    fn build_bread(&self, sandwich: &mut Sandwich) {
        sandwich.add_bread(self.bread());
    }

    fn build_patty(&self, sandwich: &mut Sandwich) {
        sandwich.add_patty(self.patty());
    }

    fn build_sauce(&self, sandwich: &mut Sandwich) {
        sandwich.add_sauce(self.sauce());
    }
}
