//! Configuration for catalogue recipes: one bread, one patty, one sauce.

use super::Strategy;
use crate::domain::{Bread, Patty, Sauce};

/// An ingredient triple drawn from the catalogue.
///
/// The same `RecipeConfig` can drive either construction strategy; the
/// two resulting builders produce equal sandwiches and differ only in
/// their description prefix.
///
/// Every combination of catalogue ingredients is valid, so construction
/// is infallible.
///
/// # Examples
///
/// ```
/// use sandwich_builder::config::{RecipeConfig, Strategy};
/// use sandwich_builder::domain::{Bread, Patty, Sauce};
///
/// let recipe = RecipeConfig::new(Bread::Oregano, Patty::Chicken, Sauce::Bbq);
/// assert_eq!(
///     recipe.description(Strategy::Policy),
///     "Policy::OreganoBread::ChickenPatty::BBQSauce"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecipeConfig {
    bread: Bread,
    patty: Patty,
    sauce: Sauce,
}

impl RecipeConfig {
    /// Creates a new `RecipeConfig`.
    #[must_use]
    pub const fn new(bread: Bread, patty: Patty, sauce: Sauce) -> Self {
        Self {
            bread,
            patty,
            sauce,
        }
    }

    /// Returns the bread.
    #[must_use]
    pub const fn bread(&self) -> Bread {
        self.bread
    }

    /// Returns the patty.
    #[must_use]
    pub const fn patty(&self) -> Patty {
        self.patty
    }

    /// Returns the sauce.
    #[must_use]
    pub const fn sauce(&self) -> Sauce {
        self.sauce
    }

    /// Returns the builder description for this recipe under `strategy`:
    /// `<strategy>::<bread>::<patty>::<sauce>`.
    #[must_use]
    pub fn description(&self, strategy: Strategy) -> String {
        super::compose_description(
            strategy.prefix(),
            self.bread.token(),
            self.patty.token(),
            self.sauce.token(),
        )
    }

    /// Every recipe the catalogue can express, bread-major.
    pub fn all() -> impl Iterator<Item = Self> {
        Bread::ALL.iter().flat_map(|&bread| {
            Patty::ALL.iter().flat_map(move |&patty| {
                Sauce::ALL
                    .iter()
                    .map(move |&sauce| Self::new(bread, patty, sauce))
            })
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let r = RecipeConfig::new(Bread::Garlic, Patty::Corn, Sauce::Teriyaki);
        assert_eq!(r.bread(), Bread::Garlic);
        assert_eq!(r.patty(), Patty::Corn);
        assert_eq!(r.sauce(), Sauce::Teriyaki);
    }

    #[test]
    fn virtual_description() {
        let r = RecipeConfig::new(Bread::Garlic, Patty::Corn, Sauce::Teriyaki);
        assert_eq!(
            r.description(Strategy::Virtual),
            "Virtual::GarlicBread::CornPatty::TeriyakiSauce"
        );
    }

    #[test]
    fn policy_description() {
        let r = RecipeConfig::new(Bread::Multigrain, Patty::Ham, Sauce::SweetOnion);
        assert_eq!(
            r.description(Strategy::Policy),
            "Policy::MultigrainBread::HamPatty::SweetOnionSauce"
        );
    }

    #[test]
    fn all_covers_every_combination_once() {
        let all: Vec<_> = RecipeConfig::all().collect();
        assert_eq!(all.len(), 27);
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 27);
    }

    #[test]
    fn all_is_bread_major() {
        let Some(first) = RecipeConfig::all().next() else {
            panic!("catalogue is non-empty");
        };
        assert_eq!(
            first,
            RecipeConfig::new(Bread::Oregano, Patty::Chicken, Sauce::Teriyaki)
        );
    }
}
