//! Top-level builder configuration enum.
//!
//! [`BuilderConfig`] is the declarative blueprint for creating any
//! builder.  The factory matches on it to dispatch construction:
//!
//! ```text
//! match config {
//!     BuilderConfig::Virtual(cfg) => VirtualSandwichBuilder::from_config(cfg),
//!     BuilderConfig::Policy(cfg)  => policy_builder_for(cfg),
//!     BuilderConfig::Custom(cfg)  => VirtualSandwichBuilder::from_config(cfg),
//! }
//! ```
//!
//! Catalogue configs also parse from, and display as, the description of
//! the builder they produce, so a registry key can be turned back into a
//! blueprint.

use super::strategy::SEPARATOR;
use super::{CustomRecipe, RecipeConfig, Strategy};
use crate::error::BuilderError;

/// Configuration for any builder the factory can create.
///
/// # Examples
///
/// ```
/// use sandwich_builder::config::BuilderConfig;
///
/// let config: BuilderConfig = "Policy::OreganoBread::ChickenPatty::BBQSauce"
///     .parse()
///     .expect("valid description");
/// assert!(config.is_policy());
/// assert_eq!(config.to_string(), "Policy::OreganoBread::ChickenPatty::BBQSauce");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuilderConfig {
    /// Catalogue recipe built through dynamic dispatch.
    Virtual(RecipeConfig),
    /// Catalogue recipe built from compile-time policies.
    Policy(RecipeConfig),
    /// Free-form recipe built through dynamic dispatch.
    Custom(CustomRecipe),
}

impl BuilderConfig {
    /// Validates the inner configuration.
    ///
    /// Catalogue recipes are valid by construction; only
    /// [`Custom`](Self::Custom) has invariants to check.
    ///
    /// # Errors
    ///
    /// Returns the same [`BuilderError`] that
    /// [`CustomRecipe::validate`] would return.
    pub fn validate(&self) -> Result<(), BuilderError> {
        match self {
            Self::Virtual(_) | Self::Policy(_) => Ok(()),
            Self::Custom(cfg) => cfg.validate(),
        }
    }

    /// Returns the description the configured builder will report.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Virtual(cfg) => cfg.description(Strategy::Virtual),
            Self::Policy(cfg) => cfg.description(Strategy::Policy),
            Self::Custom(cfg) => cfg.description().to_string(),
        }
    }

    /// Returns the catalogue recipe, if this is not a custom config.
    #[must_use]
    pub const fn recipe(&self) -> Option<&RecipeConfig> {
        match self {
            Self::Virtual(cfg) | Self::Policy(cfg) => Some(cfg),
            Self::Custom(_) => None,
        }
    }

    /// Returns `true` if this is a [`Virtual`](Self::Virtual) variant.
    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual(_))
    }

    /// Returns `true` if this is a [`Policy`](Self::Policy) variant.
    #[must_use]
    pub const fn is_policy(&self) -> bool {
        matches!(self, Self::Policy(_))
    }

    /// Returns `true` if this is a [`Custom`](Self::Custom) variant.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl core::fmt::Display for BuilderConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.description())
    }
}

impl core::str::FromStr for BuilderConfig {
    type Err = BuilderError;

    /// Parses a catalogue description such as
    /// `Virtual::GarlicBread::CornPatty::TeriyakiSauce`.
    ///
    /// Custom recipes have no textual form and cannot be parsed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(SEPARATOR);
        let (Some(strategy), Some(bread), Some(patty), Some(sauce), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(BuilderError::InvalidConfiguration(
                "expected <strategy>::<bread>::<patty>::<sauce>",
            ));
        };
        let Some(strategy) = Strategy::from_prefix(strategy) else {
            return Err(BuilderError::InvalidConfiguration(
                "unknown strategy (expected Virtual or Policy)",
            ));
        };
        let recipe = RecipeConfig::new(bread.parse()?, patty.parse()?, sauce.parse()?);
        Ok(match strategy {
            Strategy::Virtual => Self::Virtual(recipe),
            Strategy::Policy => Self::Policy(recipe),
        })
    }
}

impl From<CustomRecipe> for BuilderConfig {
    fn from(cfg: CustomRecipe) -> Self {
        Self::Custom(cfg)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Bread, Patty, Sauce};

    fn oregano_chicken_bbq() -> RecipeConfig {
        RecipeConfig::new(Bread::Oregano, Patty::Chicken, Sauce::Bbq)
    }

    fn custom() -> CustomRecipe {
        let Ok(cfg) = CustomRecipe::new("Club", "Rye", "Turkey", "Mustard") else {
            panic!("expected valid custom recipe");
        };
        cfg
    }

    #[test]
    fn descriptions_per_variant() {
        assert_eq!(
            BuilderConfig::Policy(oregano_chicken_bbq()).description(),
            "Policy::OreganoBread::ChickenPatty::BBQSauce"
        );
        assert_eq!(
            BuilderConfig::Virtual(oregano_chicken_bbq()).description(),
            "Virtual::OreganoBread::ChickenPatty::BBQSauce"
        );
        assert_eq!(BuilderConfig::Custom(custom()).description(), "Club");
    }

    #[test]
    fn validate_catalogue_variants() {
        assert_eq!(BuilderConfig::Virtual(oregano_chicken_bbq()).validate(), Ok(()));
        assert_eq!(BuilderConfig::Policy(oregano_chicken_bbq()).validate(), Ok(()));
        assert_eq!(BuilderConfig::Custom(custom()).validate(), Ok(()));
    }

    #[test]
    fn parse_policy() {
        let parsed = "Policy::OreganoBread::ChickenPatty::BBQSauce".parse::<BuilderConfig>();
        assert_eq!(parsed, Ok(BuilderConfig::Policy(oregano_chicken_bbq())));
    }

    #[test]
    fn parse_virtual() {
        let parsed = "Virtual::GarlicBread::CornPatty::TeriyakiSauce".parse::<BuilderConfig>();
        assert_eq!(
            parsed,
            Ok(BuilderConfig::Virtual(RecipeConfig::new(
                Bread::Garlic,
                Patty::Corn,
                Sauce::Teriyaki
            )))
        );
    }

    #[test]
    fn display_parses_back_for_every_catalogue_config() {
        for recipe in RecipeConfig::all() {
            for cfg in [BuilderConfig::Virtual(recipe), BuilderConfig::Policy(recipe)] {
                assert_eq!(cfg.to_string().parse::<BuilderConfig>(), Ok(cfg.clone()));
            }
        }
    }

    #[test]
    fn parse_rejects_wrong_segment_count() {
        for s in [
            "garbage",
            "Policy::OreganoBread::ChickenPatty",
            "Policy::OreganoBread::ChickenPatty::BBQSauce::Extra",
        ] {
            assert_eq!(
                s.parse::<BuilderConfig>(),
                Err(BuilderError::InvalidConfiguration(
                    "expected <strategy>::<bread>::<patty>::<sauce>"
                )),
                "{s}"
            );
        }
    }

    #[test]
    fn parse_rejects_unknown_strategy() {
        assert_eq!(
            "Static::OreganoBread::ChickenPatty::BBQSauce".parse::<BuilderConfig>(),
            Err(BuilderError::InvalidConfiguration(
                "unknown strategy (expected Virtual or Policy)"
            ))
        );
    }

    #[test]
    fn parse_rejects_unknown_ingredient() {
        assert_eq!(
            "Policy::OreganoBread::TofuPatty::BBQSauce".parse::<BuilderConfig>(),
            Err(BuilderError::UnknownIngredient("TofuPatty".to_string()))
        );
    }

    #[test]
    fn variant_predicates() {
        let v = BuilderConfig::Virtual(oregano_chicken_bbq());
        let p = BuilderConfig::Policy(oregano_chicken_bbq());
        let c = BuilderConfig::from(custom());
        assert!(v.is_virtual() && !v.is_policy() && !v.is_custom());
        assert!(p.is_policy() && !p.is_virtual() && !p.is_custom());
        assert!(c.is_custom() && !c.is_virtual() && !c.is_policy());
    }

    #[test]
    fn recipe_accessor() {
        assert_eq!(
            BuilderConfig::Policy(oregano_chicken_bbq()).recipe(),
            Some(&oregano_chicken_bbq())
        );
        assert_eq!(BuilderConfig::Custom(custom()).recipe(), None);
    }
}
