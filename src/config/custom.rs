//! Configuration for free-form recipes outside the ingredient catalogue.

use super::Strategy;
use crate::error::BuilderError;

/// A recipe with arbitrary ingredient literals and a caller-chosen name.
///
/// Custom recipes always run through the dynamically dispatched builder,
/// since their ingredients are only known at runtime.
///
/// # Validation
///
/// - The description must not be blank; it becomes the registry key.
/// - The description must not start with a strategy prefix (`Virtual::`,
///   `Policy::`).  Those names belong to catalogue builders and parse
///   back into catalogue configs.
///
/// Ingredient literals are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomRecipe {
    description: String,
    bread: String,
    patty: String,
    sauce: String,
}

impl CustomRecipe {
    /// Creates a new `CustomRecipe`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidConfiguration`] if the description is
    /// blank or uses a reserved strategy prefix.
    pub fn new(
        description: impl Into<String>,
        bread: impl Into<String>,
        patty: impl Into<String>,
        sauce: impl Into<String>,
    ) -> Result<Self, BuilderError> {
        let recipe = Self {
            description: description.into(),
            bread: bread.into(),
            patty: patty.into(),
            sauce: sauce.into(),
        };
        recipe.validate()?;
        Ok(recipe)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidConfiguration`] if the description is
    /// blank or uses a reserved strategy prefix.
    pub fn validate(&self) -> Result<(), BuilderError> {
        if self.description.trim().is_empty() {
            return Err(BuilderError::InvalidConfiguration(
                "custom recipe description must not be blank",
            ));
        }
        let reserved = Strategy::ALL.iter().any(|strategy| {
            self.description
                .strip_prefix(strategy.prefix())
                .is_some_and(|rest| rest.starts_with(super::SEPARATOR))
        });
        if reserved {
            return Err(BuilderError::InvalidConfiguration(
                "custom recipe description uses a reserved strategy prefix",
            ));
        }
        Ok(())
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the bread literal.
    #[must_use]
    pub fn bread(&self) -> &str {
        &self.bread
    }

    /// Returns the patty literal.
    #[must_use]
    pub fn patty(&self) -> &str {
        &self.patty
    }

    /// Returns the sauce literal.
    #[must_use]
    pub fn sauce(&self) -> &str {
        &self.sauce
    }
}
