//! Default builder factory implementation.

use tracing::debug;

use crate::config::BuilderConfig;
use crate::error::BuilderError;
use crate::registry::{share, BuilderRegistry, SharedBuilder};
use crate::traits::SandwichBuilder;

#[cfg(feature = "virtual-builder")]
use crate::builders::VirtualSandwichBuilder;
#[cfg(feature = "virtual-builder")]
use crate::traits::FromConfig;

/// Stateless factory for creating builders from configuration.
///
/// `DefaultBuilderFactory` is the single entry point for constructing a
/// builder from a [`BuilderConfig`].  It validates the configuration,
/// delegates to the matching constructor, and boxes the result.
///
/// # Example
///
/// ```rust
/// use sandwich_builder::config::BuilderConfig;
/// use sandwich_builder::factory::DefaultBuilderFactory;
/// use sandwich_builder::traits::SandwichBuilder;
///
/// let config: BuilderConfig = "Virtual::GarlicBread::CornPatty::TeriyakiSauce"
///     .parse()
///     .expect("valid description");
/// let mut builder = DefaultBuilderFactory::create(&config).expect("builder created");
///
/// let sandwich = builder.build().expect("just built");
/// assert_eq!(sandwich.describe(), "Garlic Bread with Corn and Teriyaki");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultBuilderFactory;

impl DefaultBuilderFactory {
    /// Creates a new builder from the given configuration.
    ///
    /// # Flow
    ///
    /// 1. Validate the configuration via [`BuilderConfig::validate`].
    /// 2. Match on the config variant.
    /// 3. Delegate to the builder's constructor.
    /// 4. Box the builder.  Policy builders stay monomorphized inside the
    ///    box; only the outer call is dynamic.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::InvalidConfiguration`] if the configuration is
    ///   invalid or the requested strategy's feature is not enabled.
    pub fn create(config: &BuilderConfig) -> Result<Box<dyn SandwichBuilder>, BuilderError> {
        config.validate()?;

        let builder: Box<dyn SandwichBuilder> = match config {
            #[cfg(feature = "virtual-builder")]
            BuilderConfig::Virtual(cfg) => Box::new(VirtualSandwichBuilder::from_config(cfg)?),

            #[cfg(feature = "virtual-builder")]
            BuilderConfig::Custom(cfg) => Box::new(VirtualSandwichBuilder::from_config(cfg)?),

            #[cfg(feature = "policy-builder")]
            BuilderConfig::Policy(cfg) => crate::builders::policy_builder_for(cfg),

            // Catch-all for config variants whose builder feature is disabled.
            #[allow(unreachable_patterns)]
            _ => {
                return Err(BuilderError::InvalidConfiguration(
                    "requested builder strategy is not enabled (missing feature flag)",
                ))
            }
        };

        debug!(description = builder.description(), "builder created");
        Ok(builder)
    }

    /// Creates a builder and wraps it in a [`SharedBuilder`] ready for
    /// registration.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_shared(config: &BuilderConfig) -> Result<SharedBuilder, BuilderError> {
        Ok(share(Self::create(config)?))
    }

    /// Creates a shared builder and registers it in `registry`.
    ///
    /// Returns the builder together with the registration flag (`true` if
    /// an existing entry was replaced).  The registry holds only a weak
    /// reference: keep the returned handle alive for as long as the
    /// builder should stay reachable by name.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_registered(
        config: &BuilderConfig,
        registry: &BuilderRegistry,
    ) -> Result<(SharedBuilder, bool), BuilderError> {
        let builder = Self::create_shared(config)?;
        let replaced = registry.register(&builder);
        Ok((builder, replaced))
    }
}
