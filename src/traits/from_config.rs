//! Generic construction trait for builder instantiation from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating builders from
//! their configuration structs.  The factory uses it to dispatch
//! construction per [`BuilderConfig`](crate::config::BuilderConfig)
//! variant:
//!
//! ```text
//! BuilderConfig::Virtual(cfg) => VirtualSandwichBuilder::from_config(&cfg)
//! BuilderConfig::Custom(cfg)  => VirtualSandwichBuilder::from_config(&cfg)
//! BuilderConfig::Policy(cfg)  => policy_builder_for(&cfg)
//! ```
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration before building.
//! A successfully constructed builder is always ready for
//! `create_sandwich`.

use crate::error::BuilderError;

/// Builds `Self` from a configuration of type `C`.
///
/// There is no blanket implementation; every builder/config pairing is
/// written out explicitly.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidConfiguration`] if the configuration is
/// invalid.
pub trait FromConfig<C> {
    /// Creates a new builder from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::InvalidConfiguration`] if any parameter violates
    ///   the configuration's invariants.
    fn from_config(config: &C) -> Result<Self, BuilderError>
    where
        Self: Sized;
}
