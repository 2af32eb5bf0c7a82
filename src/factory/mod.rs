//! Builder instantiation via the factory pattern.
//!
//! The [`DefaultBuilderFactory`] creates builders from [`BuilderConfig`]
//! values, validating configuration and dispatching to the appropriate
//! constructor based on the config variant.  Combined with the
//! [`BuilderRegistry`](crate::registry::BuilderRegistry) it turns a
//! runtime name into a ready builder.
//!
//! # Usage
//!
//! ```rust
//! use sandwich_builder::config::BuilderConfig;
//! use sandwich_builder::factory::DefaultBuilderFactory;
//! use sandwich_builder::registry::BuilderRegistry;
//!
//! let registry = BuilderRegistry::new();
//! let config: BuilderConfig = "Policy::MultigrainBread::HamPatty::SweetOnionSauce"
//!     .parse()
//!     .expect("valid description");
//!
//! let (_builder, replaced) =
//!     DefaultBuilderFactory::create_registered(&config, &registry).expect("created");
//! assert!(!replaced);
//!
//! let sandwich = registry.build(&config.to_string()).expect("registered");
//! assert_eq!(sandwich.describe(), "Multigrain with Ham and Sweet Onion");
//! ```
//!
//! # Feature Gating
//!
//! Each match arm is gated behind its strategy's feature flag.  If a
//! config variant is passed for a strategy whose feature is not enabled,
//! an [`BuilderError::InvalidConfiguration`] is returned.
//!
//! [`BuilderConfig`]: crate::config::BuilderConfig
//! [`BuilderError::InvalidConfiguration`]: crate::error::BuilderError::InvalidConfiguration

mod default_factory;

pub use default_factory::DefaultBuilderFactory;
