//! Builder registration and lookup by name (factory + singleton).
//!
//! The [`BuilderRegistry`] maps each builder's self-reported description
//! to a non-owning handle to that builder.  One registry per process is
//! available through [`BuilderRegistry::global`]; independent registries
//! can be created with [`BuilderRegistry::new`] and passed around.
//!
//! # Usage
//!
//! ```rust
//! use sandwich_builder::builders::{GarlicBreadCornTeriyaki, VirtualSandwichBuilder};
//! use sandwich_builder::registry::{share, BuilderRegistry};
//!
//! let registry = BuilderRegistry::new();
//! let builder = share(VirtualSandwichBuilder::new(GarlicBreadCornTeriyaki));
//! registry.register(&builder);
//!
//! let sandwich = registry
//!     .build("Virtual::GarlicBread::CornPatty::TeriyakiSauce")
//!     .expect("registered");
//! assert_eq!(sandwich.describe(), "Garlic Bread with Corn and Teriyaki");
//! ```

mod builder_registry;
mod shared;

pub use builder_registry::BuilderRegistry;
pub use shared::{lock, share, SharedBuilder};
