//! # Sandwich Builder
//!
//! Object construction patterns over a small sandwich domain: build a
//! product step by step, choose between two interchangeable construction
//! strategies, and retrieve builders by name from a process-wide
//! registry.
//!
//! - **Dynamic builder**: steps supplied by a recipe trait object; the
//!   builder owns the fixed bread → patty → sauce orchestration.
//!   `virtual-builder` feature.
//! - **Policy builder**: the same orchestration composed from three
//!   compile-time policies, with no dynamic dispatch between steps.
//!   `policy-builder` feature.
//! - **Registry**: a name-keyed factory/singleton holding non-owning
//!   handles to builders.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `virtual-builder` | yes | Recipe-driven builder and catalogue recipes |
//! | `policy-builder` | yes | Policy-composed builder and catalogue policies |
//! | `all-builders` | yes | Enables both strategies |
//!
//! ## Build the same sandwich two ways
//!
//! ```rust
//! use sandwich_builder::builders::{
//!     CornPattyPolicy, GarlicBreadCornTeriyaki, GarlicBreadPolicy, PolicySandwichBuilder,
//!     TeriyakiSaucePolicy, VirtualSandwichBuilder,
//! };
//! use sandwich_builder::traits::SandwichBuilder;
//!
//! let mut dynamic = VirtualSandwichBuilder::new(GarlicBreadCornTeriyaki);
//! let mut policy =
//!     PolicySandwichBuilder::<GarlicBreadPolicy, CornPattyPolicy, TeriyakiSaucePolicy>::new();
//!
//! dynamic.create_sandwich();
//! policy.create_sandwich();
//!
//! let a = dynamic.get_sandwich().expect("built");
//! let b = policy.get_sandwich().expect("built");
//! assert_eq!(a, b);
//! assert_eq!(a.describe(), "Garlic Bread with Corn and Teriyaki");
//! ```
//!
//! ## Register and look up builders by name
//!
//! ```rust
//! use sandwich_builder::builders::{
//!     BbqSaucePolicy, ChickenPattyPolicy, OreganoBreadPolicy, PolicySandwichBuilder,
//! };
//! use sandwich_builder::registry::{share, BuilderRegistry};
//!
//! type OreganoChickenBbq =
//!     PolicySandwichBuilder<OreganoBreadPolicy, ChickenPattyPolicy, BbqSaucePolicy>;
//!
//! let registry = BuilderRegistry::new();
//! let builder = share(OreganoChickenBbq::new());
//! assert!(!registry.register(&builder));
//!
//! assert!(registry.lookup("Policy::OreganoBread::ChickenPatty::BBQSauce").is_some());
//! assert!(registry.lookup("garbage").is_none());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  BuilderConfig / description string
//! └──────┬───────┘
//!        │ create(&config)
//!        ▼
//! ┌──────────────┐
//! │   Factory     │  validates config, dispatches per strategy
//! └──────┬───────┘
//!        │ Box<dyn SandwichBuilder> / SharedBuilder
//!        ▼
//! ┌──────────────┐      register / lookup
//! │   Builders    │ ◄──────────────────────┐
//! └──────┬───────┘                         │
//!        │ create_sandwich / get_sandwich  ┌┴─────────┐
//!        ▼                                 │ Registry  │
//! ┌──────────────┐                         └──────────┘
//! │   Sandwich    │
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | [`Sandwich`](domain::Sandwich) and the ingredient catalogue |
//! | [`traits`] | [`SandwichBuilder`](traits::SandwichBuilder), [`SandwichRecipe`](traits::SandwichRecipe), policy traits, [`FromConfig`](traits::FromConfig) |
//! | [`builders`] | Feature-gated builders, recipes and policies |
//! | [`config`] | Declarative builder blueprints: [`BuilderConfig`](config::BuilderConfig) |
//! | [`factory`] | [`DefaultBuilderFactory`](factory::DefaultBuilderFactory) |
//! | [`registry`] | [`BuilderRegistry`](registry::BuilderRegistry) and shared builder handles |
//! | [`error`] | [`BuilderError`](error::BuilderError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod builders;
pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod prelude;
pub mod registry;
pub mod traits;
