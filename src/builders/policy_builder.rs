//! Statically composed builder.
//!
//! [`PolicySandwichBuilder`] is generic over one policy per ingredient.
//! Each step is a direct call to an associated function, resolved at
//! compile time; there is no recipe object and no vtable between the
//! orchestration and the steps.
//!
//! Composition scales poorly as the number of slots grows (one type
//! parameter per slot), which is why the dynamic builder exists
//! alongside it.

use core::marker::PhantomData;

use tracing::trace;

use super::policies::{
    BbqSaucePolicy, ChickenPattyPolicy, CornPattyPolicy, GarlicBreadPolicy, HamPattyPolicy,
    MultigrainBreadPolicy, OreganoBreadPolicy, SweetOnionSaucePolicy, TeriyakiSaucePolicy,
};
use crate::config::{compose_description, RecipeConfig, Strategy};
use crate::domain::{Bread, Patty, Sandwich, Sauce};
use crate::error::BuilderError;
use crate::traits::{BreadPolicy, PattyPolicy, SandwichBuilder, SaucePolicy};

/// Builder whose steps are fixed by three policy type parameters.
///
/// The description is derived from the policy tokens:
/// `Policy::<bread>::<patty>::<sauce>`.
///
/// # Examples
///
/// ```
/// use sandwich_builder::builders::{
///     BbqSaucePolicy, ChickenPattyPolicy, OreganoBreadPolicy, PolicySandwichBuilder,
/// };
/// use sandwich_builder::traits::SandwichBuilder;
///
/// type OreganoChickenBbq =
///     PolicySandwichBuilder<OreganoBreadPolicy, ChickenPattyPolicy, BbqSaucePolicy>;
///
/// let mut builder = OreganoChickenBbq::new();
/// assert_eq!(builder.description(), "Policy::OreganoBread::ChickenPatty::BBQSauce");
///
/// let sandwich = builder.build().expect("just built");
/// assert_eq!(sandwich.describe(), "Oregano Bread with Chicken and BBQ");
/// ```
pub struct PolicySandwichBuilder<B, P, S> {
    description: String,
    sandwich: Option<Sandwich>,
    _policies: PhantomData<fn() -> (B, P, S)>,
}

impl<B, P, S> PolicySandwichBuilder<B, P, S>
where
    B: BreadPolicy,
    P: PattyPolicy,
    S: SaucePolicy,
{
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            description: compose_description(
                Strategy::Policy.prefix(),
                B::TOKEN,
                P::TOKEN,
                S::TOKEN,
            ),
            sandwich: None,
            _policies: PhantomData,
        }
    }
}

impl<B, P, S> Default for PolicySandwichBuilder<B, P, S>
where
    B: BreadPolicy,
    P: PattyPolicy,
    S: SaucePolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<B, P, S> core::fmt::Debug for PolicySandwichBuilder<B, P, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PolicySandwichBuilder")
            .field("description", &self.description)
            .field("sandwich", &self.sandwich)
            .finish()
    }
}

impl<B, P, S> SandwichBuilder for PolicySandwichBuilder<B, P, S>
where
    B: BreadPolicy,
    P: PattyPolicy,
    S: SaucePolicy,
{
    fn create_sandwich(&mut self) {
        let mut sandwich = Sandwich::new();
        B::build_bread(&mut sandwich);
        P::build_patty(&mut sandwich);
        S::build_sauce(&mut sandwich);
        trace!(
            description = %self.description,
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
        &self.description
    }
}

/// Returns the policy builder matching a runtime ingredient triple.
///
/// Every catalogue triple maps to its own monomorphized
/// `PolicySandwichBuilder`; the selection happens once, here, and the
/// returned builder's steps are still statically dispatched.
#[must_use]
pub fn policy_builder_for(config: &RecipeConfig) -> Box<dyn SandwichBuilder> {
    with_bread(config.bread(), config.patty(), config.sauce())
}

fn with_bread(bread: Bread, patty: Patty, sauce: Sauce) -> Box<dyn SandwichBuilder> {
    match bread {
        Bread::Oregano => with_patty::<OreganoBreadPolicy>(patty, sauce),
        Bread::Multigrain => with_patty::<MultigrainBreadPolicy>(patty, sauce),
        Bread::Garlic => with_patty::<GarlicBreadPolicy>(patty, sauce),
    }
}

fn with_patty<B: BreadPolicy>(patty: Patty, sauce: Sauce) -> Box<dyn SandwichBuilder> {
    match patty {
        Patty::Chicken => with_sauce::<B, ChickenPattyPolicy>(sauce),
        Patty::Ham => with_sauce::<B, HamPattyPolicy>(sauce),
        Patty::Corn => with_sauce::<B, CornPattyPolicy>(sauce),
    }
}

fn with_sauce<B: BreadPolicy, P: PattyPolicy>(sauce: Sauce) -> Box<dyn SandwichBuilder> {
    match sauce {
        Sauce::Teriyaki => Box::new(PolicySandwichBuilder::<B, P, TeriyakiSaucePolicy>::new()),
        Sauce::Bbq => Box::new(PolicySandwichBuilder::<B, P, BbqSaucePolicy>::new()),
        Sauce::SweetOnion => Box::new(PolicySandwichBuilder::<B, P, SweetOnionSaucePolicy>::new()),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    type OreganoChickenBbq =
        PolicySandwichBuilder<OreganoBreadPolicy, ChickenPattyPolicy, BbqSaucePolicy>;
    type GarlicCornTeriyaki =
        PolicySandwichBuilder<GarlicBreadPolicy, CornPattyPolicy, TeriyakiSaucePolicy>;

    #[test]
    fn description_from_tokens() {
        assert_eq!(
            OreganoChickenBbq::new().description(),
            "Policy::OreganoBread::ChickenPatty::BBQSauce"
        );
        assert_eq!(
            PolicySandwichBuilder::<MultigrainBreadPolicy, HamPattyPolicy, SweetOnionSaucePolicy>::default()
                .description(),
            "Policy::MultigrainBread::HamPatty::SweetOnionSauce"
        );
    }

    #[test]
    fn create_then_get() {
        let mut builder = GarlicCornTeriyaki::new();
        builder.create_sandwich();
        let Ok(s) = builder.get_sandwich() else {
            panic!("expected sandwich");
        };
        assert_eq!(s.describe(), "Garlic Bread with Corn and Teriyaki");
    }

    #[test]
    fn fresh_builder_is_empty() {
        let mut builder = OreganoChickenBbq::new();
        assert!(!builder.has_sandwich());
        assert_eq!(builder.get_sandwich(), Err(BuilderError::EmptyRetrieval));
    }

    #[test]
    fn retrieval_releases_sandwich() {
        let mut builder = OreganoChickenBbq::new();
        builder.create_sandwich();
        assert!(builder.get_sandwich().is_ok());
        assert_eq!(builder.get_sandwich(), Err(BuilderError::EmptyRetrieval));
    }

    #[test]
    fn repeated_cycles_are_independent() {
        let mut builder = OreganoChickenBbq::new();
        let Ok(mut first) = builder.build() else {
            panic!("first build");
        };
        first.add_patty("Ham");
        let Ok(second) = builder.build() else {
            panic!("second build");
        };
        assert_eq!(second.patty(), "Chicken");
        assert_ne!(first, second);
    }

    #[test]
    fn selector_matches_config_for_every_triple() {
        for cfg in RecipeConfig::all() {
            let mut builder = policy_builder_for(&cfg);
            assert_eq!(builder.description(), cfg.description(Strategy::Policy));
            let Ok(s) = builder.build() else {
                panic!("expected sandwich for {}", cfg.description(Strategy::Policy));
            };
            assert_eq!(s.bread(), cfg.bread().name());
            assert_eq!(s.patty(), cfg.patty().name());
            assert_eq!(s.sauce(), cfg.sauce().name());
        }
    }

    #[test]
    fn distinct_instances_share_description() {
        let a = OreganoChickenBbq::new();
        let b = OreganoChickenBbq::new();
        assert_eq!(a.description(), b.description());
    }

    #[test]
    fn debug_shows_description() {
        let dbg = format!("{:?}", OreganoChickenBbq::new());
        assert!(dbg.contains("Policy::OreganoBread::ChickenPatty::BBQSauce"));
    }
}
