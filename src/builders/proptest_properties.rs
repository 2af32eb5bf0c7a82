//! Property-based tests using `proptest` for builder invariants.
//!
//! 1. **Strategy equivalence**: the dynamic and the policy builder for
//!    the same ingredients produce equal sandwiches.
//! 2. **Custom equivalence**: a custom recipe spelling out catalogue
//!    names matches the policy builder too.
//! 3. **Description format**: `describe()` is `"<bread> with <patty> and <sauce>"`.
//! 4. **No leakage between cycles**: every cycle on a reused builder
//!    yields the same fresh sandwich.
//! 5. **Structural equality**: sandwiches are equal iff all slots are.

use proptest::prelude::*;

use super::{policy_builder_for, VirtualSandwichBuilder};
use crate::config::{CustomRecipe, RecipeConfig};
use crate::domain::{Bread, Patty, Sandwich, Sauce};
use crate::traits::{FromConfig, SandwichBuilder};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn recipe_strategy() -> impl Strategy<Value = RecipeConfig> {
    (
        prop::sample::select(Bread::ALL),
        prop::sample::select(Patty::ALL),
        prop::sample::select(Sauce::ALL),
    )
        .prop_map(|(bread, patty, sauce)| RecipeConfig::new(bread, patty, sauce))
}

/// Ingredient literals, including empty and non-ASCII ones.
fn literal_strategy() -> impl Strategy<Value = String> {
    "\\PC{0,16}"
}

fn sandwich_of(bread: &str, patty: &str, sauce: &str) -> Sandwich {
    let mut s = Sandwich::new();
    s.add_bread(bread);
    s.add_patty(patty);
    s.add_sauce(sauce);
    s
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_virtual_and_policy_builders_agree(recipe in recipe_strategy()) {
        let Ok(mut dynamic) = VirtualSandwichBuilder::from_config(&recipe) else {
            return Err(TestCaseError::fail("catalogue recipe must build"));
        };
        let mut policy = policy_builder_for(&recipe);

        let Ok(a) = dynamic.build() else {
            return Err(TestCaseError::fail("dynamic builder must produce a sandwich"));
        };
        let Ok(b) = policy.build() else {
            return Err(TestCaseError::fail("policy builder must produce a sandwich"));
        };
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_custom_recipe_matches_policy_builder(
        recipe in recipe_strategy(),
        description in "[A-Za-z][A-Za-z ]{0,15}",
    ) {
        let Ok(custom) = CustomRecipe::new(
            description,
            recipe.bread().name(),
            recipe.patty().name(),
            recipe.sauce().name(),
        ) else {
            return Ok(());
        };
        let Ok(mut dynamic) = VirtualSandwichBuilder::from_config(&custom) else {
            return Err(TestCaseError::fail("validated custom recipe must build"));
        };
        let Ok(a) = dynamic.build() else {
            return Err(TestCaseError::fail("dynamic builder must produce a sandwich"));
        };
        let Ok(b) = policy_builder_for(&recipe).build() else {
            return Err(TestCaseError::fail("policy builder must produce a sandwich"));
        };
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_describe_format(
        bread in literal_strategy(),
        patty in literal_strategy(),
        sauce in literal_strategy(),
    ) {
        let s = sandwich_of(&bread, &patty, &sauce);
        prop_assert_eq!(s.describe(), format!("{bread} with {patty} and {sauce}"));
    }

    #[test]
    fn prop_reused_builder_never_leaks(recipe in recipe_strategy(), cycles in 2usize..6) {
        let mut builder = policy_builder_for(&recipe);
        let Ok(first) = builder.build() else {
            return Err(TestCaseError::fail("first cycle must produce a sandwich"));
        };
        for _ in 1..cycles {
            let Ok(next) = builder.build() else {
                return Err(TestCaseError::fail("later cycle must produce a sandwich"));
            };
            prop_assert_eq!(&next, &first);
            prop_assert!(!builder.has_sandwich());
        }
    }

    #[test]
    fn prop_equality_iff_all_slots_equal(
        a in (literal_strategy(), literal_strategy(), literal_strategy()),
        b in (literal_strategy(), literal_strategy(), literal_strategy()),
    ) {
        let sa = sandwich_of(&a.0, &a.1, &a.2);
        let sb = sandwich_of(&b.0, &b.1, &b.2);
        prop_assert_eq!(sa == sb, a == b);
    }
}
