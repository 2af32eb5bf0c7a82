//! Catalogue policies: one zero-sized type per ingredient.

use crate::domain::Sandwich;
use crate::traits::{BreadPolicy, PattyPolicy, SaucePolicy};

/// Declares a zero-sized policy type implementing one policy trait.
macro_rules! policy {
    ($(#[$meta:meta])* $ty:ident: $policy:ident::$step:ident => $add:ident($literal:literal), $token:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $ty;

        impl $policy for $ty {
            const TOKEN: &'static str = $token;

            fn $step(sandwich: &mut Sandwich) {
                sandwich.$add($literal);
            }
        }
    };
}

// -- bread --------------------------------------------------------------------

policy! {
    /// Oregano bread.
    OreganoBreadPolicy: BreadPolicy::build_bread => add_bread("Oregano Bread"), "OreganoBread"
}
policy! {
    /// Multigrain bread.
    MultigrainBreadPolicy: BreadPolicy::build_bread => add_bread("Multigrain"), "MultigrainBread"
}
policy! {
    /// Garlic bread.
    GarlicBreadPolicy: BreadPolicy::build_bread => add_bread("Garlic Bread"), "GarlicBread"
}

// -- patty --------------------------------------------------------------------

policy! {
    /// Chicken patty.
    ChickenPattyPolicy: PattyPolicy::build_patty => add_patty("Chicken"), "ChickenPatty"
}
policy! {
    /// Ham patty.
    HamPattyPolicy: PattyPolicy::build_patty => add_patty("Ham"), "HamPatty"
}
policy! {
    /// Corn patty.
    CornPattyPolicy: PattyPolicy::build_patty => add_patty("Corn"), "CornPatty"
}

// -- sauce --------------------------------------------------------------------

policy! {
    /// Teriyaki sauce.
    TeriyakiSaucePolicy: SaucePolicy::build_sauce => add_sauce("Teriyaki"), "TeriyakiSauce"
}
policy! {
    /// BBQ sauce.
    BbqSaucePolicy: SaucePolicy::build_sauce => add_sauce("BBQ"), "BBQSauce"
}
policy! {
    /// Sweet onion sauce.
    SweetOnionSaucePolicy: SaucePolicy::build_sauce => add_sauce("Sweet Onion"), "SweetOnionSauce"
}
