//! The ingredient catalogue: every bread, patty and sauce the built-in
//! recipes and policies know about.
//!
//! Each ingredient carries two spellings:
//!
//! - a **name**, the human-readable literal written into a [`Sandwich`]
//!   (`"Oregano Bread"`, `"BBQ"`, ...);
//! - a **token**, the identifier used inside builder descriptions
//!   (`"OreganoBread"`, `"BBQSauce"`, ...).
//!
//! Tokens parse back into ingredients via [`FromStr`](core::str::FromStr).
//!
//! [`Sandwich`]: super::Sandwich

use crate::error::BuilderError;

/// Declares an ingredient enum with its name/token tables.
macro_rules! ingredient {
    (
        $(#[$meta:meta])*
        $ty:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($name:literal, $token:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $ty {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Returns the literal written into a sandwich.
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// Returns the identifier used inside builder descriptions.
            #[must_use]
            pub const fn token(&self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }

        impl core::str::FromStr for $ty {
            type Err = BuilderError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $token => Ok(Self::$variant), )+
                    other => Err(BuilderError::UnknownIngredient(other.to_string())),
                }
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

ingredient! {
    /// Bread choices.
    Bread {
        /// Oregano-seasoned bread.
        Oregano => ("Oregano Bread", "OreganoBread"),
        /// Multigrain bread.
        Multigrain => ("Multigrain", "MultigrainBread"),
        /// Garlic bread.
        Garlic => ("Garlic Bread", "GarlicBread"),
    }
}

ingredient! {
    /// Patty choices.
    Patty {
        /// Chicken patty.
        Chicken => ("Chicken", "ChickenPatty"),
        /// Ham patty.
        Ham => ("Ham", "HamPatty"),
        /// Corn patty.
        Corn => ("Corn", "CornPatty"),
    }
}

ingredient! {
    /// Sauce choices.
    Sauce {
        /// Teriyaki sauce.
        Teriyaki => ("Teriyaki", "TeriyakiSauce"),
        /// Barbecue sauce.
        Bbq => ("BBQ", "BBQSauce"),
        /// Sweet onion sauce.
        SweetOnion => ("Sweet Onion", "SweetOnionSauce"),
    }
}
