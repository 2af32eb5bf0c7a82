//! Domain value types: the [`Sandwich`] product and the ingredient
//! catalogue ([`Bread`], [`Patty`], [`Sauce`]).

mod ingredient;
mod sandwich;

pub use ingredient::{Bread, Patty, Sauce};
pub use sandwich::Sandwich;
