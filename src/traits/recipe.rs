//! Step contract for the dynamically dispatched builder.
//!
//! A [`SandwichRecipe`] supplies the three construction steps and its own
//! name.  It does **not** control the order in which the steps run: the
//! `VirtualSandwichBuilder` that owns the recipe always calls bread, then
//! patty, then sauce.
//!
//! ```text
//! VirtualSandwichBuilder::create_sandwich
//!     ├─ recipe.build_bread(&mut sandwich)
//!     ├─ recipe.build_patty(&mut sandwich)
//!     └─ recipe.build_sauce(&mut sandwich)
//! ```

use crate::domain::Sandwich;

/// The overridable steps of the dynamic builder.
///
/// Each step must call exactly one `add_*` method on the sandwich it is
/// given.  There is no default description: every recipe names itself.
///
/// # Examples
///
/// ```
/// use sandwich_builder::domain::Sandwich;
/// use sandwich_builder::traits::SandwichRecipe;
///
/// #[derive(Debug)]
/// struct RyeTurkeyMustard;
///
/// impl SandwichRecipe for RyeTurkeyMustard {
///     fn description(&self) -> &str {
///         "Virtual::RyeBread::TurkeyPatty::MustardSauce"
///     }
///     fn build_bread(&self, sandwich: &mut Sandwich) {
///         sandwich.add_bread("Rye");
///     }
///     fn build_patty(&self, sandwich: &mut Sandwich) {
///         sandwich.add_patty("Turkey");
///     }
///     fn build_sauce(&self, sandwich: &mut Sandwich) {
///         sandwich.add_sauce("Mustard");
///     }
/// }
/// ```
pub trait SandwichRecipe: Send + core::fmt::Debug {
    /// Returns the stable, unique name of this recipe.
    fn description(&self) -> &str;

    /// Adds the bread.
    fn build_bread(&self, sandwich: &mut Sandwich);

    /// Adds the patty.
    fn build_patty(&self, sandwich: &mut Sandwich);

    /// Adds the sauce.
    fn build_sauce(&self, sandwich: &mut Sandwich);
}
