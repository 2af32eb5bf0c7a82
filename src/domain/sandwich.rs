//! The product assembled by every builder.

/// A sandwich with three ingredient slots.
///
/// Every slot starts out empty and is filled by one of the `add_*`
/// setters while a builder runs its orchestration.  Once a builder hands
/// the sandwich out it is never touched again by the library.
///
/// Two sandwiches are equal only if bread, patty and sauce all match.
///
/// # Examples
///
/// ```
/// use sandwich_builder::domain::Sandwich;
///
/// let mut sandwich = Sandwich::new();
/// sandwich.add_bread("Garlic Bread");
/// sandwich.add_patty("Corn");
/// sandwich.add_sauce("Teriyaki");
///
/// assert_eq!(sandwich.describe(), "Garlic Bread with Corn and Teriyaki");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sandwich {
    bread: String,
    patty: String,
    sauce: String,
}

impl Sandwich {
    /// Creates an empty sandwich.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bread: String::new(),
            patty: String::new(),
            sauce: String::new(),
        }
    }

    /// Sets the bread.  Last write wins.
    pub fn add_bread(&mut self, bread: impl Into<String>) {
        self.bread = bread.into();
    }

    /// Sets the patty.  Last write wins.
    pub fn add_patty(&mut self, patty: impl Into<String>) {
        self.patty = patty.into();
    }

    /// Sets the sauce.  Last write wins.
    pub fn add_sauce(&mut self, sauce: impl Into<String>) {
        self.sauce = sauce.into();
    }

    /// Returns the bread.
    #[must_use]
    pub fn bread(&self) -> &str {
        &self.bread
    }

    /// Returns the patty.
    #[must_use]
    pub fn patty(&self) -> &str {
        &self.patty
    }

    /// Returns the sauce.
    #[must_use]
    pub fn sauce(&self) -> &str {
        &self.sauce
    }

    /// Returns `"<bread> with <patty> and <sauce>"`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Sandwich {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} with {} and {}", self.bread, self.patty, self.sauce)
    }
}
