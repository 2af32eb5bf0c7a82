//! Construction strategies and the description grammar built on them.
//!
//! Catalogue builders describe themselves as
//! `<strategy>::<bread>::<patty>::<sauce>`, for example
//! `Policy::OreganoBread::ChickenPatty::BBQSauce`.

/// Separator between description segments.
pub(crate) const SEPARATOR: &str = "::";

/// How a catalogue recipe's steps are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Steps supplied by a boxed recipe through dynamic dispatch.
    Virtual,
    /// Steps supplied by three policies fixed at compile time.
    Policy,
}

impl Strategy {
    /// Every strategy.
    pub const ALL: &'static [Self] = &[Self::Virtual, Self::Policy];

    /// Returns the description prefix for this strategy.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Virtual => "Virtual",
            Self::Policy => "Policy",
        }
    }

    /// Parses a description prefix.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.prefix() == prefix)
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Joins the four description segments.
pub(crate) fn compose_description(strategy: &str, bread: &str, patty: &str, sauce: &str) -> String {
    [strategy, bread, patty, sauce].join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        assert_eq!(Strategy::Virtual.prefix(), "Virtual");
        assert_eq!(Strategy::Policy.prefix(), "Policy");
    }

    #[test]
    fn from_prefix_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(Strategy::from_prefix(s.prefix()), Some(*s));
        }
        assert_eq!(Strategy::from_prefix("policy"), None);
        assert_eq!(Strategy::from_prefix(""), None);
    }

    #[test]
    fn compose() {
        assert_eq!(
            compose_description("Policy", "OreganoBread", "ChickenPatty", "BBQSauce"),
            "Policy::OreganoBread::ChickenPatty::BBQSauce"
        );
    }
}
