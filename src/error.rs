//! Unified error types for the sandwich builder library.
//!
//! All fallible operations across the crate return [`BuilderError`] as
//! their error type, ensuring a consistent error handling experience for
//! consumers.
//!
//! A registry lookup miss is deliberately **not** an error: it is a normal
//! outcome represented by `None`.  Only the one-shot
//! [`BuilderRegistry::build`](crate::registry::BuilderRegistry::build)
//! convenience turns a miss into [`BuilderError::UnknownBuilder`].

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, BuilderError>;

/// Every failure the library can surface.
///
/// All variants are contract violations or configuration mistakes made by
/// the caller; none of them is transient, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// A sandwich was requested from a builder that has not completed an
    /// orchestration since its last retrieval.
    #[error("no sandwich has been built since the last retrieval")]
    EmptyRetrieval,

    /// A builder configuration violates one of its invariants.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// An ingredient token did not match any known bread, patty or sauce.
    #[error("unknown ingredient: {0}")]
    UnknownIngredient(String),

    /// No live builder is registered under the requested description.
    #[error("no builder registered under {0:?}")]
    UnknownBuilder(String),
}
