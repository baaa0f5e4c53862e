//! Error types for set algebra operations.
//!
//! Almost every operation in this crate is total: malformed input is ruled
//! out by the `Hash + Eq` bounds on element types rather than by runtime
//! checks. The few operations that can fail return [`SetAlgebraError`].

use thiserror::Error;

/// Represents errors that can occur in set algebra operations.
///
/// # Examples
///
/// ```rust
/// use setalgebra::SetAlgebraError;
///
/// let error = SetAlgebraError::InvalidArgument {
///     operation: "filter_multiples_preserving_order",
///     reason: "divisor must not be zero",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "filter_multiples_preserving_order: invalid argument: divisor must not be zero"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetAlgebraError {
    /// An argument was outside the domain of the operation.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument {
        /// The name of the operation that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },

    /// The element to remove was not a member of the set.
    #[error("{operation}: element not found in set")]
    ElementNotFound {
        /// The name of the operation that looked up the element.
        operation: &'static str,
    },
}

impl SetAlgebraError {
    /// Returns the name of the operation that produced this error.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::InvalidArgument { operation, .. } | Self::ElementNotFound { operation } => {
                *operation
            }
        }
    }
}

/// A specialized `Result` type for set algebra operations.
pub type Result<T> = std::result::Result<T, SetAlgebraError>;
