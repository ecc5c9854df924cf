//! Errors raised when constructing exact values.

use thiserror::Error;

/// A value could not be represented as an exact rational.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum DomainError {
    /// A fraction was built with a zero denominator.
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    /// NaN or an infinity was given where a finite double is required.
    #[error("{0} has no exact rational value")]
    NonFinite(f64),
}
