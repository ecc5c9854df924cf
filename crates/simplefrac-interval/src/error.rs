//! Errors raised while describing or searching an interval.

use simplefrac_integers::DomainError;
use thiserror::Error;

use crate::endpoint::Infinity;

/// Errors that can occur when building an interval or searching it.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum IntervalError {
    /// The endpoints and inclusion flags describe no point at all.
    #[error("empty interval")]
    EmptyInterval,

    /// An infinite endpoint was marked as included.
    #[error("interval may not contain {0}")]
    UnboundedEndpointIncluded(Infinity),

    /// A float input was NaN or an infinity.
    #[error("expected a finite value, got {0}")]
    NonFiniteInput(f64),

    /// An endpoint could not be built as an exact rational.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
