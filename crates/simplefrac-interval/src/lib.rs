//! # simplefrac-interval
//!
//! The simplest fraction in an interval of the extended rational line, and
//! the simplest fraction that converts to a given `f64`.
//!
//! A fraction is *simpler* than another when, in lowest terms, neither its
//! absolute numerator nor its denominator is larger. Every nonempty interval
//! has exactly one fraction that is simpler than all of its other members.
//!
//! ```
//! use simplefrac_integers::Rational;
//! use simplefrac_interval::{simplest_from_float, simplest_in_interval};
//!
//! let open = simplest_in_interval(Some(Rational::from(3)), Some(Rational::from(4)), false, false);
//! assert_eq!(open, Ok(Rational::from_i64(7, 2)));
//!
//! assert_eq!(simplest_from_float(0.1), Ok(Rational::from_i64(1, 10)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod endpoint;
pub mod error;
pub mod interval;
pub mod rounding;
mod search;
pub mod tree;

#[cfg(test)]
mod proptests;

pub use endpoint::{Endpoint, Infinity};
pub use error::IntervalError;
pub use interval::{Bound, Interval};
pub use rounding::RoundingInterval;
pub use tree::stern_brocot_parents;

use simplefrac_integers::Rational;

/// Returns the simplest fraction in the interval between `left` and `right`.
///
/// A `None` endpoint means the interval is unbounded on that side. Integer
/// endpoints convert with `Rational::from`. Double and explicitly infinite
/// endpoints go through [`Endpoint`] and [`Interval::new`] instead:
///
/// ```
/// use simplefrac_integers::Rational;
/// use simplefrac_interval::{simplest_in_interval, Bound, Endpoint, Interval};
///
/// assert_eq!(
///     simplest_in_interval(None, Some(Rational::from(0)), false, false),
///     Ok(Rational::from(-1))
/// );
///
/// let left = Bound::included(Endpoint::try_from_f64(0.25)?);
/// let right = Bound::excluded(Endpoint::try_from_f64(f64::INFINITY)?);
/// assert_eq!(Interval::new(left, right)?.simplest(), Rational::from(1));
/// # Ok::<(), simplefrac_interval::IntervalError>(())
/// ```
///
/// # Errors
///
/// - [`IntervalError::UnboundedEndpointIncluded`] if a missing endpoint is
///   marked as included.
/// - [`IntervalError::EmptyInterval`] if the interval has no members.
pub fn simplest_in_interval(
    left: Option<Rational>,
    right: Option<Rational>,
    include_left: bool,
    include_right: bool,
) -> Result<Rational, IntervalError> {
    Interval::from_options(left, right, include_left, include_right).map(|interval| interval.simplest())
}

/// Returns the simplest fraction that rounds to `x` under round-half-to-even.
///
/// # Errors
///
/// Returns [`IntervalError::NonFiniteInput`] if `x` is NaN or infinite.
pub fn simplest_from_float(x: f64) -> Result<Rational, IntervalError> {
    let rounding = RoundingInterval::of(x)?;
    simplest_in_interval(
        Some(rounding.left),
        Some(rounding.right),
        rounding.closed,
        rounding.closed,
    )
}
