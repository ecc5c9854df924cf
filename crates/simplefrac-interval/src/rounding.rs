//! The interval of reals that round to a given double.
//!
//! Under round-half-to-even, the reals that convert to a finite double `x`
//! are those strictly closer to `x` than to either neighbouring double, plus
//! the two midpoints when `x` has an even significand (the midpoints are
//! ties, and ties go to the even side). Every quantity here is exact.

use simplefrac_integers::Rational;

use crate::interval::{Bound, Interval};
use crate::IntervalError;

/// All reals that round to one particular double.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoundingInterval {
    /// Midpoint between the double and its lower neighbour.
    pub left: Rational,
    /// Midpoint between the double and its upper neighbour.
    pub right: Rational,
    /// Whether both midpoints round to the double.
    pub closed: bool,
}

impl RoundingInterval {
    /// Computes the rounding interval of a finite double.
    ///
    /// Both zeros share the interval `[-m, m]` where `m` is half the
    /// smallest subnormal. For the largest finite double the missing upper
    /// neighbour is replaced by reflecting the lower midpoint through `x`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonFiniteInput`] for NaN and the infinities.
    pub fn of(x: f64) -> Result<Self, IntervalError> {
        if !x.is_finite() {
            return Err(IntervalError::NonFiniteInput(x));
        }
        if x < 0.0 {
            let reflected = Self::of(-x)?;
            return Ok(Self {
                left: -reflected.right,
                right: -reflected.left,
                closed: reflected.closed,
            });
        }

        let bits = x.to_bits();
        if x == 0.0 {
            let right = midpoint(0.0, f64::from_bits(1))?;
            return Ok(Self {
                left: -&right,
                right,
                closed: true,
            });
        }

        let below = f64::from_bits(bits - 1);
        let above = f64::from_bits(bits + 1);
        let left = midpoint(x, below)?;
        let right = if above.is_infinite() {
            let exact = Rational::try_from_f64(x)?;
            &(&exact + &exact) - &left
        } else {
            midpoint(x, above)?
        };

        Ok(Self {
            left,
            right,
            closed: bits % 2 == 0,
        })
    }

    /// Returns true if `value` rounds to the double this interval was
    /// computed from.
    #[must_use]
    pub fn contains(&self, value: &Rational) -> bool {
        if self.closed {
            &self.left <= value && value <= &self.right
        } else {
            &self.left < value && value < &self.right
        }
    }

    /// The same set as an [`Interval`].
    ///
    /// # Errors
    ///
    /// Never fails for an interval produced by [`RoundingInterval::of`],
    /// whose left end is always strictly below its right end.
    pub fn to_interval(&self) -> Result<Interval, IntervalError> {
        Interval::new(
            Bound {
                endpoint: self.left.clone().into(),
                included: self.closed,
            },
            Bound {
                endpoint: self.right.clone().into(),
                included: self.closed,
            },
        )
    }
}

fn midpoint(x: f64, y: f64) -> Result<Rational, IntervalError> {
    let sum = Rational::try_from_f64(x)? + Rational::try_from_f64(y)?;
    Ok(sum * Rational::from_i64(1, 2))
}
