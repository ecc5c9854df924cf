//! Validated subintervals of the extended rational line, and their
//! simplest fraction.

use std::cmp::Ordering;
use std::fmt;

use log::debug;
use num_traits::Zero;
use simplefrac_integers::Rational;

use crate::endpoint::Endpoint;
use crate::search::{simplest_in_positive, PairBound};
use crate::IntervalError;

/// An endpoint together with whether it belongs to the interval.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bound {
    /// Where the interval ends.
    pub endpoint: Endpoint,
    /// Whether the endpoint itself is a member.
    pub included: bool,
}

impl Bound {
    /// A bound that contains its endpoint.
    #[must_use]
    pub fn included(endpoint: impl Into<Endpoint>) -> Self {
        Self {
            endpoint: endpoint.into(),
            included: true,
        }
    }

    /// A bound that excludes its endpoint.
    #[must_use]
    pub fn excluded(endpoint: impl Into<Endpoint>) -> Self {
        Self {
            endpoint: endpoint.into(),
            included: false,
        }
    }

    fn negated(&self) -> Self {
        Self {
            endpoint: -&self.endpoint,
            included: self.included,
        }
    }

    fn to_pair_bound(&self) -> PairBound {
        let (numerator, denominator) = self.endpoint.to_pair();
        PairBound::new(numerator, denominator, self.included)
    }
}

/// A nonempty interval of the extended rational line.
///
/// Construction checks that no infinite endpoint is included and that the
/// interval has at least one point, so every `Interval` has a simplest
/// fraction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    left: Bound,
    right: Bound,
}

impl Interval {
    /// Creates an interval from its two bounds.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::UnboundedEndpointIncluded`] if either infinity is
    ///   marked as included.
    /// - [`IntervalError::EmptyInterval`] if `left > right`, or if they are
    ///   equal and not both included.
    pub fn new(left: Bound, right: Bound) -> Result<Self, IntervalError> {
        for bound in [&left, &right] {
            if let (true, Some(infinity)) = (bound.included, bound.endpoint.infinity()) {
                return Err(IntervalError::UnboundedEndpointIncluded(infinity));
            }
        }

        let nonempty = match left.endpoint.cmp(&right.endpoint) {
            Ordering::Less => true,
            Ordering::Equal => left.included && right.included,
            Ordering::Greater => false,
        };
        if !nonempty {
            return Err(IntervalError::EmptyInterval);
        }

        Ok(Self { left, right })
    }

    /// The open interval `(left, right)`.
    ///
    /// # Errors
    ///
    /// See [`Interval::new`].
    pub fn open(left: impl Into<Endpoint>, right: impl Into<Endpoint>) -> Result<Self, IntervalError> {
        Self::new(Bound::excluded(left), Bound::excluded(right))
    }

    /// The closed interval `[left, right]`.
    ///
    /// # Errors
    ///
    /// See [`Interval::new`].
    pub fn closed(left: impl Into<Endpoint>, right: impl Into<Endpoint>) -> Result<Self, IntervalError> {
        Self::new(Bound::included(left), Bound::included(right))
    }

    /// Builds an interval where a missing endpoint means unbounded on that
    /// side.
    ///
    /// # Errors
    ///
    /// See [`Interval::new`].
    pub fn from_options(
        left: Option<Rational>,
        right: Option<Rational>,
        include_left: bool,
        include_right: bool,
    ) -> Result<Self, IntervalError> {
        let left = left.map_or(Endpoint::NegInfinity, Endpoint::Finite);
        let right = right.map_or(Endpoint::PosInfinity, Endpoint::Finite);
        Self::new(
            Bound {
                endpoint: left,
                included: include_left,
            },
            Bound {
                endpoint: right,
                included: include_right,
            },
        )
    }

    /// The left bound.
    #[must_use]
    pub fn left(&self) -> &Bound {
        &self.left
    }

    /// The right bound.
    #[must_use]
    pub fn right(&self) -> &Bound {
        &self.right
    }

    /// Returns true if `x` lies in the interval.
    #[must_use]
    pub fn contains(&self, x: &Rational) -> bool {
        let above_left = match &self.left.endpoint {
            Endpoint::NegInfinity => true,
            Endpoint::Finite(left) => left < x || (self.left.included && left == x),
            Endpoint::PosInfinity => false,
        };
        let below_right = match &self.right.endpoint {
            Endpoint::NegInfinity => false,
            Endpoint::Finite(right) => x < right || (self.right.included && x == right),
            Endpoint::PosInfinity => true,
        };
        above_left && below_right
    }

    /// Returns the unique simplest fraction in the interval: the member
    /// whose absolute numerator and denominator are both minimal.
    #[must_use]
    pub fn simplest(&self) -> Rational {
        if self.contains(&Rational::zero()) {
            debug!("{self} contains zero");
            return Rational::zero();
        }

        // Zero is not a member, so the interval lies on one side of it.
        let negative = match &self.right.endpoint {
            Endpoint::Finite(right) => !right.is_positive(),
            Endpoint::NegInfinity => true,
            Endpoint::PosInfinity => false,
        };
        let (left, right) = if negative {
            debug!("reflecting {self} into the positive half-line");
            (self.right.negated(), self.left.negated())
        } else {
            (self.left.clone(), self.right.clone())
        };

        let (numerator, denominator) =
            simplest_in_positive(&left.to_pair_bound(), &right.to_pair_bound());
        let numerator = if negative { -numerator } else { numerator };
        let simplest = Rational::new(numerator, denominator);
        debug!("simplest fraction in {self} is {simplest}");
        simplest
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.left.included { '[' } else { '(' };
        let close = if self.right.included { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.left.endpoint, self.right.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Infinity;

    fn frac(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    fn simplest(left: Bound, right: Bound) -> Rational {
        Interval::new(left, right).unwrap().simplest()
    }

    #[test]
    fn test_rejects_included_infinity() {
        assert_eq!(
            Interval::new(Bound::included(Infinity::Negative), Bound::excluded(0)),
            Err(IntervalError::UnboundedEndpointIncluded(Infinity::Negative))
        );
        assert_eq!(
            Interval::from_options(Some(frac(1, 2)), None, false, true),
            Err(IntervalError::UnboundedEndpointIncluded(Infinity::Positive))
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Interval::open(frac(1, 2), frac(1, 2)), Err(IntervalError::EmptyInterval));
        assert_eq!(Interval::open(0, 0), Err(IntervalError::EmptyInterval));
        assert_eq!(Interval::closed(3, 2), Err(IntervalError::EmptyInterval));
        assert_eq!(
            Interval::new(Bound::included(2), Bound::excluded(2)),
            Err(IntervalError::EmptyInterval)
        );
        assert_eq!(
            Interval::open(Infinity::Positive, Infinity::Positive),
            Err(IntervalError::EmptyInterval)
        );
        assert_eq!(Interval::open(Infinity::Positive, 0), Err(IntervalError::EmptyInterval));
    }

    #[test]
    fn test_contains_respects_inclusion() {
        let interval = Interval::new(Bound::excluded(3), Bound::included(4)).unwrap();
        assert!(!interval.contains(&frac(3, 1)));
        assert!(interval.contains(&frac(7, 2)));
        assert!(interval.contains(&frac(4, 1)));
        assert!(!interval.contains(&frac(9, 2)));

        let everything = Interval::open(Infinity::Negative, Infinity::Positive).unwrap();
        assert!(everything.contains(&frac(-1_000_000, 3)));
    }

    #[test]
    fn test_zero_fast_path() {
        assert_eq!(Interval::open(-2, 2).unwrap().simplest(), Rational::zero());
        assert_eq!(simplest(Bound::included(0), Bound::excluded(Infinity::Positive)), Rational::zero());
        assert_eq!(simplest(Bound::excluded(-1), Bound::excluded(Infinity::Positive)), Rational::zero());
        assert_eq!(simplest(Bound::excluded(Infinity::Negative), Bound::excluded(frac(5, 2))), Rational::zero());
        assert_eq!(Interval::closed(0, 0).unwrap().simplest(), Rational::zero());
        assert_eq!(simplest(Bound::excluded(-5), Bound::included(0)), Rational::zero());
    }

    #[test]
    fn test_positive_intervals() {
        assert_eq!(Interval::open(3, 4).unwrap().simplest(), frac(7, 2));
        assert_eq!(Interval::closed(3, 4).unwrap().simplest(), frac(3, 1));
        assert_eq!(Interval::open(3, 5).unwrap().simplest(), frac(4, 1));
        assert_eq!(simplest(Bound::excluded(0), Bound::excluded(Infinity::Positive)), frac(1, 1));
        assert_eq!(simplest(Bound::excluded(frac(7, 2)), Bound::excluded(Infinity::Positive)), frac(4, 1));
        assert_eq!(Interval::closed(frac(1, 2), frac(1, 2)).unwrap().simplest(), frac(1, 2));
    }

    #[test]
    fn test_negative_intervals_are_reflected() {
        assert_eq!(Interval::open(-3, -1).unwrap().simplest(), frac(-2, 1));
        assert_eq!(Interval::open(-1, 0).unwrap().simplest(), frac(-1, 2));
        assert_eq!(Interval::open(-5, -3).unwrap().simplest(), frac(-4, 1));
        assert_eq!(simplest(Bound::excluded(-5), Bound::included(-3)), frac(-3, 1));
        assert_eq!(simplest(Bound::excluded(Infinity::Negative), Bound::excluded(frac(-7, 2))), frac(-4, 1));
        assert_eq!(
            Interval::open(frac(-5, 7), frac(-7, 10)).unwrap().simplest(),
            frac(-12, 17)
        );
    }

    #[test]
    fn test_zero_as_excluded_endpoint() {
        let third = frac(1, 3);
        let cases = [
            // (a, 0) and [a, 0)
            (Bound::excluded(-1), Bound::excluded(0), frac(-1, 2)),
            (Bound::included(-1), Bound::excluded(0), frac(-1, 1)),
            (Bound::excluded(-3), Bound::excluded(0), frac(-1, 1)),
            (Bound::included(-&third), Bound::excluded(0), frac(-1, 3)),
            (Bound::excluded(-&third), Bound::excluded(0), frac(-1, 4)),
            (Bound::excluded(Infinity::Negative), Bound::excluded(0), frac(-1, 1)),
            // (0, b) and (0, b]
            (Bound::excluded(0), Bound::excluded(1), frac(1, 2)),
            (Bound::excluded(0), Bound::included(1), frac(1, 1)),
            (Bound::excluded(0), Bound::excluded(3), frac(1, 1)),
            (Bound::excluded(0), Bound::included(third.clone()), frac(1, 3)),
            (Bound::excluded(0), Bound::excluded(third.clone()), frac(1, 4)),
        ];
        for (left, right, expected) in cases {
            let interval = Interval::new(left, right).unwrap();
            let simplest = interval.simplest();
            assert_eq!(simplest, expected, "simplest in {interval}");
            assert!(interval.contains(&simplest));
        }
    }

    #[test]
    fn test_display() {
        let interval = Interval::new(Bound::excluded(3), Bound::included(frac(9, 2))).unwrap();
        assert_eq!(interval.to_string(), "(3, 9/2]");
        let ray = Interval::from_options(None, Some(frac(5, 2)), false, true).unwrap();
        assert_eq!(ray.to_string(), "(-inf, 5/2]");
    }
}
