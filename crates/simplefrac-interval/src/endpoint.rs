//! Endpoints on the extended rational line.
//!
//! An [`Endpoint`] is a finite [`Rational`] or one of the two signed
//! infinities. The derived ordering is the natural extended order:
//! `-inf < every finite value < +inf`.

use std::fmt;
use std::ops::Neg;

use simplefrac_integers::{Integer, Rational};

use crate::IntervalError;

/// One of the two signed infinities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Infinity {
    /// -∞, the left end of the line.
    Negative,
    /// +∞, the right end of the line.
    Positive,
}

impl fmt::Display for Infinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Infinity::Negative => write!(f, "-infinity"),
            Infinity::Positive => write!(f, "infinity"),
        }
    }
}

/// A point of the extended rational line.
///
/// Variant order matters: it drives the derived `Ord`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endpoint {
    /// -∞
    NegInfinity,
    /// An exact rational value.
    Finite(Rational),
    /// +∞
    PosInfinity,
}

impl Endpoint {
    /// Converts a double, mapping the infinities to the signed infinite
    /// endpoints and every finite value to its exact rational.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonFiniteInput`] for NaN.
    pub fn try_from_f64(x: f64) -> Result<Self, IntervalError> {
        if x.is_nan() {
            Err(IntervalError::NonFiniteInput(x))
        } else if x == f64::INFINITY {
            Ok(Endpoint::PosInfinity)
        } else if x == f64::NEG_INFINITY {
            Ok(Endpoint::NegInfinity)
        } else {
            Ok(Endpoint::Finite(Rational::try_from_f64(x)?))
        }
    }

    /// Returns the finite value, if any.
    #[must_use]
    pub fn finite(&self) -> Option<&Rational> {
        match self {
            Endpoint::Finite(value) => Some(value),
            _ => None,
        }
    }

    /// Returns which infinity this is, if it is not finite.
    #[must_use]
    pub fn infinity(&self) -> Option<Infinity> {
        match self {
            Endpoint::NegInfinity => Some(Infinity::Negative),
            Endpoint::Finite(_) => None,
            Endpoint::PosInfinity => Some(Infinity::Positive),
        }
    }

    /// Returns true for finite endpoints.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Endpoint::Finite(_))
    }

    /// Returns the endpoint as a numerator/denominator pair, with the
    /// infinities encoded as `-1/0` and `1/0`.
    pub(crate) fn to_pair(&self) -> (Integer, Integer) {
        match self {
            Endpoint::NegInfinity => (Integer::new(-1), Integer::new(0)),
            Endpoint::Finite(value) => (value.numerator(), value.denominator()),
            Endpoint::PosInfinity => (Integer::new(1), Integer::new(0)),
        }
    }
}

impl Neg for Endpoint {
    type Output = Endpoint;

    fn neg(self) -> Self::Output {
        match self {
            Endpoint::NegInfinity => Endpoint::PosInfinity,
            Endpoint::Finite(value) => Endpoint::Finite(-value),
            Endpoint::PosInfinity => Endpoint::NegInfinity,
        }
    }
}

impl Neg for &Endpoint {
    type Output = Endpoint;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::NegInfinity => write!(f, "-inf"),
            Endpoint::Finite(value) => write!(f, "{value}"),
            Endpoint::PosInfinity => write!(f, "inf"),
        }
    }
}

impl From<Rational> for Endpoint {
    fn from(value: Rational) -> Self {
        Endpoint::Finite(value)
    }
}

impl From<Integer> for Endpoint {
    fn from(value: Integer) -> Self {
        Endpoint::Finite(Rational::from(value))
    }
}

impl From<i64> for Endpoint {
    fn from(value: i64) -> Self {
        Endpoint::Finite(Rational::from(value))
    }
}

impl From<i32> for Endpoint {
    fn from(value: i32) -> Self {
        Endpoint::Finite(Rational::from(value))
    }
}

impl From<Infinity> for Endpoint {
    fn from(value: Infinity) -> Self {
        match value {
            Infinity::Negative => Endpoint::NegInfinity,
            Infinity::Positive => Endpoint::PosInfinity,
        }
    }
}
