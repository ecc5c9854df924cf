//! Exact conversions between [`Rational`] and `f64`.
//!
//! A finite double is a dyadic rational, so the conversion into [`Rational`]
//! never loses precision. The conversion back rounds half to even, with
//! gradual underflow and overflow to infinity. Both directions are `dashu`'s.

use dashu::rational::RBig;

use crate::{DomainError, Rational};

impl Rational {
    /// Returns the exact value of a finite double.
    ///
    /// Both zeros map to `0/1`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonFinite`] for NaN and the infinities.
    pub fn try_from_f64(x: f64) -> Result<Self, DomainError> {
        RBig::try_from(x)
            .map(Self)
            .map_err(|_| DomainError::NonFinite(x))
    }

    /// Returns the double nearest to this rational, ties to even.
    ///
    /// Values beyond the finite range round to the signed infinity and
    /// values up to half the smallest subnormal round to zero.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }
}

impl TryFrom<f64> for Rational {
    type Error = DomainError;

    fn try_from(x: f64) -> Result<Self, Self::Error> {
        Self::try_from_f64(x)
    }
}
