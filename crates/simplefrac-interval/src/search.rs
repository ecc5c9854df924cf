//! The simplest fraction in a subinterval of `[0, ∞]`.
//!
//! This is a continued-fraction descent of the Stern-Brocot tree. The search
//! keeps a working interval `J` and a Möbius transformation `T` with
//! nonnegative entries and determinant ±1 such that `T(J)` is the input
//! interval `I` and `T` is a bijection between the rationals of `J` and `I`.
//! Each step peels one partial quotient `q` off `J`:
//!
//! ```text
//! J  <-  1 / (J - q)          T  <-  T ∘ (z ↦ q + 1/z)
//! ```
//!
//! which swaps which end of `J` is the left one. The descent stops as soon as
//! `1 ∈ J`, and the answer is `T(1) = (a + b) / (c + d)`.
//!
//! That answer is the simplest fraction of `I`: any `x/y` in `I` in lowest
//! terms pulls back to some `p/q ∈ J`, also in lowest terms because
//! `|ad - bc| = 1`, so `x = ap + bq` and `y = cp + dq`. With `p, q >= 1` and
//! nonnegative entries this gives `x >= a + b` and `y >= c + d`.
//!
//! The first transformation is `T(z) = z - 1` rather than the identity, so
//! that `J = I + 1` and the first quotient already accounts for the integer
//! part of the left endpoint, zero included. After that first step every
//! entry of `T` is nonnegative.

use log::trace;
use num_traits::{One, Zero};
use simplefrac_integers::Integer;

/// One end of a working interval, as an unreduced pair. The pair `1/0`
/// stands for +∞.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PairBound {
    pub(crate) numerator: Integer,
    pub(crate) denominator: Integer,
    pub(crate) included: bool,
}

impl PairBound {
    pub(crate) fn new(numerator: Integer, denominator: Integer, included: bool) -> Self {
        Self {
            numerator,
            denominator,
            included,
        }
    }
}

/// The transformation `T(z) = (az + b) / (cz + d)`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Mobius {
    a: Integer,
    b: Integer,
    c: Integer,
    d: Integer,
}

impl Mobius {
    /// `T(z) = z - 1`
    fn unit_shift() -> Self {
        Self {
            a: Integer::one(),
            b: -Integer::one(),
            c: Integer::zero(),
            d: Integer::one(),
        }
    }

    /// Replaces `T` by `T(q + 1/z)`.
    fn push_quotient(&mut self, q: &Integer) {
        let a = std::mem::replace(&mut self.a, Integer::zero());
        let c = std::mem::replace(&mut self.c, Integer::zero());
        self.a = &self.b + &(q * &a);
        self.b = a;
        self.c = &self.d + &(q * &c);
        self.d = c;
    }

    fn determinant(&self) -> Integer {
        &self.a * &self.d - &self.b * &self.c
    }

    /// Returns `T(1)` as a numerator/denominator pair.
    fn image_of_one(self) -> (Integer, Integer) {
        (self.a + self.b, self.c + self.d)
    }
}

/// Finds the simplest fraction in the interval from `left` to `right`.
///
/// Requires a nonempty interval whose left end is nonnegative, or `-1/0`,
/// and whose right end is positive, or zero and included, or `1/0`. The
/// returned pair is already in lowest terms with a positive denominator.
pub(crate) fn simplest_in_positive(left: &PairBound, right: &PairBound) -> (Integer, Integer) {
    // J = I + 1, held as lower = s/t and upper = u/v.
    let mut lower = PairBound::new(
        &left.numerator + &left.denominator,
        left.denominator.clone(),
        left.included,
    );
    let mut upper = PairBound::new(
        &right.numerator + &right.denominator,
        right.denominator.clone(),
        right.included,
    );
    let mut transform = Mobius::unit_shift();
    let mut steps = 0usize;

    loop {
        // 1 ∉ J exactly when the lower end sits at or past 1, after
        // accounting for whether that end is included.
        let reach = if lower.included {
            &lower.numerator - &Integer::one()
        } else {
            lower.numerator.clone()
        };
        if reach < lower.denominator {
            break;
        }
        let q = reach / &lower.denominator;
        trace!("partial quotient {q} at step {steps}");

        // J <- 1 / (J - q): the old upper end becomes the new lower end.
        let next_lower = PairBound::new(
            upper.denominator.clone(),
            &upper.numerator - &(&q * &upper.denominator),
            upper.included,
        );
        let next_upper = PairBound::new(
            lower.denominator.clone(),
            &lower.numerator - &(&q * &lower.denominator),
            lower.included,
        );
        lower = next_lower;
        upper = next_upper;
        transform.push_quotient(&q);
        debug_assert!(transform.determinant().abs().is_one());
        steps += 1;
    }

    trace!("search finished after {steps} steps");
    transform.image_of_one()
}
