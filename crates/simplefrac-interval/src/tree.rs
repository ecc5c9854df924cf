//! Neighbours of a fraction in the Stern-Brocot tree.

use num_traits::Zero;
use simplefrac_integers::{Integer, Rational};

/// Returns the two Stern-Brocot parents of a positive non-integer fraction
/// `a/b`: the fractions `c/d`, both simpler than `a/b`, with `|ad - bc| = 1`.
/// `a/b` is their mediant and the smaller parent comes first.
///
/// Returns `None` for zero, negative fractions and integers, since an
/// integer's upper parent is `1/0`.
#[must_use]
pub fn stern_brocot_parents(x: &Rational) -> Option<(Rational, Rational)> {
    if !x.is_positive() || x.is_integer() {
        return None;
    }

    // Run the Euclidean algorithm on a/b, tracking the last two convergents.
    let mut a = x.numerator();
    let mut b = x.denominator();
    let (mut p, mut q) = (Integer::new(0), Integer::new(1));
    let (mut r, mut s) = (Integer::new(1), Integer::new(0));
    while !b.is_zero() {
        let quotient = &a / &b;
        let remainder = &a - &(&quotient * &b);
        a = std::mem::replace(&mut b, remainder);
        let next_r = &p + &(&quotient * &r);
        let next_s = &q + &(&quotient * &s);
        p = std::mem::replace(&mut r, next_r);
        q = std::mem::replace(&mut s, next_s);
    }

    // r/s is x itself and p/q the previous convergent; the other parent is
    // what remains of x after taking p/q out of the mediant.
    let previous = Rational::new(p.clone(), q.clone());
    let other = Rational::new(&r - &p, &s - &q);
    Some(if previous < other {
        (previous, other)
    } else {
        (other, previous)
    })
}
