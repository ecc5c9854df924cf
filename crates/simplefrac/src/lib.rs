//! # simplefrac
//!
//! Find the simplest fraction in a rational interval, or the simplest
//! fraction that converts to a given `f64`.
//!
//! "Simplest" means smallest absolute numerator *and* smallest denominator
//! in lowest terms. Within any nonempty interval exactly one fraction wins
//! on both counts, and it is found exactly by a continued-fraction descent of
//! the Stern-Brocot tree, with arbitrary precision throughout.
//!
//! ## Quick Start
//!
//! ```rust
//! use simplefrac::prelude::*;
//!
//! // 0.1 is not exactly 1/10, but 1/10 is the simplest fraction that rounds to it.
//! assert_eq!(simplest_from_float(0.1).unwrap(), Rational::from_i64(1, 10));
//!
//! // Simplest fraction strictly between 7/10 and 5/7.
//! let interval = Interval::open(Rational::from_i64(7, 10), Rational::from_i64(5, 7)).unwrap();
//! assert_eq!(interval.simplest(), Rational::from_i64(12, 17));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use simplefrac_integers as integers;
pub use simplefrac_interval as interval;

pub use simplefrac_interval::{simplest_from_float, simplest_in_interval, IntervalError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use simplefrac_integers::{DomainError, Integer, Rational};
    pub use simplefrac_interval::{
        simplest_from_float, simplest_in_interval, stern_brocot_parents, Bound, Endpoint, Infinity,
        Interval, IntervalError, RoundingInterval,
    };
}
