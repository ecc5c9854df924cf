//! # simplefrac-integers
//!
//! Arbitrary precision integer and rational arithmetic for simplest-fraction
//! search.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//! - Exact conversion from `f64` and correctly rounded conversion back

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod float;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::DomainError;
pub use integer::Integer;
pub use rational::Rational;
