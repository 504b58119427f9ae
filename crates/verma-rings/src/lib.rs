//! # verma-rings
//!
//! Exact scalar arithmetic for BGG map computations.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//!
//! together with the `Ring`/`Field` traits the rest of the workspace is
//! generic over. Every coefficient in a BGG map is a `Rational`; no
//! floating point is used anywhere.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
pub use traits::{Field, Ring};
