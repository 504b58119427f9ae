//! # verma-pbw
//!
//! PBW bases for universal enveloping algebras of nilpotent Lie algebras.
//!
//! This crate provides:
//! - Multidegrees (weight vectors over the simple roots)
//! - Ordered generator words and PBW elements with rational coefficients
//! - Straightening multiplication driven by a structure-constant table
//! - The `GradedAlgebra` trait the map solver is generic over, with
//!   `PbwAlgebra` as its concrete implementation
//!
//! Elements are kept in normal form (non-decreasing generator words), so
//! equality of elements is literal equality of their term maps.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebra;
pub mod context;
pub mod element;
pub mod multidegree;
pub mod word;

#[cfg(test)]
mod proptests;

pub use algebra::GradedAlgebra;
pub use context::{ElementDisplay, PbwAlgebra};
pub use element::PbwElement;
pub use multidegree::{Multidegree, MAX_RANK};
pub use word::GenWord;
