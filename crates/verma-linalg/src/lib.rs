//! # verma-linalg
//!
//! Exact dense linear algebra over a field.
//!
//! This crate provides the small dense matrices the map solver builds when
//! it vectorizes algebra elements against a graded basis, together with
//! Gaussian elimination and a solver that insists on a unique solution.
//! Systems arising from commuting squares are square or overdetermined and
//! must have exactly one solution; anything else is reported, never
//! silently completed with free variables.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense_matrix;

pub use dense_matrix::{DenseMatrix, SolveOutcome};
