//! # verma-solve
//!
//! Round-based computation of commuting edge maps on a weighted graph.
//!
//! Every edge of a [`BggGraph`] carries an element of a graded algebra;
//! the squares of the graph must commute. Maps on edges whose weight
//! drop lies along a single simple root are forced generator powers.
//! Every other map is recovered from a square in which it is the only
//! unknown: multiplying a basis of candidates by the adjacent known map
//! and equating against the composition along the other path gives an
//! exact rational linear system with a unique solution. Solving runs in
//! rounds until every edge has a map.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod basis;
pub mod config;
pub mod equation;
pub mod error;
pub mod graph;
pub mod problem;
pub mod progress;
pub mod solver;
pub mod vectorize;

#[cfg(test)]
mod proptests;

pub use basis::multidegree_basis;
pub use config::SolverConfig;
pub use equation::solve_problem;
pub use error::{SolveError, SystemDefect};
pub use graph::{BggGraph, Edge, Square, Vertex};
pub use problem::{discover_problems, Problem, Side};
pub use progress::{NoProgress, ProgressSink};
pub use solver::{check_maps, MapSolver};
pub use vectorize::TargetBasis;
