//! # Verma
//!
//! Exact connecting maps for BGG resolutions of Verma modules.
//!
//! The solver takes the weighted graph of a resolution, seeds every
//! edge whose weight drop lies along a single simple root with a power
//! of the matching generator, and determines the remaining edge maps
//! from the commuting squares by exact rational linear algebra in the
//! PBW basis of the nilradical.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: Arbitrary-precision rationals, no floating point
//! - **PBW Normal Forms**: Straightening in graded enveloping algebras
//! - **Round-Based Solving**: Squares become solvable as their neighbours do
//! - **Parallel Rounds**: Independent linear systems solve on a thread pool
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verma::prelude::*;
//!
//! let algebra = PbwAlgebra::special_linear(2);
//! let graph = BggGraph::new(weights, edges, squares);
//! let maps = MapSolver::new(&graph, &algebra, SolverConfig::default()).solve()?;
//! for (edge, map) in &maps {
//!     println!("{:?} -> {:?}: {}", edge.source, edge.target, algebra.display(map));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use verma_linalg as linalg;
pub use verma_pbw as pbw;
pub use verma_rings as rings;
pub use verma_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use verma_linalg::{DenseMatrix, SolveOutcome};
    pub use verma_pbw::{GenWord, GradedAlgebra, Multidegree, PbwAlgebra, PbwElement};
    pub use verma_rings::{Field, Integer, Rational, Ring};
    pub use verma_solve::{
        check_maps, BggGraph, Edge, MapSolver, SolveError, SolverConfig, Square, Vertex,
    };
}
