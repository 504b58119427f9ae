//! Error types for the map solver.

use std::fmt;

use thiserror::Error;

use verma_pbw::{GenWord, Multidegree};

use crate::graph::{Edge, Square};

/// Why a linear system failed to pin down an edge map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemDefect {
    /// The constraints admit no solution.
    Inconsistent,
    /// The constraints admit more than one solution.
    Underdetermined,
}

impl fmt::Display for SystemDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inconsistent => write!(f, "inconsistent"),
            Self::Underdetermined => write!(f, "underdetermined"),
        }
    }
}

/// Errors raised while solving for unknown edge maps.
#[derive(Clone, Debug, Error)]
pub enum SolveError {
    /// Some edges have no map, but no square with exactly one unknown
    /// edge remains to determine any of them.
    #[error("no square determines any of the {unresolved} remaining unsolved edge(s)")]
    Stuck {
        /// Number of edges still without a map.
        unresolved: usize,
    },

    /// The linear system for an edge map had no unique solution.
    #[error("the system for edge {edge:?} over the degree-{degree:?} basis is {defect}")]
    UnsolvableSystem {
        /// The edge whose map was being solved.
        edge: Edge,
        /// Degree of the candidate basis.
        degree: Multidegree,
        /// How the system failed.
        defect: SystemDefect,
    },

    /// An element contained a monomial outside the basis of its
    /// expected degree.
    #[error("monomial {word:?} falls outside the basis of degree {degree:?}")]
    BasisInconsistency {
        /// The offending monomial.
        word: GenWord,
        /// Degree whose basis was expected to contain it.
        degree: Multidegree,
    },

    /// Verification found a square whose two path compositions differ.
    #[error("square {square:?} does not commute")]
    NonCommutingSquare {
        /// The offending square.
        square: Square,
    },
}
