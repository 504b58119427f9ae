//! The round-based solver for the unknown edge maps.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use verma_pbw::GradedAlgebra;

use crate::config::SolverConfig;
use crate::equation::solve_problem;
use crate::error::SolveError;
use crate::graph::{BggGraph, Edge, Square};
use crate::problem::{discover_problems, Problem};
use crate::progress::ProgressSink;

/// Solves for the map on every edge of a [`BggGraph`].
///
/// Construction seeds the edges whose weight drop lies along a single
/// simple root: their maps are forced to be powers of the matching
/// generator. The remaining maps are recovered round by round. Each
/// round collects every square with exactly one unknown edge, solves
/// all of the resulting linear systems against the same snapshot of
/// the registry, merges the solutions and rescans. Problems within a
/// round are independent, so large rounds run on the rayon pool.
pub struct MapSolver<'a, A: GradedAlgebra> {
    graph: &'a BggGraph,
    algebra: &'a A,
    config: SolverConfig,
    progress: Option<&'a mut dyn ProgressSink>,
    maps: FxHashMap<Edge, A::Elem>,
    num_trivial: usize,
}

impl<'a, A: GradedAlgebra + Sync> MapSolver<'a, A> {
    /// Creates a solver and seeds the single-root edges.
    ///
    /// # Panics
    ///
    /// Panics if the graph and algebra ranks differ, or if an edge
    /// drops along a simple root the algebra has no generator for.
    #[must_use]
    pub fn new(graph: &'a BggGraph, algebra: &'a A, config: SolverConfig) -> Self {
        assert!(
            graph.rank() == algebra.rank(),
            "graph and algebra rank differ"
        );

        let mut maps = FxHashMap::default();
        let mut num_trivial = 0;
        for edge in graph.edges() {
            let degree = graph.edge_degree(edge);
            if let Some((root, multiplicity)) = degree.single_support() {
                let index = algebra
                    .simple_generator(root)
                    .unwrap_or_else(|| panic!("no generator for simple root {root}"));
                debug_assert!(multiplicity > 0);
                maps.insert(*edge, algebra.generator_power(index, multiplicity as u32));
                num_trivial += 1;
            }
        }

        Self {
            graph,
            algebra,
            config,
            progress: None,
            maps,
            num_trivial,
        }
    }

    /// Attaches a progress sink.
    #[must_use]
    pub fn with_progress(mut self, sink: &'a mut dyn ProgressSink) -> Self {
        self.progress = Some(sink);
        self
    }

    /// Number of edges seeded with a generator power.
    #[must_use]
    pub fn num_trivial_maps(&self) -> usize {
        self.num_trivial
    }

    /// Number of edges that need a linear system.
    #[must_use]
    pub fn num_nontrivial_maps(&self) -> usize {
        self.graph.edges().len() - self.num_trivial
    }

    /// The map currently assigned to an edge, if any.
    #[must_use]
    pub fn map(&self, edge: &Edge) -> Option<&A::Elem> {
        self.maps.get(edge)
    }

    /// Solves every remaining edge map and returns the full registry.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Stuck`] when unsolved edges remain but no
    /// square determines any of them. [`SolveError::UnsolvableSystem`]
    /// and [`SolveError::BasisInconsistency`] propagate from individual
    /// systems. With [`SolverConfig::verify`] set, returns
    /// [`SolveError::NonCommutingSquare`] if a square fails the final
    /// re-check.
    pub fn solve(mut self) -> Result<FxHashMap<Edge, A::Elem>, SolveError> {
        if let Some(progress) = self.progress.as_deref_mut() {
            progress.reset(self.graph.edges().len() - self.num_trivial);
        }

        loop {
            let round = discover_problems(self.graph, self.algebra, &self.maps);
            if round.is_empty() {
                let unresolved = self.graph.edges().len() - self.maps.len();
                if unresolved > 0 {
                    return Err(SolveError::Stuck { unresolved });
                }
                break;
            }

            let algebra = self.algebra;
            let solve_one = |problem: &Problem<A::Elem>| {
                solve_problem(algebra, problem).map(|map| (problem.edge, map))
            };
            let solved: Vec<(Edge, A::Elem)> = if round.len() >= self.config.parallel_threshold {
                round.par_iter().map(solve_one).collect::<Result<_, _>>()?
            } else {
                round.iter().map(solve_one).collect::<Result<_, _>>()?
            };

            for (edge, map) in solved {
                self.maps.insert(edge, map);
                if let Some(progress) = self.progress.as_deref_mut() {
                    progress.tick();
                }
            }
        }

        if self.config.verify {
            if let Some(square) = first_non_commuting(self.graph, self.algebra, &self.maps) {
                return Err(SolveError::NonCommutingSquare { square });
            }
        }

        Ok(self.maps)
    }
}

/// Returns true when every square of the graph commutes under `maps`.
///
/// A square with a missing edge map counts as non-commuting.
#[must_use]
pub fn check_maps<A: GradedAlgebra>(
    graph: &BggGraph,
    algebra: &A,
    maps: &FxHashMap<Edge, A::Elem>,
) -> bool {
    first_non_commuting(graph, algebra, maps).is_none()
}

fn first_non_commuting<A: GradedAlgebra>(
    graph: &BggGraph,
    algebra: &A,
    maps: &FxHashMap<Edge, A::Elem>,
) -> Option<Square> {
    for square in graph.squares() {
        let edges = square.edges();
        let mut resolved = Vec::with_capacity(4);
        for edge in &edges {
            match maps.get(edge) {
                Some(map) => resolved.push(map),
                None => return Some(*square),
            }
        }
        let top = algebra.product(resolved[1], resolved[0]);
        let bottom = algebra.product(resolved[3], resolved[2]);
        if top != bottom {
            return Some(*square);
        }
    }
    None
}
