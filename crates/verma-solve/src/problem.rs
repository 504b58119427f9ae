//! Extraction of single-unknown squares into division problems.

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

use verma_pbw::{GradedAlgebra, Multidegree};

use crate::graph::{BggGraph, Edge};

/// Which side of the product the known factor occupies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    /// The unknown satisfies `known * candidate == rhs`.
    Left,
    /// The unknown satisfies `candidate * known == rhs`.
    Right,
}

/// A square with exactly one unknown edge, captured as a division
/// problem in the algebra.
///
/// The problem holds owned copies of the known maps, so a whole round
/// of problems can be solved against one snapshot of the registry.
#[derive(Clone, Debug)]
pub struct Problem<E> {
    /// The edge whose map is unknown.
    pub edge: Edge,
    /// Weight drop along `edge`; candidate solutions live in this degree.
    pub degree: Multidegree,
    /// Weight drop across the square diagonal; both path compositions
    /// live in this degree.
    pub rhs_degree: Multidegree,
    /// Side of the candidate the known factor multiplies on.
    pub side: Side,
    /// The known map adjacent to the unknown edge.
    pub known: E,
    /// The composition along the fully-known path.
    pub rhs: E,
}

/// Scans every square and returns one problem per determinable edge.
///
/// A square contributes when exactly three of its four edges have maps;
/// squares with fewer known edges wait for a later round. When several
/// squares determine the same edge, the one whose diagonal has the
/// strictly smallest total degree wins; on a tie the first one scanned
/// is kept. The result is sorted by edge so rounds are solved in a
/// deterministic order.
pub fn discover_problems<A: GradedAlgebra>(
    graph: &BggGraph,
    algebra: &A,
    maps: &FxHashMap<Edge, A::Elem>,
) -> Vec<Problem<A::Elem>> {
    let mut pending: FxHashMap<Edge, Problem<A::Elem>> = FxHashMap::default();

    for square in graph.squares() {
        let edges = square.edges();
        let missing = match edges.map(|e| maps.contains_key(&e)) {
            [false, true, true, true] => 0,
            [true, false, true, true] => 1,
            [true, true, false, true] => 2,
            [true, true, true, false] => 3,
            _ => continue,
        };

        // The factor beside the unknown edge multiplies on the side
        // that completes its own path; the other path is the rhs.
        let (side, known_edge) = match missing {
            0 => (Side::Left, edges[1]),
            1 => (Side::Right, edges[0]),
            2 => (Side::Left, edges[3]),
            _ => (Side::Right, edges[2]),
        };
        let rhs = if missing < 2 {
            algebra.product(&maps[&edges[3]], &maps[&edges[2]])
        } else {
            algebra.product(&maps[&edges[1]], &maps[&edges[0]])
        };

        let edge = edges[missing];
        let problem = Problem {
            edge,
            degree: graph.edge_degree(&edge),
            rhs_degree: graph.diagonal_degree(square),
            side,
            known: maps[&known_edge].clone(),
            rhs,
        };

        match pending.entry(edge) {
            Entry::Vacant(slot) => {
                slot.insert(problem);
            }
            Entry::Occupied(mut slot) => {
                if problem.rhs_degree.total() < slot.get().rhs_degree.total() {
                    slot.insert(problem);
                }
            }
        }
    }

    let mut problems: Vec<Problem<A::Elem>> = pending.into_values().collect();
    problems.sort_by_key(|p| p.edge);
    problems
}
