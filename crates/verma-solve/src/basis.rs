//! Enumeration of the PBW monomials of a fixed multidegree.

use verma_pbw::{GenWord, GradedAlgebra, Multidegree};

/// All normal-form words whose generator weights sum to `degree`.
///
/// The search walks generators with a monotone cursor, so every word
/// comes out with non-decreasing indices and each one exactly once.
/// The result order is the depth-first discovery order and is
/// deterministic for a fixed algebra.
///
/// The zero degree yields the empty word (the unit of the algebra); a
/// degree that no sum of generator weights reaches yields an empty
/// list.
#[must_use]
pub fn multidegree_basis<A: GradedAlgebra>(algebra: &A, degree: &Multidegree) -> Vec<GenWord> {
    if degree.is_zero() {
        return vec![GenWord::empty()];
    }

    let num_generators = algebra.num_generators();
    let mut results = Vec::new();
    let mut stack: Vec<(Multidegree, GenWord, usize)> = vec![(*degree, GenWord::empty(), 0)];

    while let Some((remaining, word, cursor)) = stack.pop() {
        if remaining.is_zero() {
            results.push(word);
            continue;
        }
        for index in cursor..num_generators {
            let weight = algebra.generator_weight(index);
            if remaining.dominates(weight) {
                stack.push((remaining.sub(weight), word.appended(index as u16), index));
            }
        }
    }

    results
}
