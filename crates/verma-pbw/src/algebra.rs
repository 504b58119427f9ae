//! The algebra interface the map solver is generic over.
//!
//! The solver never inspects the representation of an algebra element; it
//! multiplies elements, decomposes them into (word, coefficient) pairs,
//! and rebuilds elements from such pairs. Any graded algebra with a
//! canonical word basis can implement this trait.

use std::fmt::Debug;

use verma_rings::Rational;

use crate::multidegree::Multidegree;
use crate::word::GenWord;

/// A graded algebra with a distinguished ordered basis of words.
///
/// # Contract
///
/// - Generators are indexed `0..num_generators()`, each with a weight of
///   rank `rank()`.
/// - Every element decomposes uniquely into normal-form words with
///   non-zero rational coefficients.
/// - Multiplication respects the grading: every word of a product of
///   homogeneous elements has weight equal to the sum of their weights.
pub trait GradedAlgebra {
    /// The element type.
    type Elem: Clone + Eq + Debug + Send + Sync;

    /// Number of simple roots (length of every weight vector).
    fn rank(&self) -> usize;

    /// Number of generators.
    fn num_generators(&self) -> usize;

    /// The weight of a generator.
    fn generator_weight(&self, index: usize) -> &Multidegree;

    /// The generator whose weight is the coordinate vector at `root`,
    /// if the algebra has one.
    fn simple_generator(&self, root: usize) -> Option<usize>;

    /// A generator raised to a non-negative integer power.
    fn generator_power(&self, index: usize, exp: u32) -> Self::Elem;

    /// The element represented by a word (normalized if needed).
    fn word_element(&self, word: &GenWord) -> Self::Elem;

    /// The product `lhs * rhs`. Multiplication is not commutative.
    fn product(&self, lhs: &Self::Elem, rhs: &Self::Elem) -> Self::Elem;

    /// The (word, coefficient) terms of an element, sorted by word.
    fn decompose(&self, elem: &Self::Elem) -> Vec<(GenWord, Rational)>;

    /// Builds an element from (word, coefficient) terms.
    fn from_terms(&self, terms: Vec<(GenWord, Rational)>) -> Self::Elem;
}
