//! Coordinates of algebra elements in a fixed-degree monomial basis.

use rustc_hash::FxHashMap;

use verma_linalg::DenseMatrix;
use verma_pbw::{GenWord, GradedAlgebra, Multidegree};
use verma_rings::Rational;

use crate::basis::multidegree_basis;
use crate::error::SolveError;

/// The monomial basis of one multidegree, with positional lookup.
#[derive(Clone, Debug)]
pub struct TargetBasis {
    degree: Multidegree,
    words: Vec<GenWord>,
    positions: FxHashMap<GenWord, usize>,
}

impl TargetBasis {
    /// Enumerates the basis of `degree`.
    #[must_use]
    pub fn new<A: GradedAlgebra>(algebra: &A, degree: &Multidegree) -> Self {
        let words = multidegree_basis(algebra, degree);
        let positions = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();
        Self {
            degree: *degree,
            words,
            positions,
        }
    }

    /// Number of basis words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the degree has no basis words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The basis words in enumeration order.
    #[must_use]
    pub fn words(&self) -> &[GenWord] {
        &self.words
    }

    /// The degree this basis spans.
    #[must_use]
    pub fn degree(&self) -> &Multidegree {
        &self.degree
    }

    /// Coordinates of `elem` in this basis.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::BasisInconsistency`] if a monomial of
    /// `elem` is not a basis word; a homogeneous element of the right
    /// degree never triggers this.
    pub fn vectorize<A: GradedAlgebra>(
        &self,
        algebra: &A,
        elem: &A::Elem,
    ) -> Result<Vec<Rational>, SolveError> {
        let mut coords = vec![Rational::default(); self.words.len()];
        for (word, coeff) in algebra.decompose(elem) {
            match self.positions.get(&word) {
                Some(&position) => coords[position] = coeff,
                None => {
                    return Err(SolveError::BasisInconsistency {
                        word,
                        degree: self.degree,
                    })
                }
            }
        }
        Ok(coords)
    }

    /// Coordinate matrix of `elems`, one row per list position.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::vectorize`] on the first escaping monomial.
    pub fn vectorize_all<A: GradedAlgebra>(
        &self,
        algebra: &A,
        elems: &[A::Elem],
    ) -> Result<DenseMatrix<Rational>, SolveError> {
        let mut matrix = DenseMatrix::zeros(elems.len(), self.words.len());
        for (row, elem) in elems.iter().enumerate() {
            for (col, value) in self.vectorize(algebra, elem)?.into_iter().enumerate() {
                matrix[(row, col)] = value;
            }
        }
        Ok(matrix)
    }
}
