//! Elements of the enveloping algebra in PBW normal form.
//!
//! An element is a finite rational linear combination of normal-form
//! words. The term map never stores zero coefficients, so structural
//! equality of elements is semantic equality.

use num_traits::{One, Zero};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use verma_rings::Rational;

use crate::word::GenWord;

/// A rational linear combination of PBW monomials.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PbwElement {
    terms: FxHashMap<GenWord, Rational>,
}

impl PbwElement {
    /// The zero element.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: FxHashMap::default(),
        }
    }

    /// A single monomial with coefficient 1.
    #[must_use]
    pub fn monomial(word: GenWord) -> Self {
        Self::term(word, Rational::from(1))
    }

    /// A single term. Zero coefficients yield the zero element.
    #[must_use]
    pub fn term(word: GenWord, coeff: Rational) -> Self {
        let mut out = Self::zero();
        out.add_term(word, coeff);
        out
    }

    /// Returns true if this is the zero element.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of monomials with non-zero coefficient.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Returns the coefficient of `word` (zero if absent).
    #[must_use]
    pub fn coefficient(&self, word: &GenWord) -> Rational {
        self.terms.get(word).cloned().unwrap_or_default()
    }

    /// Adds `coeff * word` to this element, removing the term if the
    /// accumulated coefficient vanishes.
    pub fn add_term(&mut self, word: GenWord, coeff: Rational) {
        if coeff.is_zero() {
            return;
        }
        match self.terms.entry(word) {
            Entry::Occupied(mut e) => {
                let updated = e.get().clone() + coeff;
                if updated.is_zero() {
                    e.remove();
                } else {
                    *e.get_mut() = updated;
                }
            }
            Entry::Vacant(e) => {
                e.insert(coeff);
            }
        }
    }

    /// Iterates over the terms in arbitrary order.
    pub fn terms(&self) -> impl Iterator<Item = (&GenWord, &Rational)> {
        self.terms.iter()
    }

    /// Returns the terms sorted by word, for deterministic downstream use.
    #[must_use]
    pub fn decompose(&self) -> Vec<(GenWord, Rational)> {
        let mut out: Vec<(GenWord, Rational)> = self
            .terms
            .iter()
            .map(|(w, c)| (w.clone(), c.clone()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    /// Returns this element scaled by a rational.
    #[must_use]
    pub fn scaled(&self, coeff: &Rational) -> Self {
        if coeff.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(w, c)| (w.clone(), c.clone() * coeff))
                .collect(),
        }
    }

    /// Writes the element with generators rendered through `name`.
    ///
    /// Terms are joined with `+`/`-`, coefficients of magnitude 1 are
    /// suppressed, and the zero element renders as `0`.
    pub(crate) fn fmt_with<F>(&self, f: &mut fmt::Formatter<'_>, name: &F) -> fmt::Result
    where
        F: Fn(u16) -> String,
    {
        let terms = self.decompose();
        if terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (word, coeff)) in terms.iter().enumerate() {
            if coeff.is_negative() {
                write!(f, "-")?;
            } else if i > 0 {
                write!(f, "+")?;
            }
            let magnitude = coeff.abs();
            if !magnitude.is_one() {
                write!(f, "{magnitude}*")?;
            }
            write!(f, "{}", word.format_with(name))?;
        }
        Ok(())
    }
}

impl Add for PbwElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self;
        for (word, coeff) in rhs.terms {
            out.add_term(word, coeff);
        }
        out
    }
}

impl Add for &PbwElement {
    type Output = PbwElement;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        for (word, coeff) in &rhs.terms {
            out.add_term(word.clone(), coeff.clone());
        }
        out
    }
}

impl Sub for PbwElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self;
        for (word, coeff) in rhs.terms {
            out.add_term(word, -coeff);
        }
        out
    }
}

impl Sub for &PbwElement {
    type Output = PbwElement;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        for (word, coeff) in &rhs.terms {
            out.add_term(word.clone(), -coeff);
        }
        out
    }
}

impl Neg for PbwElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            terms: self.terms.into_iter().map(|(w, c)| (w, -c)).collect(),
        }
    }
}

impl Neg for &PbwElement {
    type Output = PbwElement;

    fn neg(self) -> Self::Output {
        PbwElement {
            terms: self.terms.iter().map(|(w, c)| (w.clone(), -c)).collect(),
        }
    }
}

impl fmt::Display for PbwElement {
    /// Renders generators positionally as `x0`, `x1`, ... For named
    /// output use [`PbwAlgebra::display`](crate::PbwAlgebra::display).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &|g| format!("x{g}"))
    }
}

impl fmt::Debug for PbwElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PbwElement({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(indices: &[u16]) -> GenWord {
        GenWord::from_indices(indices)
    }

    #[test]
    fn test_zero_pruning() {
        let mut e = PbwElement::zero();
        e.add_term(w(&[0]), Rational::from(2));
        e.add_term(w(&[0]), Rational::from(-2));
        assert!(e.is_zero());
        assert_eq!(e, PbwElement::zero());

        e.add_term(w(&[1]), Rational::from(0));
        assert!(e.is_zero());
    }

    #[test]
    fn test_accumulation() {
        let mut e = PbwElement::zero();
        e.add_term(w(&[0, 1]), Rational::from_i64(1, 2));
        e.add_term(w(&[0, 1]), Rational::from_i64(1, 3));
        assert_eq!(e.coefficient(&w(&[0, 1])), Rational::from_i64(5, 6));
        assert_eq!(e.num_terms(), 1);
    }

    #[test]
    fn test_add_sub_neg() {
        let a = PbwElement::term(w(&[0]), Rational::from(2));
        let b = PbwElement::term(w(&[1]), Rational::from(3));
        let sum = &a + &b;
        assert_eq!(sum.coefficient(&w(&[0])), Rational::from(2));
        assert_eq!(sum.coefficient(&w(&[1])), Rational::from(3));

        let diff = sum.clone() - a.clone();
        assert_eq!(diff, b);
        assert_eq!(a.clone() + (-a.clone()), PbwElement::zero());
    }

    #[test]
    fn test_decompose_sorted() {
        let mut e = PbwElement::zero();
        e.add_term(w(&[2]), Rational::from(1));
        e.add_term(w(&[0, 1]), Rational::from(1));
        e.add_term(w(&[0]), Rational::from(1));
        let words: Vec<GenWord> = e.decompose().into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec![w(&[0]), w(&[0, 1]), w(&[2])]);
    }

    #[test]
    fn test_display() {
        assert_eq!(PbwElement::zero().to_string(), "0");

        let mut e = PbwElement::zero();
        e.add_term(w(&[0, 0, 1]), Rational::from(1));
        e.add_term(w(&[2]), Rational::from(-2));
        assert_eq!(e.to_string(), "x0^2*x1-2*x2");

        let f = PbwElement::term(w(&[1]), Rational::from(-1));
        assert_eq!(f.to_string(), "-x1");

        let g = PbwElement::term(GenWord::empty(), Rational::from_i64(1, 2));
        assert_eq!(g.to_string(), "1/2*1");
    }

    #[test]
    fn test_scaled() {
        let e = PbwElement::term(w(&[0]), Rational::from(3));
        assert_eq!(
            e.scaled(&Rational::from_i64(1, 3)).coefficient(&w(&[0])),
            Rational::from(1)
        );
        assert!(e.scaled(&Rational::from(0)).is_zero());
    }
}
