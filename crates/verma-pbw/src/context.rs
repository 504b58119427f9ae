//! Concrete PBW algebras driven by a structure-constant table.
//!
//! A [`PbwAlgebra`] is the universal enveloping algebra of a nilpotent
//! Lie algebra presented by weighted generators and the brackets of
//! generator pairs. Products are straightened into the PBW basis of
//! non-decreasing words by repeatedly rewriting adjacent inversions
//! `x_a x_b = x_b x_a + [x_a, x_b]` for `a > b`.

use num_traits::Zero;
use rustc_hash::FxHashMap;
use std::fmt;

use verma_rings::Rational;

use crate::algebra::GradedAlgebra;
use crate::element::PbwElement;
use crate::multidegree::{Multidegree, MAX_RANK};
use crate::word::GenWord;

/// A universal enveloping algebra with a fixed PBW generator order.
///
/// Generators are indexed by their position in the weight list; the PBW
/// basis consists of words with non-decreasing indices. The bracket
/// table stores `[x_i, x_j]` for `i > j` as a sum of single generators,
/// which keeps every straightening step degree-homogeneous.
#[derive(Clone, Debug)]
pub struct PbwAlgebra {
    rank: usize,
    weights: Vec<Multidegree>,
    names: Vec<String>,
    simple: Vec<Option<u16>>,
    /// Keyed by `(i, j)` with `i > j`; maps `[x_i, x_j]` to its terms.
    brackets: FxHashMap<(u16, u16), Vec<(u16, Rational)>>,
}

impl PbwAlgebra {
    /// Creates an algebra from generator weights and a bracket table.
    ///
    /// Brackets may be given with either index order; entries are
    /// normalized to `i > j` with the sign adjusted. Bracket terms must
    /// respect the grading: each term of `[x_i, x_j]` must be a
    /// generator of weight `weight(i) + weight(j)`.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is zero or exceeds [`MAX_RANK`], if a generator
    /// weight has the wrong rank, is not componentwise non-negative or
    /// has total degree zero, if a bracket pairs a generator with
    /// itself, refers to an out-of-range generator, violates the
    /// grading, or appears twice.
    #[must_use]
    pub fn new(
        rank: usize,
        generator_weights: Vec<Multidegree>,
        brackets: Vec<((u16, u16), Vec<(u16, Rational)>)>,
    ) -> Self {
        assert!(rank >= 1 && rank <= MAX_RANK, "unsupported rank");
        let num_gens = generator_weights.len();
        assert!(num_gens >= 1, "at least one generator is required");
        assert!(num_gens <= usize::from(u16::MAX), "too many generators");
        for weight in &generator_weights {
            assert!(weight.rank() == rank, "generator weight has wrong rank");
            assert!(
                weight.is_nonnegative() && weight.total() >= 1,
                "generator weights must be non-negative with positive total"
            );
        }

        let names = generator_weights.iter().map(weight_name).collect();
        let simple = (0..rank)
            .map(|root| {
                let unit = Multidegree::unit(rank, root);
                generator_weights
                    .iter()
                    .position(|w| *w == unit)
                    .map(|p| p as u16)
            })
            .collect();

        let mut table: FxHashMap<(u16, u16), Vec<(u16, Rational)>> = FxHashMap::default();
        for ((i, j), terms) in brackets {
            assert!(i != j, "bracket of a generator with itself");
            assert!(
                usize::from(i) < num_gens && usize::from(j) < num_gens,
                "bracket refers to an unknown generator"
            );
            let expected =
                generator_weights[usize::from(i)].add(&generator_weights[usize::from(j)]);
            let (key, flip) = if i > j { ((i, j), false) } else { ((j, i), true) };
            let stored: Vec<(u16, Rational)> = terms
                .into_iter()
                .filter(|(_, coeff)| !coeff.is_zero())
                .map(|(gen, coeff)| {
                    assert!(usize::from(gen) < num_gens, "bracket term out of range");
                    assert!(
                        generator_weights[usize::from(gen)] == expected,
                        "bracket term violates the grading"
                    );
                    (gen, if flip { -coeff } else { coeff })
                })
                .collect();
            if stored.is_empty() {
                continue;
            }
            assert!(
                table.insert(key, stored).is_none(),
                "duplicate bracket entry"
            );
        }

        Self {
            rank,
            weights: generator_weights,
            names,
            simple,
            brackets: table,
        }
    }

    /// The negative nilpotent part of `sl(rank + 1)`.
    ///
    /// Generators are the negative root vectors, one per interval
    /// `[a, b]` of simple roots, ordered by interval length and then by
    /// start. The weight of `f_[a, b]` is the indicator vector of the
    /// interval, and the brackets follow the matrix realization
    /// `f_[a, b] = E_{b + 1, a}`:
    /// `[f_[a, b], f_[c, d]]` is `f_[c, b]` when `a = d + 1`,
    /// `-f_[a, d]` when `c = b + 1`, and zero otherwise.
    #[must_use]
    pub fn special_linear(rank: usize) -> Self {
        assert!(rank >= 1 && rank <= MAX_RANK, "unsupported rank");

        let mut intervals = Vec::new();
        for len in 1..=rank {
            for start in 1..=(rank - len + 1) {
                intervals.push((start, start + len - 1));
            }
        }
        let index: FxHashMap<(usize, usize), u16> = intervals
            .iter()
            .enumerate()
            .map(|(i, &iv)| (iv, i as u16))
            .collect();

        let weights = intervals
            .iter()
            .map(|&(a, b)| {
                let mut entries = vec![0i16; rank];
                for root in a..=b {
                    entries[root - 1] = 1;
                }
                Multidegree::new(&entries)
            })
            .collect();

        let mut brackets = Vec::new();
        for (p, &(a, b)) in intervals.iter().enumerate() {
            for (q, &(c, d)) in intervals.iter().enumerate().take(p) {
                let mut terms = Vec::new();
                if a == d + 1 {
                    terms.push((index[&(c, b)], Rational::from(1)));
                }
                if c == b + 1 {
                    terms.push((index[&(a, d)], Rational::from(-1)));
                }
                if !terms.is_empty() {
                    brackets.push(((p as u16, q as u16), terms));
                }
            }
        }

        Self::new(rank, weights, brackets)
    }

    /// The display name of a generator.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn generator_name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// The generator `x_index` as an element.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn generator(&self, index: usize) -> PbwElement {
        assert!(index < self.weights.len(), "generator index out of range");
        PbwElement::monomial(GenWord::single(index as u16))
    }

    /// The bracket `[x_i, x_j]` as an element.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn bracket(&self, i: usize, j: usize) -> PbwElement {
        assert!(
            i < self.weights.len() && j < self.weights.len(),
            "generator index out of range"
        );
        if i == j {
            return PbwElement::zero();
        }
        let (key, negate) = if i > j {
            ((i as u16, j as u16), false)
        } else {
            ((j as u16, i as u16), true)
        };
        let mut out = PbwElement::zero();
        if let Some(terms) = self.brackets.get(&key) {
            for (gen, coeff) in terms {
                let coeff = if negate { -coeff } else { coeff.clone() };
                out.add_term(GenWord::single(*gen), coeff);
            }
        }
        out
    }

    /// The weight of a word (sum of its generator weights).
    ///
    /// # Panics
    ///
    /// Panics if the word refers to an out-of-range generator.
    #[must_use]
    pub fn word_weight(&self, word: &GenWord) -> Multidegree {
        let mut out = Multidegree::zero(self.rank);
        for &gen in word.indices() {
            out = out.add(&self.weights[usize::from(gen)]);
        }
        out
    }

    /// Wraps an element for display with this algebra's generator names.
    #[must_use]
    pub fn display<'a>(&'a self, elem: &'a PbwElement) -> ElementDisplay<'a> {
        ElementDisplay {
            algebra: self,
            elem,
        }
    }

    /// Straightens `coeff * word` into `acc`.
    ///
    /// Each rewrite either swaps away the first adjacent inversion
    /// (leaving the length unchanged and the inversion count lower) or
    /// contracts two letters into one, so the worklist always drains.
    fn mul_word_into(&self, word: GenWord, coeff: Rational, acc: &mut PbwElement) {
        let mut stack = vec![(word, coeff)];
        while let Some((word, coeff)) = stack.pop() {
            match word.first_inversion() {
                None => acc.add_term(word, coeff),
                Some(pos) => {
                    let hi = word.indices()[pos];
                    let lo = word.indices()[pos + 1];
                    stack.push((word.swapped(pos), coeff.clone()));
                    if let Some(terms) = self.brackets.get(&(hi, lo)) {
                        for (gen, c) in terms {
                            stack.push((word.contracted(pos, *gen), coeff.clone() * c));
                        }
                    }
                }
            }
        }
    }
}

impl GradedAlgebra for PbwAlgebra {
    type Elem = PbwElement;

    fn rank(&self) -> usize {
        self.rank
    }

    fn num_generators(&self) -> usize {
        self.weights.len()
    }

    fn generator_weight(&self, index: usize) -> &Multidegree {
        &self.weights[index]
    }

    fn simple_generator(&self, root: usize) -> Option<usize> {
        self.simple[root].map(usize::from)
    }

    fn generator_power(&self, index: usize, exp: u32) -> PbwElement {
        assert!(index < self.weights.len(), "generator index out of range");
        PbwElement::monomial(GenWord::repeated(index as u16, exp as usize))
    }

    fn word_element(&self, word: &GenWord) -> PbwElement {
        let mut out = PbwElement::zero();
        self.mul_word_into(word.clone(), Rational::from(1), &mut out);
        out
    }

    fn product(&self, lhs: &PbwElement, rhs: &PbwElement) -> PbwElement {
        let mut out = PbwElement::zero();
        for (lhs_word, lhs_coeff) in lhs.terms() {
            for (rhs_word, rhs_coeff) in rhs.terms() {
                self.mul_word_into(
                    lhs_word.concat(rhs_word),
                    lhs_coeff.clone() * rhs_coeff,
                    &mut out,
                );
            }
        }
        out
    }

    fn decompose(&self, elem: &PbwElement) -> Vec<(GenWord, Rational)> {
        elem.decompose()
    }

    fn from_terms(&self, terms: Vec<(GenWord, Rational)>) -> PbwElement {
        let mut out = PbwElement::zero();
        for (word, coeff) in terms {
            self.mul_word_into(word, coeff, &mut out);
        }
        out
    }
}

/// Displays an element with an algebra's generator names.
///
/// Returned by [`PbwAlgebra::display`].
pub struct ElementDisplay<'a> {
    algebra: &'a PbwAlgebra,
    elem: &'a PbwElement,
}

impl fmt::Display for ElementDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.elem
            .fmt_with(f, &|gen| self.algebra.names[usize::from(gen)].clone())
    }
}

/// Builds the conventional `f`-name of a generator from its weight:
/// each simple root index appears as often as its multiplicity.
fn weight_name(weight: &Multidegree) -> String {
    use std::fmt::Write as _;

    let mut out = String::from("f");
    for (i, &mult) in weight.entries().iter().enumerate() {
        for _ in 0..mult {
            let _ = write!(out, "{}", i + 1);
        }
    }
    out
}
