//! Ordered words in the algebra generators.
//!
//! A word is a finite sequence of generator indices. A word in
//! non-decreasing index order is a PBW basis monomial; the straightening
//! multiplication rewrites arbitrary words into sums of such monomials.

use smallvec::SmallVec;
use std::fmt;
use std::fmt::Write as _;

/// A word in the generators, stored as a sequence of generator indices.
///
/// Words of up to 8 letters are stored inline; commuting-square maps
/// rarely exceed that.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GenWord(SmallVec<[u16; 8]>);

impl GenWord {
    /// The empty word (the algebra unit).
    #[must_use]
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// Creates a word from a slice of generator indices.
    #[must_use]
    pub fn from_indices(indices: &[u16]) -> Self {
        Self(SmallVec::from_slice(indices))
    }

    /// The one-letter word for a single generator.
    #[must_use]
    pub fn single(index: u16) -> Self {
        Self(SmallVec::from_slice(&[index]))
    }

    /// The word repeating one generator `count` times.
    #[must_use]
    pub fn repeated(index: u16, count: usize) -> Self {
        Self(std::iter::repeat(index).take(count).collect())
    }

    /// Returns a copy of this word with `index` appended.
    #[must_use]
    pub fn appended(&self, index: u16) -> Self {
        let mut out = self.0.clone();
        out.push(index);
        Self(out)
    }

    /// Concatenates two words.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = self.0.clone();
        out.extend_from_slice(&other.0);
        Self(out)
    }

    /// Returns the generator indices.
    #[must_use]
    pub fn indices(&self) -> &[u16] {
        &self.0
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty word.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the indices are non-decreasing (PBW normal form).
    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    /// Returns the position of the first adjacent out-of-order pair, if any.
    #[must_use]
    pub fn first_inversion(&self) -> Option<usize> {
        self.0.windows(2).position(|w| w[0] > w[1])
    }

    /// Returns a copy with the letters at `pos` and `pos + 1` swapped.
    ///
    /// # Panics
    ///
    /// Panics if `pos + 1` is out of range.
    #[must_use]
    pub fn swapped(&self, pos: usize) -> Self {
        let mut out = self.0.clone();
        out.swap(pos, pos + 1);
        Self(out)
    }

    /// Returns a copy with the two letters at `pos`, `pos + 1` replaced by
    /// the single letter `index`.
    ///
    /// # Panics
    ///
    /// Panics if `pos + 1` is out of range.
    #[must_use]
    pub fn contracted(&self, pos: usize, index: u16) -> Self {
        let mut out = SmallVec::with_capacity(self.0.len() - 1);
        out.extend_from_slice(&self.0[..pos]);
        out.push(index);
        out.extend_from_slice(&self.0[pos + 2..]);
        Self(out)
    }

    /// Formats the word as a monomial, naming each generator with `name`.
    ///
    /// Adjacent repetitions are grouped into powers; the empty word
    /// renders as `1`.
    #[must_use]
    pub fn format_with<F: Fn(u16) -> String>(&self, name: F) -> String {
        if self.0.is_empty() {
            return "1".to_string();
        }
        let mut out = String::new();
        let mut i = 0;
        while i < self.0.len() {
            let gen = self.0[i];
            let mut count = 1;
            while i + count < self.0.len() && self.0[i + count] == gen {
                count += 1;
            }
            if !out.is_empty() {
                out.push('*');
            }
            if count == 1 {
                let _ = write!(out, "{}", name(gen));
            } else {
                let _ = write!(out, "{}^{}", name(gen), count);
            }
            i += count;
        }
        out
    }
}

impl fmt::Debug for GenWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.format_with(|i| format!("x{i}")))
    }
}
