//! Multidegrees: integer weight vectors over the simple roots.
//!
//! A multidegree records how often each simple root occurs in a weight.
//! Vertex weights and generator weights are multidegrees; differences of
//! vertex weights can be transiently negative, so entries are signed.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum supported rank (number of simple roots).
pub const MAX_RANK: usize = 16;

/// A weight vector with up to [`MAX_RANK`] entries.
///
/// Entries are stored inline and the total degree is cached for cheap
/// comparisons and priority ordering.
#[derive(Clone, Copy)]
pub struct Multidegree {
    /// One entry per simple root.
    entries: [i16; MAX_RANK],
    /// Number of active entries.
    rank: u8,
    /// Cached sum of all entries.
    total: i32,
}

impl Multidegree {
    /// Creates a multidegree from the given entries.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_RANK`] entries are given.
    #[must_use]
    pub fn new(values: &[i16]) -> Self {
        assert!(values.len() <= MAX_RANK, "rank exceeds MAX_RANK");
        let mut entries = [0i16; MAX_RANK];
        entries[..values.len()].copy_from_slice(values);

        let total: i32 = entries.iter().map(|&e| i32::from(e)).sum();

        Self {
            entries,
            rank: values.len() as u8,
            total,
        }
    }

    /// Creates the zero multidegree of the given rank.
    #[must_use]
    pub fn zero(rank: usize) -> Self {
        Self {
            entries: [0i16; MAX_RANK],
            rank: rank.min(MAX_RANK) as u8,
            total: 0,
        }
    }

    /// Creates the coordinate multidegree with a single 1 at `index`.
    #[must_use]
    pub fn unit(rank: usize, index: usize) -> Self {
        let mut entries = [0i16; MAX_RANK];
        if index < MAX_RANK {
            entries[index] = 1;
        }
        Self {
            entries,
            rank: rank.min(MAX_RANK) as u8,
            total: 1,
        }
    }

    /// Returns the entry at `index`.
    #[must_use]
    pub fn entry(&self, index: usize) -> i16 {
        if index < MAX_RANK {
            self.entries[index]
        } else {
            0
        }
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn entries(&self) -> &[i16] {
        &self.entries[..self.rank as usize]
    }

    /// Returns the rank.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank as usize
    }

    /// Returns the total degree (sum of all entries).
    #[must_use]
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|&e| e == 0)
    }

    /// Returns true if every entry is non-negative.
    #[must_use]
    pub fn is_nonnegative(&self) -> bool {
        self.entries.iter().all(|&e| e >= 0)
    }

    /// Returns true if every entry is >= the corresponding entry of `other`.
    #[must_use]
    pub fn dominates(&self, other: &Self) -> bool {
        let n = self.rank.max(other.rank) as usize;
        (0..n).all(|i| self.entries[i] >= other.entries[i])
    }

    /// Componentwise sum.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let n = self.rank.max(other.rank) as usize;
        let mut entries = [0i16; MAX_RANK];
        for i in 0..n {
            entries[i] = self.entries[i] + other.entries[i];
        }
        Self {
            entries,
            rank: n as u8,
            total: self.total + other.total,
        }
    }

    /// Componentwise difference.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let n = self.rank.max(other.rank) as usize;
        let mut entries = [0i16; MAX_RANK];
        for i in 0..n {
            entries[i] = self.entries[i] - other.entries[i];
        }
        Self {
            entries,
            rank: n as u8,
            total: self.total - other.total,
        }
    }

    /// If exactly one entry is non-zero, returns its index and value.
    #[must_use]
    pub fn single_support(&self) -> Option<(usize, i16)> {
        let mut found = None;
        for (i, &e) in self.entries.iter().enumerate() {
            if e != 0 {
                if found.is_some() {
                    return None;
                }
                found = Some((i, e));
            }
        }
        found
    }
}

impl PartialEq for Multidegree {
    fn eq(&self, other: &Self) -> bool {
        if self.total != other.total {
            return false;
        }
        let n = self.rank.max(other.rank) as usize;
        self.entries[..n] == other.entries[..n]
    }
}

impl Eq for Multidegree {}

impl Hash for Multidegree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash must be consistent with PartialEq which compares up to
        // max(rank); entries beyond the last non-zero one never differ.
        self.total.hash(state);

        let mut last_nonzero = 0;
        for i in 0..MAX_RANK {
            if self.entries[i] != 0 {
                last_nonzero = i + 1;
            }
        }
        self.entries[..last_nonzero].hash(state);
    }
}

impl fmt::Debug for Multidegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deg{:?}", self.entries())
    }
}

impl Default for Multidegree {
    fn default() -> Self {
        Self::zero(0)
    }
}
