//! Algebraic structure traits.
//!
//! This module defines the traits the linear algebra and the solver are
//! generic over, together with their implementations for the scalar types
//! of this crate.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use crate::{Integer, Rational};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}

impl Ring for Integer {
    fn zero() -> Self {
        <Integer as num_traits::Zero>::zero()
    }

    fn one() -> Self {
        <Integer as num_traits::One>::one()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }
}

impl Ring for Rational {
    fn zero() -> Self {
        <Rational as num_traits::Zero>::zero()
    }

    fn one() -> Self {
        <Rational as num_traits::One>::one()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }
}

impl Field for Rational {
    fn inv(&self) -> Option<Self> {
        if num_traits::Zero::is_zero(self) {
            None
        } else {
            Some(self.recip())
        }
    }
}
