//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::traits::{Field, Ring};
    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Integer::new(a);
            let neg_a = -a.clone();
            prop_assert!(Zero::is_zero(&(a + neg_a)));
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_mul_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            use num_traits::One;
            let a = Rational::from_i64(num, den);
            let inv = a.recip();
            prop_assert!(One::is_one(&(a * inv)));
        }

        #[test]
        fn rational_sign_normalization(num in small_int(), den in non_zero_int()) {
            // The denominator is always stored positive.
            let a = Rational::from_i64(num, den);
            prop_assert!(!a.denominator().is_negative());
            prop_assert_eq!(a.clone(), Rational::from_i64(-num, -den));
        }

        // Trait-level laws used by the linear algebra

        #[test]
        fn field_div_roundtrip(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in non_zero_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(a.clone().field_div(&b) * b, a);
        }

        #[test]
        fn ring_pow_matches_repeated_mul(num in non_zero_int(), exp in 0u32..8) {
            let a = Rational::from_i64(num, 1);
            let mut expected = <Rational as Ring>::one();
            for _ in 0..exp {
                expected = expected * a.clone();
            }
            prop_assert_eq!(Ring::pow(&a, exp), expected);
        }
    }
}
