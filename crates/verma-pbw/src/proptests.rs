//! Property-based tests for straightening multiplication.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::algebra::GradedAlgebra;
    use crate::context::PbwAlgebra;
    use crate::element::PbwElement;
    use crate::word::GenWord;

    // Words over the six generators of the nilradical of sl(4). Short
    // words keep the straightening blow-up small.
    fn arb_word() -> impl Strategy<Value = GenWord> {
        prop::collection::vec(0u16..6, 0..4).prop_map(|v| GenWord::from_indices(&v))
    }

    proptest! {
        #[test]
        fn straightening_yields_normal_form(word in arb_word()) {
            let alg = PbwAlgebra::special_linear(3);
            let elem = alg.word_element(&word);
            for (w, coeff) in elem.decompose() {
                prop_assert!(w.is_normal());
                prop_assert!(!coeff.is_zero());
            }
        }

        #[test]
        fn grading_is_additive(a in arb_word(), b in arb_word()) {
            let alg = PbwAlgebra::special_linear(3);
            let expected = alg.word_weight(&a).add(&alg.word_weight(&b));
            let prod = alg.product(
                &PbwElement::monomial(a),
                &PbwElement::monomial(b),
            );
            for (w, _) in prod.decompose() {
                prop_assert_eq!(alg.word_weight(&w), expected);
            }
        }

        #[test]
        fn product_is_associative(a in arb_word(), b in arb_word(), c in arb_word()) {
            let alg = PbwAlgebra::special_linear(3);
            let ea = alg.word_element(&a);
            let eb = alg.word_element(&b);
            let ec = alg.word_element(&c);
            let left = alg.product(&alg.product(&ea, &eb), &ec);
            let right = alg.product(&ea, &alg.product(&eb, &ec));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn product_distributes_over_sums(a in arb_word(), b in arb_word(), c in arb_word()) {
            let alg = PbwAlgebra::special_linear(3);
            let ea = alg.word_element(&a);
            let eb = alg.word_element(&b);
            let ec = alg.word_element(&c);
            let left = alg.product(&ea, &(&eb + &ec));
            let right = alg.product(&ea, &eb) + alg.product(&ea, &ec);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn empty_word_is_the_unit(a in arb_word()) {
            let alg = PbwAlgebra::special_linear(3);
            let ea = alg.word_element(&a);
            let one = PbwElement::monomial(GenWord::empty());
            prop_assert_eq!(alg.product(&one, &ea), ea.clone());
            prop_assert_eq!(alg.product(&ea, &one), ea);
        }
    }
}
