//! Turning a one-unknown square into an exact linear system.

use verma_linalg::SolveOutcome;
use verma_pbw::GradedAlgebra;

use crate::basis::multidegree_basis;
use crate::error::{SolveError, SystemDefect};
use crate::problem::{Problem, Side};
use crate::vectorize::TargetBasis;

/// Solves a division problem by exact rational linear algebra.
///
/// The unknown map is a combination of the basis words of its edge
/// degree. Multiplying each candidate word by the known factor and
/// vectorizing in the diagonal-degree basis gives one column of the
/// system; the right-hand side is the composition along the known
/// path. Only an exactly determined system is accepted.
///
/// # Errors
///
/// Returns [`SolveError::UnsolvableSystem`] when the system is
/// inconsistent or admits more than one solution, and
/// [`SolveError::BasisInconsistency`] when a product has a monomial
/// outside the diagonal-degree basis.
pub fn solve_problem<A: GradedAlgebra>(
    algebra: &A,
    problem: &Problem<A::Elem>,
) -> Result<A::Elem, SolveError> {
    let candidates = multidegree_basis(algebra, &problem.degree);
    let target = TargetBasis::new(algebra, &problem.rhs_degree);

    let images: Vec<A::Elem> = candidates
        .iter()
        .map(|word| {
            let candidate = algebra.word_element(word);
            match problem.side {
                Side::Left => algebra.product(&problem.known, &candidate),
                Side::Right => algebra.product(&candidate, &problem.known),
            }
        })
        .collect();

    // Candidate images are the rows of the coordinate matrix, so the
    // system solves against its transpose.
    let system = target.vectorize_all(algebra, &images)?.transpose();
    let rhs = target.vectorize(algebra, &problem.rhs)?;

    match system.solve_unique(&rhs) {
        SolveOutcome::Unique(solution) => {
            Ok(algebra.from_terms(candidates.into_iter().zip(solution).collect()))
        }
        SolveOutcome::Inconsistent => Err(SolveError::UnsolvableSystem {
            edge: problem.edge,
            degree: problem.degree,
            defect: SystemDefect::Inconsistent,
        }),
        SolveOutcome::Underdetermined { .. } => Err(SolveError::UnsolvableSystem {
            edge: problem.edge,
            degree: problem.degree,
            defect: SystemDefect::Underdetermined,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verma_pbw::{GenWord, Multidegree, PbwAlgebra, PbwElement};
    use verma_rings::Rational;

    use crate::graph::{Edge, Vertex};

    fn deg(entries: &[i16]) -> Multidegree {
        Multidegree::new(entries)
    }

    fn mono(indices: &[u16]) -> PbwElement {
        PbwElement::monomial(GenWord::from_indices(indices))
    }

    fn problem(
        degree: Multidegree,
        rhs_degree: Multidegree,
        side: Side,
        known: PbwElement,
        rhs: PbwElement,
    ) -> Problem<PbwElement> {
        Problem {
            edge: Edge::new(Vertex(0), Vertex(1)),
            degree,
            rhs_degree,
            side,
            known,
            rhs,
        }
    }

    #[test]
    fn test_left_division() {
        let alg = PbwAlgebra::special_linear(2);
        // f1 * u = f2 * f1^2 determines u = f1*f2 + 2*f12.
        let rhs = alg.product(&mono(&[1]), &mono(&[0, 0]));
        let p = problem(deg(&[1, 1]), deg(&[2, 1]), Side::Left, mono(&[0]), rhs);
        let u = solve_problem(&alg, &p).unwrap();

        let mut expected = mono(&[0, 1]);
        expected.add_term(GenWord::from_indices(&[2]), Rational::from(2));
        assert_eq!(u, expected);
    }

    #[test]
    fn test_right_division() {
        let alg = PbwAlgebra::special_linear(2);
        // u * f2 = f2^2 * f1 determines u = f1*f2 + 2*f12.
        let rhs = alg.product(&mono(&[1, 1]), &mono(&[0]));
        let p = problem(deg(&[1, 1]), deg(&[1, 2]), Side::Right, mono(&[1]), rhs);
        let u = solve_problem(&alg, &p).unwrap();

        let mut expected = mono(&[0, 1]);
        expected.add_term(GenWord::from_indices(&[2]), Rational::from(2));
        assert_eq!(u, expected);
    }

    #[test]
    fn test_inconsistent_system() {
        let alg = PbwAlgebra::special_linear(2);
        // f12 * u with u of degree (1, 0) only reaches f1*f12, so
        // f1^2*f2 is out of range.
        let p = problem(
            deg(&[1, 0]),
            deg(&[2, 1]),
            Side::Left,
            mono(&[2]),
            mono(&[0, 0, 1]),
        );
        let err = solve_problem(&alg, &p).unwrap_err();
        assert!(matches!(
            err,
            SolveError::UnsolvableSystem {
                defect: SystemDefect::Inconsistent,
                ..
            }
        ));
    }

    #[test]
    fn test_underdetermined_system() {
        let alg = PbwAlgebra::special_linear(2);
        // A zero known factor constrains nothing.
        let p = problem(
            deg(&[1, 1]),
            deg(&[2, 2]),
            Side::Left,
            PbwElement::zero(),
            PbwElement::zero(),
        );
        let err = solve_problem(&alg, &p).unwrap_err();
        assert!(matches!(
            err,
            SolveError::UnsolvableSystem {
                defect: SystemDefect::Underdetermined,
                ..
            }
        ));
    }

    #[test]
    fn test_escaping_product_is_reported() {
        let alg = PbwAlgebra::special_linear(2);
        // f2 * f1 = f1*f2 + f12 does not live in the degree-(2, 0)
        // basis at all.
        let p = problem(
            deg(&[1, 0]),
            deg(&[2, 0]),
            Side::Left,
            mono(&[1]),
            mono(&[0, 0]),
        );
        let err = solve_problem(&alg, &p).unwrap_err();
        assert!(matches!(err, SolveError::BasisInconsistency { .. }));
    }
}
