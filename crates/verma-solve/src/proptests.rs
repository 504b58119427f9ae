//! Property-based tests for solver determinism.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use verma_pbw::{GenWord, Multidegree, PbwAlgebra, PbwElement};
    use verma_rings::Rational;

    use crate::config::SolverConfig;
    use crate::graph::{BggGraph, Edge, Square, Vertex};
    use crate::solver::{check_maps, MapSolver};
    use crate::tests::a2_components;

    /// A chain of squares in which level `k` becomes solvable only
    /// after level `k - 1`, forcing one solver round per level.
    fn ladder_components(levels: usize) -> (Vec<Multidegree>, Vec<Edge>, Vec<Square>) {
        let deg = |a: i16, b: i16| Multidegree::new(&[a, b]);
        let mut weights = vec![deg(0, 0), deg(1, 1), deg(2, 1), deg(2, 0)];
        let mut edges = vec![
            Edge::new(Vertex(2), Vertex(1)),
            Edge::new(Vertex(2), Vertex(3)),
            Edge::new(Vertex(1), Vertex(0)),
            Edge::new(Vertex(3), Vertex(0)),
        ];
        let mut squares = vec![Square::new(Vertex(2), Vertex(1), Vertex(3), Vertex(0))];
        // The two most recent chain vertices, oldest first.
        let mut previous = [Vertex(0), Vertex(1)];
        for k in 2..=levels {
            let k = i16::try_from(k).unwrap();
            weights.push(deg(k, k));
            let top = Vertex(u32::try_from(weights.len() - 1).unwrap());
            let side = if k == 2 {
                Vertex(3)
            } else {
                weights.push(deg(k, k - 2));
                Vertex(u32::try_from(weights.len() - 1).unwrap())
            };
            edges.push(Edge::new(top, previous[1]));
            edges.push(Edge::new(top, side));
            if k > 2 {
                edges.push(Edge::new(side, previous[0]));
            }
            squares.push(Square::new(top, previous[1], side, previous[0]));
            previous = [previous[1], top];
        }
        (weights, edges, squares)
    }

    proptest! {
        #[test]
        fn solved_maps_do_not_depend_on_input_order(seed in any::<u64>()) {
            let alg = PbwAlgebra::special_linear(2);
            let (weights, edges, squares) = a2_components();
            let reference = BggGraph::new(weights.clone(), edges.clone(), squares.clone());
            let baseline = MapSolver::new(&reference, &alg, SolverConfig::default())
                .solve()
                .unwrap();

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut edges = edges;
            let mut squares = squares;
            edges.shuffle(&mut rng);
            squares.shuffle(&mut rng);
            let shuffled = BggGraph::new(weights, edges, squares);
            let maps = MapSolver::new(&shuffled, &alg, SolverConfig::default())
                .solve()
                .unwrap();

            prop_assert_eq!(baseline, maps);
        }

        #[test]
        fn shuffled_ladders_solve_level_by_level(levels in 1usize..6, seed in any::<u64>()) {
            let alg = PbwAlgebra::special_linear(2);
            let (weights, mut edges, mut squares) = ladder_components(levels);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            edges.shuffle(&mut rng);
            squares.shuffle(&mut rng);
            let graph = BggGraph::new(weights, edges, squares);

            let maps = MapSolver::new(&graph, &alg, SolverConfig::default())
                .solve()
                .unwrap();
            prop_assert!(check_maps(&graph, &alg, &maps));

            // The chain maps alternate between f1*f2 - f12 on odd levels
            // and f1*f2 on even ones.
            let chain_degree = Multidegree::new(&[1, 1]);
            for edge in graph.edges() {
                if graph.edge_degree(edge) != chain_degree {
                    continue;
                }
                let mut expected = PbwElement::monomial(GenWord::from_indices(&[0, 1]));
                if graph.weight(edge.source).entry(0) % 2 == 1 {
                    expected.add_term(GenWord::from_indices(&[2]), Rational::from(-1));
                }
                prop_assert_eq!(&maps[edge], &expected);
            }
        }
    }
}
