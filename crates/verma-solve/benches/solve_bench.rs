//! Benchmarks for connecting-map solving and its PBW plumbing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use verma_pbw::{GenWord, GradedAlgebra, Multidegree, PbwAlgebra};
use verma_solve::{multidegree_basis, BggGraph, Edge, MapSolver, SolverConfig, Square, Vertex};

/// Builds a chain of squares where level `k` becomes solvable only
/// after level `k - 1`, so solving runs one round per level.
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

fn bench_ladder_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_ladder");
    let alg = PbwAlgebra::special_linear(2);

    for levels in [4, 16, 64] {
        let (weights, edges, squares) = ladder_components(levels);
        let graph = BggGraph::new(weights, edges, squares);

        group.bench_with_input(BenchmarkId::new("levels", levels), &levels, |b, _| {
            b.iter(|| {
                let solver = MapSolver::new(&graph, &alg, SolverConfig::default());
                black_box(solver.solve().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_basis_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("multidegree_basis");
    let alg = PbwAlgebra::special_linear(3);

    for total in [2i16, 3, 4] {
        let degree = Multidegree::new(&[total, total, total]);

        group.bench_with_input(BenchmarkId::new("sl4", total), &total, |b, _| {
            b.iter(|| black_box(multidegree_basis(&alg, &degree)));
        });
    }

    group.finish();
}

fn bench_straightening(c: &mut Criterion) {
    let mut group = c.benchmark_group("straightening");
    let alg = PbwAlgebra::special_linear(3);

    // Fully reversed words maximise the number of rewrite steps.
    for len in [6usize, 12, 18] {
        let indices: Vec<u16> = (0..len).map(|i| 5 - (i as u16 % 6)).collect();
        let word = GenWord::from_indices(&indices);

        group.bench_with_input(BenchmarkId::new("reversed_word", len), &len, |b, _| {
            b.iter(|| black_box(alg.word_element(&word)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_ladder_solve,
    bench_basis_enumeration,
    bench_straightening
);

criterion_main!(benches);
