//! Solves the connecting maps of the BGG resolution for sl(3).
//!
//! The resolution has six terms indexed by the Weyl group of A2. Six
//! edge maps drop along a single simple root and are seeded directly;
//! the two maps into the middle terms are determined by the squares.
//!
//! Run with: cargo run --example a2_maps

use verma::prelude::*;

fn deg(entries: &[i16]) -> Multidegree {
    Multidegree::new(entries)
}

fn edge(source: u32, target: u32) -> Edge {
    Edge::new(Vertex(source), Vertex(target))
}

fn main() {
    // Vertices by Weyl word: e, s1, s2, s1 s2, s2 s1, w0.
    let labels = ["e", "s1", "s2", "s1 s2", "s2 s1", "w0"];
    let weights = vec![
        deg(&[0, 0]),
        deg(&[1, 0]),
        deg(&[0, 1]),
        deg(&[2, 1]),
        deg(&[1, 2]),
        deg(&[2, 2]),
    ];
    let edges = vec![
        edge(5, 3),
        edge(5, 4),
        edge(3, 1),
        edge(3, 2),
        edge(4, 1),
        edge(4, 2),
        edge(1, 0),
        edge(2, 0),
    ];
    let squares = vec![
        Square::new(Vertex(3), Vertex(1), Vertex(2), Vertex(0)),
        Square::new(Vertex(4), Vertex(1), Vertex(2), Vertex(0)),
        Square::new(Vertex(5), Vertex(3), Vertex(4), Vertex(1)),
        Square::new(Vertex(5), Vertex(3), Vertex(4), Vertex(2)),
    ];
    let graph = BggGraph::new(weights, edges, squares);
    let algebra = PbwAlgebra::special_linear(2);

    let solver = MapSolver::new(&graph, &algebra, SolverConfig::default());
    println!(
        "A2 resolution: {} edges, {} seeded, {} to solve\n",
        graph.edges().len(),
        solver.num_trivial_maps(),
        solver.num_nontrivial_maps()
    );

    let maps = solver.solve().expect("the A2 resolution solves");

    for e in graph.edges() {
        println!(
            "{:>5} -> {:<5}  {}",
            labels[e.source.0 as usize],
            labels[e.target.0 as usize],
            algebra.display(&maps[e])
        );
    }

    assert!(check_maps(&graph, &algebra, &maps));
    println!("\nAll {} squares commute.", graph.squares().len());
}
