//! Weighted directed graphs with distinguished commuting squares.
//!
//! A vertex carries a weight vector; an edge points from higher to
//! lower weight. Squares name pairs of length-two paths with common
//! endpoints whose edge maps are required to compose equally.

use rustc_hash::FxHashSet;

use verma_pbw::Multidegree;

/// A vertex handle into a [`BggGraph`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Vertex(pub u32);

/// A directed edge from a higher-weight vertex to a lower-weight one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Edge {
    /// Source vertex.
    pub source: Vertex,
    /// Target vertex.
    pub target: Vertex,
}

impl Edge {
    /// Creates an edge.
    #[must_use]
    pub fn new(source: Vertex, target: Vertex) -> Self {
        Self { source, target }
    }
}

/// A square of edges: two length-two paths from `start` to `end`.
///
/// The top path is `start -> top_mid -> end`, the bottom path is
/// `start -> bottom_mid -> end`. An edge-map assignment commutes on the
/// square when composing along the two paths agrees, with composition
/// written as a right-to-left product:
/// `map(top_right) * map(top_left) == map(bottom_right) * map(bottom_left)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Square {
    /// Common source of both paths.
    pub start: Vertex,
    /// Middle vertex of the top path.
    pub top_mid: Vertex,
    /// Middle vertex of the bottom path.
    pub bottom_mid: Vertex,
    /// Common target of both paths.
    pub end: Vertex,
}

impl Square {
    /// Creates a square from its four vertices.
    #[must_use]
    pub fn new(start: Vertex, top_mid: Vertex, bottom_mid: Vertex, end: Vertex) -> Self {
        Self {
            start,
            top_mid,
            bottom_mid,
            end,
        }
    }

    /// First edge of the top path.
    #[must_use]
    pub fn top_left(&self) -> Edge {
        Edge::new(self.start, self.top_mid)
    }

    /// Second edge of the top path.
    #[must_use]
    pub fn top_right(&self) -> Edge {
        Edge::new(self.top_mid, self.end)
    }

    /// First edge of the bottom path.
    #[must_use]
    pub fn bottom_left(&self) -> Edge {
        Edge::new(self.start, self.bottom_mid)
    }

    /// Second edge of the bottom path.
    #[must_use]
    pub fn bottom_right(&self) -> Edge {
        Edge::new(self.bottom_mid, self.end)
    }

    /// The four edges, top path first.
    #[must_use]
    pub fn edges(&self) -> [Edge; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_left(),
            self.bottom_right(),
        ]
    }
}

/// A finite weighted graph together with its commuting squares.
///
/// Vertices are indexed by position in the weight list. The edge and
/// square lists keep their construction order; discovery and solving
/// iterate them in that order.
#[derive(Clone, Debug)]
pub struct BggGraph {
    weights: Vec<Multidegree>,
    edges: Vec<Edge>,
    edge_set: FxHashSet<Edge>,
    squares: Vec<Square>,
    rank: usize,
}

impl BggGraph {
    /// Creates a graph and validates it.
    ///
    /// # Panics
    ///
    /// Panics if the weight list is empty or mixes ranks, if an edge
    /// repeats, loops, points at an unknown vertex or does not strictly
    /// decrease the weight (componentwise non-negative difference with
    /// positive total), or if a square uses an edge that is not in the
    /// edge list.
    #[must_use]
    pub fn new(weights: Vec<Multidegree>, edges: Vec<Edge>, squares: Vec<Square>) -> Self {
        assert!(!weights.is_empty(), "graph needs at least one vertex");
        let rank = weights[0].rank();
        for weight in &weights {
            assert!(weight.rank() == rank, "vertex weights must share a rank");
        }

        let num_vertices = weights.len();
        let mut edge_set = FxHashSet::default();
        for edge in &edges {
            let (s, t) = (edge.source.0 as usize, edge.target.0 as usize);
            assert!(s < num_vertices && t < num_vertices, "edge vertex out of range");
            assert!(edge.source != edge.target, "self-loops are not allowed");
            let diff = weights[s].sub(&weights[t]);
            assert!(
                diff.is_nonnegative() && diff.total() >= 1,
                "edges must strictly decrease the weight"
            );
            assert!(edge_set.insert(*edge), "duplicate edge");
        }

        for square in &squares {
            for edge in square.edges() {
                assert!(edge_set.contains(&edge), "square edge missing from edge list");
            }
        }

        Self {
            weights,
            edges,
            edge_set,
            squares,
            rank,
        }
    }

    /// Rank of the vertex weights.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.weights.len()
    }

    /// The weight of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if the vertex is out of range.
    #[must_use]
    pub fn weight(&self, vertex: Vertex) -> &Multidegree {
        &self.weights[vertex.0 as usize]
    }

    /// The edges in construction order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The squares in construction order.
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns true if the edge is part of the graph.
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edge_set.contains(edge)
    }

    /// Weight difference along an edge, `weight(source) - weight(target)`.
    #[must_use]
    pub fn edge_degree(&self, edge: &Edge) -> Multidegree {
        self.weight(edge.source).sub(self.weight(edge.target))
    }

    /// Weight difference across a square, `weight(start) - weight(end)`.
    #[must_use]
    pub fn diagonal_degree(&self, square: &Square) -> Multidegree {
        self.weight(square.start).sub(self.weight(square.end))
    }
}
