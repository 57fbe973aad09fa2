use crate::graph::Edge;
use crate::Weight;

pub mod kruskal;
pub mod prim;

/// Result of one spanning-tree computation: the accepted edges in the order
/// the algorithm selected them, plus their summed weight.
///
/// A connected graph yields `num_vertices - 1` edges; a disconnected one
/// yields fewer, so callers detect disconnection from `num_edges`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl SpanningTree {
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            edges,
            total_weight,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// True when the tree spans a graph of `num_vertices` vertices, i.e. the
    /// input was connected (vacuously true for 0 or 1 vertices).
    pub fn spans(&self, num_vertices: usize) -> bool {
        self.edges.len() + 1 >= num_vertices
    }
}
