pub mod algorithm;
pub mod disjoint_set;
pub mod graph;
pub mod import;
pub mod parameters;

/// Dense vertex index in `[0, num_vertices)`.
pub type Vertex = usize;

/// Edge weight; `0` in the adjacency matrix means "no edge".
pub type Weight = i64;

pub mod prelude {
    use super::*;

    pub use super::{Vertex, Weight};
    pub use algorithm::{kruskal::kruskal, prim::prim, SpanningTree};
    pub use graph::{AdjacencyGraph, Edge, GraphError, GraphView};
}
