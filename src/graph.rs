use super::{Vertex, Weight};
use itertools::Itertools;
use std::fmt;
use thiserror::Error;

/// An undirected weighted connection between two vertices.
///
/// The record itself is always meaningful, even with weight `0`; the zero
/// convention only applies to matrix cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: Vertex,
    pub destination: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: Vertex, destination: Vertex, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} == {}", self.source, self.destination, self.weight)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid vertex index {vertex} for graph with {num_vertices} vertices")]
    InvalidVertex { vertex: Vertex, num_vertices: usize },

    #[error("self-loop on vertex {vertex} is not representable")]
    SelfLoop { vertex: Vertex },
}

/// Read-only queries the spanning-tree algorithms need. Keeps the algorithms
/// off the mutation surface of [`AdjacencyGraph`].
pub trait GraphView {
    fn num_vertices(&self) -> usize;

    /// One [`Edge`] per unordered pair with nonzero weight, emitted with
    /// `source < destination` in row-major scan order.
    fn all_edges(&self) -> Vec<Edge>;

    /// Full copy of the weight matrix; mutating the graph afterwards does not
    /// affect the returned snapshot.
    fn adjacency_matrix(&self) -> Vec<Vec<Weight>>;
}

/// Mutable adjacency-matrix graph over dense vertex indices.
///
/// The matrix is kept symmetric with a zero diagonal; cell `0` means "no
/// edge". Structural mutations (`add_vertex`, `remove_vertex`) reallocate the
/// matrix, everything else writes cells in place.
///
/// # Example
/// ```
/// use rust_mst::graph::{AdjacencyGraph, Edge, GraphView};
///
/// let mut graph = AdjacencyGraph::new(3);
/// graph.add_edge(Edge::new(0, 2, 7)).unwrap();
///
/// assert!(graph.contains_edge(2, 0));
/// assert_eq!(graph.all_edges(), vec![Edge::new(0, 2, 7)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    num_vertices: usize,
    weights: Vec<Vec<Weight>>,
}

impl AdjacencyGraph {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            weights: vec![vec![0; num_vertices]; num_vertices],
        }
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        if vertex < self.num_vertices {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                num_vertices: self.num_vertices,
            })
        }
    }

    /// Sets both matrix cells of the pair to `edge.weight`, overwriting any
    /// prior weight. Weight `0` is indistinguishable from removing the edge.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        self.check_vertex(edge.source)?;
        self.check_vertex(edge.destination)?;
        if edge.source == edge.destination {
            return Err(GraphError::SelfLoop { vertex: edge.source });
        }

        self.weights[edge.source][edge.destination] = edge.weight;
        self.weights[edge.destination][edge.source] = edge.weight;
        Ok(())
    }

    pub fn remove_edge(&mut self, source: Vertex, destination: Vertex) -> Result<(), GraphError> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;

        self.weights[source][destination] = 0;
        self.weights[destination][source] = 0;
        Ok(())
    }

    /// Grows the matrix by one all-zero row and column.
    pub fn add_vertex(&mut self) {
        self.num_vertices += 1;
        for row in &mut self.weights {
            row.push(0);
        }
        self.weights.push(vec![0; self.num_vertices]);
    }

    /// Drops `vertex` and renumbers every index above it down by one.
    pub fn remove_vertex(&mut self, vertex: Vertex) -> Result<(), GraphError> {
        self.check_vertex(vertex)?;

        self.weights.remove(vertex);
        for row in &mut self.weights {
            row.remove(vertex);
        }
        self.num_vertices -= 1;
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        vertex < self.num_vertices
    }

    /// An edge exists iff the stored weight is nonzero. Out-of-range indices
    /// never contain an edge.
    pub fn contains_edge(&self, source: Vertex, destination: Vertex) -> bool {
        source < self.num_vertices
            && destination < self.num_vertices
            && self.weights[source][destination] != 0
    }

    pub fn weight(&self, source: Vertex, destination: Vertex) -> Option<Weight> {
        if source < self.num_vertices && destination < self.num_vertices {
            Some(self.weights[source][destination])
        } else {
            None
        }
    }

    /// Depth-first preorder from `start_vertex`, following neighbors in
    /// ascending index order. Diagnostics only; returns the visit order
    /// instead of printing it.
    pub fn traverse(&self, start_vertex: Vertex) -> Result<Vec<Vertex>, GraphError> {
        self.check_vertex(start_vertex)?;

        let mut visited = vec![false; self.num_vertices];
        let mut order = Vec::new();
        let mut stack = vec![start_vertex];

        while let Some(u) = stack.pop() {
            if visited[u] {
                continue;
            }
            visited[u] = true;
            order.push(u);

            // Pushed in reverse so the lowest unvisited neighbor is explored first.
            for v in (0..self.num_vertices).rev() {
                if self.weights[u][v] != 0 && !visited[v] {
                    stack.push(v);
                }
            }
        }

        Ok(order)
    }
}

impl GraphView for AdjacencyGraph {
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    fn all_edges(&self) -> Vec<Edge> {
        (0..self.num_vertices)
            .tuple_combinations::<(_, _)>()
            .filter(|&(i, j)| self.weights[i][j] != 0)
            .map(|(i, j)| Edge::new(i, j, self.weights[i][j]))
            .collect()
    }

    fn adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        self.weights.clone()
    }
}

impl fmt::Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.weights.iter().enumerate() {
            writeln!(f, "{}: {}", i, row.iter().join(" "))?;
        }
        Ok(())
    }
}
