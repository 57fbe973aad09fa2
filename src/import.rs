use crate::graph::{AdjacencyGraph, Edge, GraphError, GraphView};
use crate::{Vertex, Weight};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed edge on line {line}: expected `source destination weight`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Reads a whitespace-separated `source destination weight` edge list, one
/// edge per line. Blank lines are skipped. The graph is sized to the highest
/// vertex index seen (at least `min_vertices`), so isolated trailing vertices
/// can be requested explicitly.
pub fn read_edge_list(
    path: impl AsRef<Path>,
    min_vertices: usize,
) -> Result<AdjacencyGraph, ImportError> {
    parse_edge_list(BufReader::new(File::open(path)?), min_vertices)
}

pub fn parse_edge_list(
    reader: impl BufRead,
    min_vertices: usize,
) -> Result<AdjacencyGraph, ImportError> {
    let mut edges = Vec::new();
    let mut num_vertices = min_vertices;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let parsed = match fields.as_slice() {
            [source, destination, weight] => source
                .parse::<Vertex>()
                .ok()
                .zip(destination.parse::<Vertex>().ok())
                .zip(weight.parse::<Weight>().ok()),
            _ => None,
        };

        let ((source, destination), weight) =
            parsed.ok_or_else(|| ImportError::MalformedLine {
                line: idx + 1,
                content: line.clone(),
            })?;

        num_vertices = num_vertices.max(source + 1).max(destination + 1);
        edges.push(Edge::new(source, destination, weight));
    }

    let mut graph = AdjacencyGraph::new(num_vertices);
    for edge in edges {
        graph.add_edge(edge)?;
    }

    log::debug!(
        "imported {} edges over {} vertices",
        graph.all_edges().len(),
        num_vertices
    );

    Ok(graph)
}
