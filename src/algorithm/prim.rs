use super::SpanningTree;
use crate::graph::{Edge, GraphView};
use crate::{Vertex, Weight};

/// Prim's algorithm over a snapshot of the graph's adjacency matrix.
///
/// The tree grows from vertex `0`; each round pulls in the cheapest frontier
/// vertex (ties broken by lowest index, the scan runs in ascending order) and
/// relaxes its neighbors. When every remaining vertex is unreachable the loop
/// stops early, so a disconnected graph yields the spanning tree of the start
/// component only.
pub fn prim(graph: &impl GraphView) -> SpanningTree {
    let num_vertices = graph.num_vertices();
    if num_vertices == 0 {
        return SpanningTree::default();
    }

    let matrix = graph.adjacency_matrix();

    let mut key: Vec<Option<Weight>> = vec![None; num_vertices];
    let mut parent: Vec<Option<Vertex>> = vec![None; num_vertices];
    let mut in_tree = vec![false; num_vertices];
    key[0] = Some(0);

    for _ in 0..num_vertices {
        let u = match min_key_vertex(&key, &in_tree) {
            Some(u) => u,
            None => break, // remaining vertices unreachable
        };
        in_tree[u] = true;

        for v in 0..num_vertices {
            let weight = matrix[u][v];
            if weight != 0 && !in_tree[v] && key[v].map_or(true, |k| weight < k) {
                key[v] = Some(weight);
                parent[v] = Some(u);
            }
        }
    }

    let edges = (0..num_vertices)
        .filter(|&v| in_tree[v])
        .filter_map(|v| parent[v].map(|u| Edge::new(u, v, matrix[u][v])))
        .collect();

    SpanningTree::from_edges(edges)
}

/// Cheapest vertex not yet in the tree, or `None` once the frontier is empty.
fn min_key_vertex(key: &[Option<Weight>], in_tree: &[bool]) -> Option<Vertex> {
    let mut best: Option<(Vertex, Weight)> = None;

    for (v, &k) in key.iter().enumerate() {
        if in_tree[v] {
            continue;
        }
        if let Some(k) = k {
            if best.map_or(true, |(_, min)| k < min) {
                best = Some((v, k));
            }
        }
    }

    best.map(|(v, _)| v)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::AdjacencyGraph;

    #[test]
    fn diamond_graph() {
        let mut graph = AdjacencyGraph::new(4);
        for (u, v, w) in [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)] {
            graph.add_edge(Edge::new(u, v, w)).unwrap();
        }

        let tree = prim(&graph);

        // Edges come out in child-vertex order; same set and cost as Kruskal's.
        assert_eq!(
            tree.edges(),
            &[Edge::new(0, 1, 10), Edge::new(3, 2, 4), Edge::new(0, 3, 5)]
        );
        assert_eq!(tree.total_weight(), 19);
        assert!(tree.spans(4));
    }

    #[test]
    fn key_ties_pick_lowest_vertex() {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_edge(Edge::new(0, 1, 5)).unwrap();
        graph.add_edge(Edge::new(0, 2, 5)).unwrap();

        let tree = prim(&graph);

        assert_eq!(tree.edges(), &[Edge::new(0, 1, 5), Edge::new(0, 2, 5)]);
    }

    #[test]
    fn disconnected_stops_at_start_component() {
        let mut graph = AdjacencyGraph::new(4);
        graph.add_edge(Edge::new(0, 1, 3)).unwrap();
        graph.add_edge(Edge::new(2, 3, 7)).unwrap();

        let tree = prim(&graph);

        assert_eq!(tree.edges(), &[Edge::new(0, 1, 3)]);
        assert_eq!(tree.total_weight(), 3);
        assert!(!tree.spans(4));
    }

    #[test]
    fn isolated_start_vertex() {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_edge(Edge::new(1, 2, 4)).unwrap();

        let tree = prim(&graph);

        assert_eq!(tree.num_edges(), 0);
        assert_eq!(tree.total_weight(), 0);
    }

    #[test]
    fn trivial_graphs() {
        assert_eq!(prim(&AdjacencyGraph::new(0)), SpanningTree::default());
        assert_eq!(prim(&AdjacencyGraph::new(1)), SpanningTree::default());
    }
}
