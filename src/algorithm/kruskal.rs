use super::SpanningTree;
use crate::disjoint_set::DisjointSet;
use crate::graph::GraphView;

/// Kruskal's algorithm over the graph's edge-list view.
///
/// Edges are taken in ascending weight order; the sort is stable, so ties
/// keep the row-major order of [`GraphView::all_edges`]. An edge is accepted
/// iff its endpoints lie in different sets. On a disconnected graph this
/// yields the minimum spanning forest.
pub fn kruskal(graph: &impl GraphView) -> SpanningTree {
    let num_vertices = graph.num_vertices();

    let mut edges = graph.all_edges();
    edges.sort_by_key(|e| e.weight);

    let mut sets = DisjointSet::new(num_vertices);
    let mut accepted = Vec::new();

    for edge in edges {
        if accepted.len() + 1 == num_vertices {
            break;
        }
        if !sets.same(edge.source, edge.destination) {
            sets.union(edge.source, edge.destination);
            accepted.push(edge);
        }
    }

    SpanningTree::from_edges(accepted)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::{AdjacencyGraph, Edge};

    #[test]
    fn diamond_graph() {
        let mut graph = AdjacencyGraph::new(4);
        for (u, v, w) in [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)] {
            graph.add_edge(Edge::new(u, v, w)).unwrap();
        }

        let tree = kruskal(&graph);

        assert_eq!(
            tree.edges(),
            &[Edge::new(2, 3, 4), Edge::new(0, 3, 5), Edge::new(0, 1, 10)]
        );
        assert_eq!(tree.total_weight(), 19);
        assert!(tree.spans(4));
    }

    #[test]
    fn weight_ties_keep_scan_order() {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_edge(Edge::new(0, 1, 2)).unwrap();
        graph.add_edge(Edge::new(0, 2, 2)).unwrap();
        graph.add_edge(Edge::new(1, 2, 2)).unwrap();

        let tree = kruskal(&graph);

        assert_eq!(tree.edges(), &[Edge::new(0, 1, 2), Edge::new(0, 2, 2)]);
    }

    #[test]
    fn disconnected_yields_spanning_forest() {
        let mut graph = AdjacencyGraph::new(4);
        graph.add_edge(Edge::new(0, 1, 3)).unwrap();
        graph.add_edge(Edge::new(2, 3, 7)).unwrap();

        let tree = kruskal(&graph);

        assert_eq!(tree.edges(), &[Edge::new(0, 1, 3), Edge::new(2, 3, 7)]);
        assert_eq!(tree.total_weight(), 10);
        assert!(!tree.spans(4));
    }

    #[test]
    fn trivial_graphs() {
        assert_eq!(kruskal(&AdjacencyGraph::new(0)), SpanningTree::default());
        assert_eq!(kruskal(&AdjacencyGraph::new(1)), SpanningTree::default());
    }
}
