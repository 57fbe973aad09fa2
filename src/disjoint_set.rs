use super::Vertex;

#[derive(Debug, Clone, Copy)]
struct Subset {
    parent: Vertex,
    rank: u32,
}

/// Union-find over the dense vertex range, with path compression and union
/// by rank. Built fresh for every Kruskal run.
///
/// # Example
/// ```
/// use rust_mst::disjoint_set::DisjointSet;
///
/// let mut sets = DisjointSet::new(3);
/// assert!(!sets.same(0, 2));
///
/// sets.union(0, 1);
/// sets.union(1, 2);
/// assert!(sets.same(0, 2));
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    subsets: Vec<Subset>,
}

impl DisjointSet {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            subsets: (0..num_vertices)
                .map(|i| Subset { parent: i, rank: 0 })
                .collect(),
        }
    }

    /// Root of `i`'s set. Every vertex on the walked path is re-pointed
    /// directly at the root.
    pub fn find(&mut self, i: Vertex) -> Vertex {
        let mut root = i;
        while self.subsets[root].parent != root {
            root = self.subsets[root].parent;
        }

        let mut current = i;
        while current != root {
            let parent = self.subsets[current].parent;
            self.subsets[current].parent = root;
            current = parent;
        }

        root
    }

    pub fn same(&mut self, x: Vertex, y: Vertex) -> bool {
        self.find(x) == self.find(y)
    }

    /// Merges the sets containing `x` and `y`; the lower-rank root is
    /// attached under the higher. On equal rank `x`'s root survives and its
    /// rank grows by one. No-op when already merged.
    pub fn union(&mut self, x: Vertex, y: Vertex) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }

        if self.subsets[root_y].rank < self.subsets[root_x].rank {
            self.subsets[root_y].parent = root_x;
        } else if self.subsets[root_x].rank < self.subsets[root_y].rank {
            self.subsets[root_x].parent = root_y;
        } else {
            self.subsets[root_y].parent = root_x;
            self.subsets[root_x].rank += 1;
        }
    }
}
