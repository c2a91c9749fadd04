use crate::units::VertexId;

/// Disjoint-set forest over vertex ids `0..len`, with path compression and union by rank.
///
/// Panics if given a vertex id outside `0..len`.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSets {
    /// Every vertex starts as its own representative.
    pub fn new(len: usize) -> DisjointSets {
        DisjointSets {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct sets.
    #[inline]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Representative of the set containing `v`.
    pub fn find(&mut self, v: VertexId) -> VertexId {
        let mut root = v.0;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass points everything on the walked chain straight at the root.
        let mut current = v.0;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        VertexId(root)
    }

    /// Merge the sets containing `a` and `b`.
    /// Returns false, changing nothing, when they are already in the same set.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let VertexId(root_a) = self.find(a);
        let VertexId(root_b) = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        self.components -= 1;
        true
    }

    #[inline]
    pub fn same_set(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }
}
