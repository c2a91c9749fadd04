use tracing::{debug, error};

use crate::errors::{MazeError, Result};
use crate::grid::{Edge, Grid};
use crate::union_find::DisjointSets;

/// The edges Kruskal kept and the edges it turned into walls, as indices into the edge list
/// it ran over. Both lists are in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    accepted: Vec<usize>,
    rejected: Vec<usize>,
    components: usize,
}

impl SpanningTree {
    #[inline]
    pub fn accepted_edges(&self) -> &[usize] {
        &self.accepted
    }

    #[inline]
    pub fn rejected_edges(&self) -> &[usize] {
        &self.rejected
    }

    /// Connected components left when the candidate list ran out. 1 for a spanning tree.
    #[inline]
    pub fn components(&self) -> usize {
        self.components
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    pub fn contains(&self, edge_index: usize) -> bool {
        self.accepted.contains(&edge_index)
    }
}

/// Kruskal's processing order: ascending weight, equal weights in edge creation order.
pub fn candidate_order(edges: &[Edge]) -> Vec<usize> {
    let mut order = (0..edges.len()).collect::<Vec<_>>();
    // stable sort, so ties keep creation order
    order.sort_by_key(|&edge_index| edges[edge_index].weight());
    order
}

/// Kruskal's algorithm over an arbitrary candidate edge list on vertices `0..vertex_count`.
///
/// Walks the edges cheapest first. An edge whose endpoints are already in one set would close
/// a cycle, so it is flagged as a wall; any other edge stays connected and its endpoints'
/// sets are merged.
///
/// Panics if an edge references a vertex id outside `0..vertex_count`.
pub fn kruskal(vertex_count: usize, edges: &mut [Edge]) -> SpanningTree {
    let mut sets = DisjointSets::new(vertex_count);
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut rejected = Vec::with_capacity(edges.len().saturating_sub(vertex_count));

    for edge_index in candidate_order(edges) {
        let edge = &mut edges[edge_index];
        let (a, b) = edge.endpoints();
        if sets.union(a, b) {
            edge.set_connected(true);
            accepted.push(edge_index);
        } else {
            edge.set_connected(false);
            rejected.push(edge_index);
        }
    }

    SpanningTree {
        accepted,
        rejected,
        components: sets.components(),
    }
}

/// Carve a perfect maze into the grid: a spanning tree over its randomly weighted lattice.
///
/// The lattice is always connected, so a result with more than one component means the
/// grid or the union-find is broken. That is reported as `DisconnectedSpanningTree`.
pub fn randomized_kruskal(grid: &mut Grid) -> Result<SpanningTree> {
    let vertex_count = grid.size();
    let tree = kruskal(vertex_count, grid.edges_mut());

    if tree.components() != 1 || tree.len() + 1 != vertex_count {
        error!(components = tree.components(),
               accepted = tree.len(),
               vertices = vertex_count,
               "kruskal left the grid disconnected");
        return Err(MazeError::DisconnectedSpanningTree { components: tree.components() });
    }

    debug!(accepted = tree.len(), rejected = tree.rejected_edges().len(), "spanning tree built");
    Ok(tree)
}

#[cfg(test)]
mod tests {

    use petgraph::algo::{connected_components, is_cyclic_undirected};
    use petgraph::graph::{NodeIndex, UnGraph};
    use quickcheck::{quickcheck, TestResult};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::units::{SideLength, VertexId};

    fn seeded_maze_grid(side: usize, seed: u64) -> (Grid, SpanningTree) {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let mut grid = Grid::build(SideLength(side), 1000, &mut rng).expect("valid grid size");
        let tree = randomized_kruskal(&mut grid).expect("lattice always spans");
        (grid, tree)
    }

    fn tree_graph(grid: &Grid) -> UnGraph<(), ()> {
        let mut graph = UnGraph::with_capacity(grid.size(), grid.size());
        for _ in 0..grid.size() {
            graph.add_node(());
        }
        for edge in grid.spanning_tree_edges() {
            let (a, b) = edge.endpoints();
            graph.add_edge(NodeIndex::new(a.0), NodeIndex::new(b.0), ());
        }
        graph
    }

    fn edge(a: usize, b: usize, weight: u32) -> Edge {
        Edge::new(VertexId(a), VertexId(b), weight)
    }

    #[test]
    fn two_by_two_increasing_weights_rejects_the_cycle_closer() {
        let mut grid = Grid::from_weights(SideLength(2), &[1, 2, 3, 4]).unwrap();
        let tree = randomized_kruskal(&mut grid).unwrap();
        assert_eq!(tree.accepted_edges(), &[0, 1, 2]);
        assert_eq!(tree.rejected_edges(), &[3]);
        assert!(!grid.edges()[3].is_connected());
        assert_eq!(grid.passage_count(), 3);
    }

    #[test]
    fn triangle_drops_heaviest_edge() {
        let mut edges = vec![edge(0, 1, 1), edge(1, 2, 2), edge(2, 0, 3)];
        let tree = kruskal(3, &mut edges);
        assert_eq!(tree.accepted_edges(), &[0, 1]);
        assert_eq!(tree.rejected_edges(), &[2]);
        assert_eq!(tree.components(), 1);
        assert!(edges[0].is_connected() && edges[1].is_connected());
        assert!(!edges[2].is_connected());
    }

    #[test]
    fn square_processes_by_weight_not_list_order() {
        let mut edges = vec![edge(0, 1, 1), edge(1, 2, 3), edge(3, 2, 2), edge(0, 3, 4)];
        let tree = kruskal(4, &mut edges);
        assert_eq!(tree.accepted_edges(), &[0, 2, 1]);
        assert_eq!(tree.rejected_edges(), &[3]);
    }

    #[test]
    fn equal_weights_keep_creation_order() {
        let edges = vec![edge(0, 1, 5), edge(1, 2, 5), edge(2, 3, 1), edge(0, 3, 5)];
        assert_eq!(candidate_order(&edges), vec![2, 0, 1, 3]);
    }

    #[test]
    fn disconnected_candidates_leave_several_components() {
        let mut edges = vec![edge(0, 1, 1), edge(2, 3, 1)];
        let tree = kruskal(4, &mut edges);
        assert_eq!(tree.components(), 2);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn three_by_three_has_eight_passages() {
        let (grid, tree) = seeded_maze_grid(3, 99);
        assert_eq!(grid.edges().len(), 12);
        assert_eq!(tree.len(), 8);
        assert_eq!(tree.rejected_edges().len(), 4);
        assert_eq!(grid.passage_count(), 8);
    }

    #[test]
    fn single_cell_is_trivially_spanned() {
        let (grid, tree) = seeded_maze_grid(1, 3);
        assert!(tree.is_empty());
        assert_eq!(tree.components(), 1);
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn same_seed_same_maze() {
        let (_, first) = seeded_maze_grid(12, 2024);
        let (_, second) = seeded_maze_grid(12, 2024);
        assert_eq!(first, second);
    }

    #[test]
    fn spanning_tree_shape() {
        fn prop(side: u8, seed: u64) -> TestResult {
            let side = (side % 16) as usize;
            if side == 0 {
                return TestResult::discard();
            }
            let (grid, tree) = seeded_maze_grid(side, seed);
            let graph = tree_graph(&grid);
            TestResult::from_bool(tree.len() == side * side - 1 &&
                                  grid.passage_count() == side * side - 1 &&
                                  connected_components(&graph) == 1 &&
                                  !is_cyclic_undirected(&graph))
        }
        quickcheck(prop as fn(u8, u64) -> TestResult)
    }

    #[test]
    fn accepted_edges_never_join_a_set_to_itself() {
        fn prop(side: u8, seed: u64) -> TestResult {
            let side = (side % 12) as usize;
            if side == 0 {
                return TestResult::discard();
            }
            let (grid, tree) = seeded_maze_grid(side, seed);

            // Replay in processing order: accepted edges must each merge two sets, rejected
            // edges must already be inside one set.
            let mut sets = DisjointSets::new(grid.size());
            for edge_index in candidate_order(grid.edges()) {
                let (a, b) = grid.edges()[edge_index].endpoints();
                let merged = sets.union(a, b);
                if merged != tree.contains(edge_index) {
                    return TestResult::failed();
                }
            }
            TestResult::passed()
        }
        quickcheck(prop as fn(u8, u64) -> TestResult)
    }
}
