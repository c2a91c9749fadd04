use petgraph::graph::{NodeIndex, UnGraph};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{MazeError, Result};
use crate::generators::{self, SpanningTree};
use crate::grid::{self, Grid, VertexSmallVec};
use crate::traversal::{FrontierPolicy, Passages, Traversal};
use crate::units::{SideLength, VertexId};

/// Upper bound (exclusive) of the random edge weights unless configured otherwise.
pub const DEFAULT_WEIGHT_BOUND: u32 = 1000;
pub const DEFAULT_SIDE: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Cells along each side of the square grid.
    pub side: usize,
    pub seed: u64,
    /// Edge weights are drawn from `0..weight_bound`.
    pub weight_bound: u32,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            side: DEFAULT_SIDE,
            seed: 0,
            weight_bound: DEFAULT_WEIGHT_BOUND,
        }
    }
}

impl MazeConfig {
    pub fn new(side: usize, seed: u64) -> MazeConfig {
        MazeConfig {
            side,
            seed,
            ..MazeConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        grid::checked_graph_size(SideLength(self.side))?;
        if self.weight_bound == 0 {
            return Err(MazeError::InvalidWeightBound);
        }
        Ok(())
    }
}

/// A generated perfect maze: the grid with its walls flagged, and the spanning tree that
/// carved it.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    tree: SpanningTree,
    seed: Option<u64>,
}

/// Outcome of running a traversal session to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub policy: FrontierPolicy,
    pub path: Vec<VertexId>,
    pub steps: usize,
    pub visited: usize,
}

impl Maze {
    /// Build a grid with seeded random weights and carve it with randomized Kruskal.
    /// The same configuration always produces the same maze.
    #[tracing::instrument(level = "debug", skip(config), fields(side = config.side, seed = config.seed))]
    pub fn generate(config: &MazeConfig) -> Result<Maze> {
        config.validate()?;
        let mut rng = XorShiftRng::seed_from_u64(config.seed);
        let grid = Grid::build(SideLength(config.side), config.weight_bound, &mut rng)?;
        let mut maze = Maze::from_grid(grid)?;
        maze.seed = Some(config.seed);
        info!(side = config.side,
              seed = config.seed,
              passages = maze.tree.len(),
              walls = maze.tree.rejected_edges().len(),
              "maze generated");
        Ok(maze)
    }

    /// Carve a maze from a grid whose weights were chosen by the caller.
    pub fn from_grid(mut grid: Grid) -> Result<Maze> {
        let tree = generators::randomized_kruskal(&mut grid)?;
        Ok(Maze {
            grid,
            tree,
            seed: None,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn spanning_tree(&self) -> &SpanningTree {
        &self.tree
    }

    /// Seed the maze was generated from, `None` for caller supplied weights.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    pub fn side(&self) -> SideLength {
        self.grid.side()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Top left cell.
    #[inline]
    pub fn start(&self) -> VertexId {
        VertexId(0)
    }

    /// Bottom right cell.
    #[inline]
    pub fn goal(&self) -> VertexId {
        VertexId(self.grid.size() - 1)
    }

    /// The accepted passages as an undirected petgraph graph. Node `i` carries `VertexId(i)`,
    /// edges carry their Kruskal weight.
    pub fn passage_graph(&self) -> UnGraph<VertexId, u32> {
        let mut graph = UnGraph::with_capacity(self.grid.size(), self.tree.len());
        for cell in self.grid.cells() {
            graph.add_node(cell.id());
        }
        for edge in self.grid.spanning_tree_edges() {
            let (a, b) = edge.endpoints();
            graph.add_edge(NodeIndex::new(a.0), NodeIndex::new(b.0), edge.weight());
        }
        graph
    }

    /// Open a traversal session from `start()` to `goal()`.
    pub fn traverse(&self, policy: FrontierPolicy) -> Result<Traversal<'_, Grid>> {
        self.traverse_between(self.start(), self.goal(), policy)
    }

    pub fn traverse_between(&self,
                            source: VertexId,
                            target: VertexId,
                            policy: FrontierPolicy)
                            -> Result<Traversal<'_, Grid>> {
        Traversal::new(&self.grid, source, target, policy)
    }

    /// Run a session from `start()` to `goal()` to completion.
    pub fn solve(&self, policy: FrontierPolicy) -> Result<Solution> {
        let mut traversal = self.traverse(policy)?;
        let steps = traversal.run()?;
        let path = traversal.path()?;
        Ok(Solution {
            policy,
            path,
            steps,
            visited: traversal.visited().len(),
        })
    }
}

impl Passages for Maze {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.grid.size()
    }

    #[inline]
    fn open_neighbours(&self, v: VertexId) -> VertexSmallVec {
        self.grid.passages(v)
    }
}
