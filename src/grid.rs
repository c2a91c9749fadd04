use std::collections::TryReserveError;
use std::fmt;
use std::mem;

use rand::Rng;
use smallvec::SmallVec;

use crate::cells::{Cell, CompassPrimary};
use crate::errors::{MazeError, Result};
use crate::units::{ColumnIndex, EdgesCount, NodesCount, RowIndex, SideLength, VertexId};

pub type VertexSmallVec = SmallVec<[VertexId; 4]>;
pub type EdgeIndexSmallVec = SmallVec<[usize; 4]>;

/// An undirected lattice edge between two adjacent cells.
///
/// Every edge starts out `connected` (passable). The maze generator flags the edges it
/// rejects as walls; edges are never removed from the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
    weight: u32,
    connected: bool,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId, weight: u32) -> Edge {
        Edge {
            a,
            b,
            weight,
            connected: true,
        }
    }

    #[inline(always)]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    #[inline(always)]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[inline(always)]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The endpoint opposite `v`, or `None` if `v` is not on this edge.
    pub fn other_endpoint(&self, v: VertexId) -> Option<VertexId> {
        if v == self.a {
            Some(self.b)
        } else if v == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }
}

/// Square lattice of cells with one candidate edge per 4-neighbour pair.
///
/// Cell ids are row-major. Edges are created in row-major cell order, East edge before
/// South edge for each cell, and that creation order is their index in `edges()`.
#[derive(Clone)]
pub struct Grid {
    side: SideLength,
    cells: Vec<Cell>,
    edges: Vec<Edge>,
    // per cell, the edge index in each direction slot (see `CompassPrimary::slot`)
    incidence: Vec<[Option<usize>; 4]>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: side: {}, cells: {}, edges: {}, passages: {}",
               self.side.0, self.cells.len(), self.edges.len(), self.passage_count())
    }
}

impl Grid {
    /// Build an `side` x `side` lattice, drawing each edge weight uniformly from
    /// `0..weight_bound` with the supplied random source.
    pub fn build<R>(side: SideLength, weight_bound: u32, rng: &mut R) -> Result<Grid>
        where R: Rng + ?Sized
    {
        if weight_bound == 0 {
            return Err(MazeError::InvalidWeightBound);
        }
        Grid::with_weight_source(side, |_| rng.gen_range(0..weight_bound))
    }

    /// Build a lattice with explicit weights, given in edge creation order.
    pub fn from_weights(side: SideLength, weights: &[u32]) -> Result<Grid> {
        let (_, EdgesCount(expected)) = checked_graph_size(side)?;
        if weights.len() != expected {
            return Err(MazeError::WeightCountMismatch {
                expected,
                actual: weights.len(),
            });
        }
        Grid::with_weight_source(side, |edge_index| weights[edge_index])
    }

    fn with_weight_source<F>(side: SideLength, mut weight_of: F) -> Result<Grid>
        where F: FnMut(usize) -> u32
    {
        let (NodesCount(nodes), EdgesCount(edges_count)) = checked_graph_size(side)?;
        let width = side.0;

        let too_large = |_: TryReserveError| MazeError::InvalidGridSize(width);
        let mut cells = Vec::new();
        cells.try_reserve_exact(nodes).map_err(too_large)?;
        cells.extend((0..nodes)
            .map(|id| Cell::new(VertexId(id), RowIndex(id / width), ColumnIndex(id % width))));
        let mut edges = Vec::new();
        edges.try_reserve_exact(edges_count).map_err(too_large)?;
        let mut incidence = Vec::new();
        incidence.try_reserve_exact(nodes).map_err(too_large)?;
        incidence.resize(nodes, [None; 4]);

        for cell in &cells {
            for &dir in &[CompassPrimary::East, CompassPrimary::South] {
                if let Some(neighbour) = lattice_neighbour(side, cell, dir) {
                    let edge_index = edges.len();
                    edges.push(Edge::new(cell.id(), neighbour, weight_of(edge_index)));
                    incidence[cell.id().0][dir.slot()] = Some(edge_index);
                    incidence[neighbour.0][dir.opposite().slot()] = Some(edge_index);
                }
            }
        }
        debug_assert_eq!(edges.len(), edges_count);

        Ok(Grid {
            side,
            cells,
            edges,
            incidence,
        })
    }

    #[inline]
    pub fn side(&self) -> SideLength {
        self.side
    }

    /// Number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        v.0 < self.cells.len()
    }

    #[inline]
    pub fn cell(&self, v: VertexId) -> Option<&Cell> {
        self.cells.get(v.0)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn edge(&self, edge_index: usize) -> Option<&Edge> {
        self.edges.get(edge_index)
    }

    pub fn vertex_at(&self, row: RowIndex, column: ColumnIndex) -> Option<VertexId> {
        let width = self.side.0;
        if row.0 < width && column.0 < width {
            Some(VertexId(row.0 * width + column.0))
        } else {
            None
        }
    }

    /// Index of the edge leaving `v` towards `direction`, `None` at the boundary.
    #[inline]
    pub fn edge_index_at_direction(&self, v: VertexId, direction: CompassPrimary) -> Option<usize> {
        self.incidence.get(v.0).and_then(|slots| slots[direction.slot()])
    }

    pub fn edge_at_direction(&self, v: VertexId, direction: CompassPrimary) -> Option<&Edge> {
        self.edge_index_at_direction(v, direction).map(|i| &self.edges[i])
    }

    /// The adjacent cell in `direction`, regardless of whether a wall separates them.
    pub fn neighbour_at_direction(&self, v: VertexId, direction: CompassPrimary) -> Option<VertexId> {
        self.edge_at_direction(v, direction).and_then(|edge| edge.other_endpoint(v))
    }

    /// Is there an open passage out of `v` towards `direction`? False at the boundary.
    pub fn is_passable(&self, v: VertexId, direction: CompassPrimary) -> bool {
        self.edge_at_direction(v, direction).map_or(false, Edge::is_connected)
    }

    /// Edge indices incident to `v`, in North, South, East, West order.
    pub fn incident_edges(&self, v: VertexId) -> EdgeIndexSmallVec {
        self.incidence
            .get(v.0)
            .map(|slots| slots.iter().filter_map(|slot| *slot).collect())
            .unwrap_or_default()
    }

    /// Lattice neighbours of `v`, walls or not.
    pub fn neighbours(&self, v: VertexId) -> VertexSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|&dir| self.neighbour_at_direction(v, dir))
            .collect()
    }

    /// Neighbours of `v` reachable through a connected edge.
    pub fn passages(&self, v: VertexId) -> VertexSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|&dir| self.edge_at_direction(v, dir))
            .filter(|edge| edge.is_connected())
            .filter_map(|edge| edge.other_endpoint(v))
            .collect()
    }

    /// Direction of the step from `a` to the adjacent cell `b`.
    pub fn direction_between(&self, a: VertexId, b: VertexId) -> Option<CompassPrimary> {
        CompassPrimary::ALL
            .iter()
            .cloned()
            .find(|&dir| self.neighbour_at_direction(a, dir) == Some(b))
    }

    /// Connected edges. After maze generation this is exactly the spanning tree.
    pub fn spanning_tree_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|edge| edge.is_connected())
    }

    pub fn passage_count(&self) -> usize {
        self.edges.iter().filter(|edge| edge.is_connected()).count()
    }

    #[inline]
    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }
}

/// Lattice size for `side`, rejecting empty grids and grids whose cell, edge or incidence
/// storage could not be addressed.
pub(crate) fn checked_graph_size(side: SideLength) -> Result<(NodesCount, EdgesCount)> {
    let invalid = || MazeError::InvalidGridSize(side.0);
    if side.0 == 0 {
        return Err(invalid());
    }
    let (NodesCount(nodes), EdgesCount(edges)) = side.graph_size().ok_or_else(invalid)?;
    let fits = |count: usize, item_size: usize| {
        count.checked_mul(item_size).map_or(false, |bytes| bytes <= isize::MAX as usize)
    };
    if fits(nodes, mem::size_of::<Cell>()) && fits(nodes, mem::size_of::<[Option<usize>; 4]>()) &&
       fits(edges, mem::size_of::<Edge>()) {
        Ok((NodesCount(nodes), EdgesCount(edges)))
    } else {
        Err(invalid())
    }
}

fn lattice_neighbour(side: SideLength, cell: &Cell, direction: CompassPrimary) -> Option<VertexId> {
    direction
        .offset(cell.row(), cell.column())
        .filter(|&(RowIndex(r), ColumnIndex(c))| r < side.0 && c < side.0)
        .map(|(RowIndex(r), ColumnIndex(c))| VertexId(r * side.0 + c))
}
