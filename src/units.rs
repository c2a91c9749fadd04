use std::fmt;

/// Row-major index of a cell in the grid, `row * side + column`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> VertexId {
        VertexId(index)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct ColumnIndex(pub usize);

/// Number of cells along one side of a square grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct SideLength(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);

impl SideLength {
    /// Vertex and candidate edge counts of the full lattice, `None` on overflow.
    pub fn graph_size(&self) -> Option<(NodesCount, EdgesCount)> {
        let side = self.0;
        let nodes = side.checked_mul(side)?;
        // side - 1 internal walls per row, for both rows and columns
        let edges = side.saturating_sub(1).checked_mul(side)?.checked_mul(2)?;
        Some((NodesCount(nodes), EdgesCount(edges)))
    }
}
