use crate::units::{ColumnIndex, RowIndex, VertexId};

/// A vertex of the lattice. Immutable once the grid has been built.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    id: VertexId,
    row: RowIndex,
    column: ColumnIndex,
}

impl Cell {
    pub fn new(id: VertexId, row: RowIndex, column: ColumnIndex) -> Cell {
        Cell { id, row, column }
    }

    #[inline(always)]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[inline(always)]
    pub fn row(&self) -> RowIndex {
        self.row
    }

    #[inline(always)]
    pub fn column(&self) -> ColumnIndex {
        self.column
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::South,
                                          CompassPrimary::East,
                                          CompassPrimary::West];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    /// Slot of this direction in a per-cell `[_; 4]` incidence array.
    #[inline(always)]
    pub(crate) fn slot(self) -> usize {
        match self {
            CompassPrimary::North => 0,
            CompassPrimary::South => 1,
            CompassPrimary::East => 2,
            CompassPrimary::West => 3,
        }
    }

    /// Row and column offsets, `None` when the step would leave the grid at the top or left.
    pub(crate) fn offset(self, row: RowIndex, column: ColumnIndex) -> Option<(RowIndex, ColumnIndex)> {
        let (RowIndex(r), ColumnIndex(c)) = (row, column);
        match self {
            CompassPrimary::North => r.checked_sub(1).map(|r| (RowIndex(r), column)),
            CompassPrimary::South => Some((RowIndex(r + 1), column)),
            CompassPrimary::East => Some((row, ColumnIndex(c + 1))),
            CompassPrimary::West => c.checked_sub(1).map(|c| (row, ColumnIndex(c))),
        }
    }
}
