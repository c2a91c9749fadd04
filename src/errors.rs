use thiserror::Error;

use crate::units::VertexId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The grid side must be at least one cell and the lattice must fit in memory indices.
    #[error("invalid grid size {0}, a maze needs at least a 1x1 grid")]
    InvalidGridSize(usize),

    #[error("edge weight bound must be at least 1")]
    InvalidWeightBound,

    #[error("expected {expected} edge weights but {actual} were supplied")]
    WeightCountMismatch { expected: usize, actual: usize },

    #[error("vertex {0} is not on the grid")]
    InvalidVertex(VertexId),

    /// Kruskal finished with more than one component, or a traversal ran dry before
    /// reaching its target. Either means the spanning tree invariant is broken.
    #[error("spanning tree is disconnected ({components} components)")]
    DisconnectedSpanningTree { components: usize },

    #[error("no predecessor chain leads from {target} back to {origin}")]
    UnreachableTarget { origin: VertexId, target: VertexId },

    #[error("traversal already reached its target")]
    StepAfterCompletion,

    /// The session has not reached its target yet, so there is no completed path to read.
    #[error("traversal has not reached its target yet")]
    TraversalInProgress,
}

pub type Result<T> = std::result::Result<T, MazeError>;
