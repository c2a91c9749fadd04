use bit_set::BitSet;
use tracing::debug;

use crate::cells::CompassPrimary;
use crate::errors::Result;
use crate::maze::Maze;
use crate::traversal::FrontierPolicy;
use crate::units::VertexId;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(VertexId),
    /// A wall or the grid boundary is in the way.
    Blocked,
}

/// A player walking the maze from `start()` towards `goal()` one decoded move command at a
/// time. Steps that leave the solution path are counted as wrong moves.
#[derive(Debug)]
pub struct Navigator<'m> {
    maze: &'m Maze,
    position: VertexId,
    solution: Vec<VertexId>,
    on_solution: BitSet,
    moves: usize,
    wrong_moves: usize,
}

impl<'m> Navigator<'m> {
    pub fn new(maze: &'m Maze) -> Result<Navigator<'m>> {
        let solution = maze.solve(FrontierPolicy::BreadthFirst)?.path;
        let on_solution = solution.iter().map(|v| v.0).collect::<BitSet>();
        Ok(Navigator {
            maze,
            position: maze.start(),
            solution,
            on_solution,
            moves: 0,
            wrong_moves: 0,
        })
    }

    /// Move through the passage in `direction`, if there is one.
    pub fn try_move(&mut self, direction: CompassPrimary) -> MoveOutcome {
        let grid = self.maze.grid();
        let next = if grid.is_passable(self.position, direction) {
            grid.neighbour_at_direction(self.position, direction)
        } else {
            None
        };

        match next {
            Some(v) => {
                self.position = v;
                self.moves += 1;
                if !self.is_on_solution(v) {
                    self.wrong_moves += 1;
                }
                debug!(?direction, position = %v, wrong_moves = self.wrong_moves, "moved");
                MoveOutcome::Moved(v)
            }
            None => MoveOutcome::Blocked,
        }
    }

    /// Back to the start with the counters cleared.
    pub fn reset(&mut self) {
        self.position = self.maze.start();
        self.moves = 0;
        self.wrong_moves = 0;
    }

    #[inline]
    pub fn position(&self) -> VertexId {
        self.position
    }

    #[inline]
    pub fn has_won(&self) -> bool {
        self.position == self.maze.goal()
    }

    #[inline]
    pub fn moves(&self) -> usize {
        self.moves
    }

    #[inline]
    pub fn wrong_moves(&self) -> usize {
        self.wrong_moves
    }

    /// Start to goal path the wrong moves are measured against.
    #[inline]
    pub fn solution(&self) -> &[VertexId] {
        &self.solution
    }

    #[inline]
    pub fn is_on_solution(&self, v: VertexId) -> bool {
        self.on_solution.contains(v.0)
    }
}
