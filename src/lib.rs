//! **spanning_mazes** generates perfect mazes with randomized Kruskal over a square lattice and
//! solves them with a steppable breadth-first / depth-first traversal.
//!
//! Presentation (drawing walls, animating the search, decoding keys) is left to callers: they
//! query wall connectivity on the `Grid`, drive a `Traversal` one `step` at a time and read its
//! frontier, visited set and reconstructed path.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod maze;
pub mod navigation;
pub mod pathing;
pub mod traversal;
pub mod union_find;
pub mod units;

pub use crate::errors::{MazeError, Result};
pub use crate::maze::{Maze, MazeConfig, Solution};
pub use crate::traversal::{FrontierPolicy, Progress, Traversal};
