//! Perfect maze generation and wavefront shortest-path solving
//!
//! Mazes are carved by a seeded depth-first backtracker over a wall-bitmask grid,
//! then solved with Lee's wavefront expansion followed by a back-trace from the exit.

#![forbid(unsafe_code)]

/// Maze carving, marker placement and wavefront solving
pub mod algorithm;
/// Rendering, export, command-line interface and error handling
pub mod io;
/// Grid model and direction table
pub mod spatial;

pub use algorithm::generator::generate;
pub use algorithm::solver::{solve, solve_between};
pub use io::error::{MazeError, Result};
pub use spatial::{Direction, Grid, Position};
