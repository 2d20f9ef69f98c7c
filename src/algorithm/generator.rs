//! Seeded depth-first maze carving
//!
//! The directions of every cell are shuffled by one `StdRng` seeded once per
//! generator, so the whole carve order is a function of the seed. An explicit
//! stack replaces recursion: each frame keeps its shuffled directions and how
//! many of them it has already tried, which reproduces the recursive
//! backtracker exactly without growing the call stack.

use log::debug;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::algorithm::visited::VisitedSet;
use crate::io::error::Result;
use crate::spatial::{Direction, Grid, Position};

#[derive(Debug, Clone, Copy)]
struct Frame {
    position: Position,
    directions: [Direction; 4],
    next: usize,
}

/// Recursive-backtracking maze generator driven by a single seeded RNG
///
/// Carving several mazes with the same generator continues the same random
/// sequence, so only the first maze matches [`generate`] with that seed.
pub struct MazeGenerator {
    rng: StdRng,
}

impl MazeGenerator {
    /// Create a generator whose carve sequence is fixed by `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Carve a perfect maze of `width` × `height` cells starting from (0, 0)
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or exceeds the
    /// grid limit
    pub fn carve(&mut self, width: usize, height: usize) -> Result<Grid> {
        let mut grid = Grid::new(width, height)?;
        let mut visited = VisitedSet::new(width, height);

        let origin = Position::new(0, 0);
        visited.insert(origin);
        let mut stack = vec![self.enter(origin)];
        let mut deepest = stack.len();

        while let Some(frame) = stack.last_mut() {
            let Some(direction) = frame.directions.get(frame.next).copied() else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            let current = frame.position;

            let Some(neighbor) = grid.neighbor(current, direction) else {
                continue;
            };
            if visited.insert(neighbor) {
                grid.carve_passage(current, neighbor)?;
                stack.push(self.enter(neighbor));
                deepest = deepest.max(stack.len());
            }
        }

        let dead_ends = grid
            .positions()
            .filter_map(|position| grid.cell(position).ok())
            .filter(|cell| cell.open_sides() == 1)
            .count();
        debug!(
            "carved {width}x{height} maze: {} passages, {dead_ends} dead ends, stack depth {deepest}",
            grid.passage_count()
        );
        Ok(grid)
    }

    fn enter(&mut self, position: Position) -> Frame {
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.rng);
        Frame {
            position,
            directions,
            next: 0,
        }
    }
}

/// Generate a perfect maze; identical arguments always give identical grids
///
/// # Errors
///
/// Returns `InvalidDimensions` if either dimension is zero or exceeds the
/// grid limit
pub fn generate(width: usize, height: usize, seed: u64) -> Result<Grid> {
    MazeGenerator::new(seed).carve(width, height)
}
