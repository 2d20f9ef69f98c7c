//! Start and exit marker placement
//!
//! Placement is a separate step after carving: the maze itself does not
//! depend on where the endpoints go.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{MazeError, Result};
use crate::spatial::{Grid, Marker, Position};

/// Start and exit cells chosen for a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    /// Cell marked as start
    pub start: Position,
    /// Cell marked as exit
    pub exit: Position,
}

/// Policy for choosing the start and exit cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerPlacement {
    /// Start in the top-left corner, exit in the middle of the bottom row
    #[default]
    Fixed,
    /// Start on a seeded-random row of the first column, exit as for `Fixed`
    RandomStart {
        /// Seed for the row choice
        seed: u64,
    },
    /// Caller-chosen cells
    Custom {
        /// Start cell
        start: Position,
        /// Exit cell
        exit: Position,
    },
}

/// Exit used by the built-in policies: middle column, bottom row
pub const fn default_exit(width: usize, height: usize) -> Position {
    Position::new(width.saturating_sub(1) / 2, height.saturating_sub(1))
}

impl MarkerPlacement {
    /// Resolve the policy to concrete cells of `grid`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if a custom cell lies outside the grid
    pub fn endpoints(self, grid: &Grid) -> Result<Endpoints> {
        let exit = default_exit(grid.width(), grid.height());
        let endpoints = match self {
            Self::Fixed => Endpoints {
                start: Position::new(0, 0),
                exit,
            },
            Self::RandomStart { seed } => {
                let row = StdRng::seed_from_u64(seed).random_range(0..grid.height());
                Endpoints {
                    start: Position::new(0, row),
                    exit,
                }
            }
            Self::Custom { start, exit } => Endpoints { start, exit },
        };

        for position in [endpoints.start, endpoints.exit] {
            if !grid.contains(position) {
                return Err(MazeError::OutOfBounds {
                    position,
                    dimensions: (grid.width(), grid.height()),
                });
            }
        }
        Ok(endpoints)
    }
}

/// Replace the start and exit markers of `grid` according to `placement`
///
/// # Errors
///
/// Returns `OutOfBounds` if a custom cell lies outside the grid; the grid is
/// left untouched in that case
pub fn place_markers(grid: &mut Grid, placement: MarkerPlacement) -> Result<Endpoints> {
    let endpoints = placement.endpoints(grid)?;

    grid.clear_marker(Marker::Start);
    grid.clear_marker(Marker::Exit);
    grid.set_marker(endpoints.start, Marker::Start)?;
    grid.set_marker(endpoints.exit, Marker::Exit)?;

    Ok(endpoints)
}
