//! Lee wavefront solver
//!
//! Forward expansion labels each reached cell with its distance from the
//! start plus one, so a label of 0 keeps meaning "not reached". The back-trace
//! then walks from the exit down the labels, preferring west, north, east and
//! south in that order when several neighbours qualify.

use log::debug;
use ndarray::Array2;

use crate::io::error::{MazeError, Result};
use crate::spatial::{Direction, Grid, Marker, Position};

/// Distance labels produced by the forward expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wavefront {
    labels: Array2<u32>,
    steps: usize,
    start: Position,
    exit: Position,
}

impl Wavefront {
    /// Label matrix indexed `[row, col]`; 0 means unreached
    pub const fn labels(&self) -> &Array2<u32> {
        &self.labels
    }

    /// Label of one cell, 0 for unreached or out-of-bounds cells
    pub fn label(&self, position: Position) -> u32 {
        self.labels
            .get([position.row, position.col])
            .copied()
            .unwrap_or(0)
    }

    /// Number of expansion iterations performed
    ///
    /// Equals the start-to-exit distance, except that at least one
    /// iteration always runs.
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Cell the wavefront started from
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Cell the wavefront stopped at
    pub const fn exit(&self) -> Position {
        self.exit
    }

    /// Number of passages between start and exit
    pub fn distance(&self) -> usize {
        self.label(self.exit).saturating_sub(1) as usize
    }
}

/// Boolean grid marking the cells of one shortest path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionOverlay {
    cells: Array2<bool>,
}

impl SolutionOverlay {
    /// Create an overlay with no cell marked
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), false),
        }
    }

    /// Create an overlay marking every in-bounds cell of `path`
    pub fn from_path(width: usize, height: usize, path: &[Position]) -> Self {
        let mut overlay = Self::new(width, height);
        for &position in path {
            overlay.mark(position);
        }
        overlay
    }

    fn mark(&mut self, position: Position) {
        if let Some(cell) = self.cells.get_mut([position.row, position.col]) {
            *cell = true;
        }
    }

    /// Whether `position` lies on the path
    pub fn contains(&self, position: Position) -> bool {
        self.cells
            .get([position.row, position.col])
            .copied()
            .unwrap_or(false)
    }

    /// Number of marked cells
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|&&on_path| on_path).count()
    }

    /// Whether no cell is marked
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Marked positions, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &on_path)| on_path)
            .map(|((row, col), _)| Position::new(col, row))
    }

    /// 0/1 matrix indexed `[row, col]`
    pub fn to_matrix(&self) -> Array2<u8> {
        self.cells.mapv(u8::from)
    }
}

/// Everything one solver run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    wavefront: Wavefront,
    overlay: SolutionOverlay,
    path: Vec<Position>,
}

impl Solution {
    /// Distance labels of the forward expansion
    pub const fn wavefront(&self) -> &Wavefront {
        &self.wavefront
    }

    /// Cells on the traced path
    pub const fn overlay(&self) -> &SolutionOverlay {
        &self.overlay
    }

    /// Traced path from start to exit, both included
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Number of expansion iterations performed
    pub const fn steps(&self) -> usize {
        self.wavefront.steps
    }
}

fn ensure_contains(grid: &Grid, position: Position) -> Result<()> {
    if grid.contains(position) {
        Ok(())
    } else {
        Err(MazeError::OutOfBounds {
            position,
            dimensions: (grid.width(), grid.height()),
        })
    }
}

/// Expand the wavefront from `start` until it labels `exit`
///
/// Iteration `m` labels every unlabelled open neighbour of the cells
/// labelled `m` with `m + 1`. The expansion is capped at `width × height`
/// iterations and also stops as soon as a frontier comes up empty.
///
/// # Errors
///
/// Returns `OutOfBounds` if `start` or `exit` lies outside the grid, or
/// `UnreachableExit` if the exit is never labelled
pub fn propagate(grid: &Grid, start: Position, exit: Position) -> Result<Wavefront> {
    ensure_contains(grid, start)?;
    ensure_contains(grid, exit)?;

    let mut labels = Array2::<u32>::zeros((grid.height(), grid.width()));
    if let Some(label) = labels.get_mut([start.row, start.col]) {
        *label = 1;
    }

    let iteration_cap = grid.len();
    let mut frontier = vec![start];
    let mut current_label: u32 = 1;
    let mut steps = 0;

    loop {
        if steps >= iteration_cap {
            return Err(MazeError::UnreachableExit {
                start,
                exit,
                iterations: steps,
            });
        }
        steps += 1;

        let next_label = current_label + 1;
        let mut next_frontier = Vec::new();
        for &cell in &frontier {
            for direction in Direction::ALL {
                let Some(neighbor) = grid.passage(cell, direction) else {
                    continue;
                };
                let unlabelled = labels
                    .get_mut([neighbor.row, neighbor.col])
                    .filter(|label| **label == 0);
                if let Some(label) = unlabelled {
                    *label = next_label;
                    next_frontier.push(neighbor);
                }
            }
        }

        let exit_reached = labels
            .get([exit.row, exit.col])
            .is_some_and(|&label| label != 0);
        if exit_reached {
            break;
        }
        if next_frontier.is_empty() {
            return Err(MazeError::UnreachableExit {
                start,
                exit,
                iterations: steps,
            });
        }

        frontier = next_frontier;
        current_label = next_label;
    }

    debug!("wavefront from {start} reached {exit} after {steps} steps");
    Ok(Wavefront {
        labels,
        steps,
        start,
        exit,
    })
}

/// Walk the labels back from the exit to the start
///
/// Returns the path ordered from start to exit.
///
/// # Errors
///
/// Returns `UnreachableExit` if the exit carries no label, or
/// `CorruptLabels` if some cell has no open neighbour with the preceding
/// label (labels not produced by [`propagate`] on this grid)
pub fn trace_path(grid: &Grid, wavefront: &Wavefront) -> Result<Vec<Position>> {
    let mut current = wavefront.exit;
    let mut label = wavefront.label(current);
    if label == 0 {
        return Err(MazeError::UnreachableExit {
            start: wavefront.start,
            exit: wavefront.exit,
            iterations: wavefront.steps,
        });
    }

    let mut on_path = SolutionOverlay::new(grid.width(), grid.height());
    on_path.mark(current);
    let mut path = vec![current];

    while label > 1 {
        let previous = Direction::BACKTRACE_ORDER
            .into_iter()
            .filter_map(|direction| grid.passage(current, direction))
            .find(|&neighbor| {
                wavefront.label(neighbor) == label - 1 && !on_path.contains(neighbor)
            })
            .ok_or(MazeError::CorruptLabels {
                position: current,
                label,
            })?;

        on_path.mark(previous);
        path.push(previous);
        current = previous;
        label -= 1;
    }

    path.reverse();
    Ok(path)
}

/// Back-trace phase producing the path overlay
///
/// # Errors
///
/// Same conditions as [`trace_path`]
pub fn backtrace(grid: &Grid, wavefront: &Wavefront) -> Result<SolutionOverlay> {
    let path = trace_path(grid, wavefront)?;
    Ok(SolutionOverlay::from_path(
        grid.width(),
        grid.height(),
        &path,
    ))
}

/// Solve from `start` to the cell marked [`Marker::Exit`]
///
/// # Errors
///
/// Returns `MissingMarker` if no exit is marked, otherwise the errors of
/// [`solve_between`]
pub fn solve(grid: &Grid, start: Position) -> Result<Solution> {
    let exit = grid
        .find_marker(Marker::Exit)
        .ok_or(MazeError::MissingMarker {
            marker: Marker::Exit,
        })?;
    solve_between(grid, start, exit)
}

/// Solve from `start` to an explicit `exit`
///
/// # Errors
///
/// Returns `OutOfBounds` for positions outside the grid and
/// `UnreachableExit` when the grid is not connected
pub fn solve_between(grid: &Grid, start: Position, exit: Position) -> Result<Solution> {
    let wavefront = propagate(grid, start, exit)?;
    let path = trace_path(grid, &wavefront)?;
    let overlay = SolutionOverlay::from_path(grid.width(), grid.height(), &path);

    Ok(Solution {
        wavefront,
        overlay,
        path,
    })
}
