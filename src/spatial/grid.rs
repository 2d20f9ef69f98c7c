//! Wall-bitmask cell grid with start and exit markers
//!
//! Every cell starts with all four walls closed. Carving a passage opens the
//! shared edge on both cells in the same call, so two adjacent cells always
//! agree on whether a wall separates them. The outer border is never opened.

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::Direction;

const ALL_WALLS: u8 = 0b1111;

/// Column/row coordinate of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index, 0 is the west border
    pub col: usize,
    /// Row index, 0 is the north border
    pub row: usize,
}

impl Position {
    /// Create a position from a column and a row
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Position one step away in `direction`
    ///
    /// Returns `None` when the step would need a negative coordinate. Upper
    /// bounds are not checked here, see [`Grid::neighbor`].
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        match (
            self.col.checked_add_signed(dx),
            self.row.checked_add_signed(dy),
        ) {
            (Some(col), Some(row)) => Some(Self { col, row }),
            _ => None,
        }
    }

    /// Direction leading from `self` to an orthogonally adjacent `other`
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(direction) == Some(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl FromStr for Position {
    type Err = MazeError;

    /// Parse `COL,ROW`
    fn from_str(s: &str) -> Result<Self> {
        let (col, row) = s
            .split_once(',')
            .ok_or_else(|| invalid_parameter("position", &s, &"expected COL,ROW"))?;
        let col = col
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid_parameter("position", &s, &e))?;
        let row = row
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid_parameter("position", &s, &e))?;
        Ok(Self::new(col, row))
    }
}

/// Role a cell can play in a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Where the solver starts
    Start,
    /// Where the solver stops
    Exit,
}

impl Marker {
    const fn bit(self) -> u8 {
        match self {
            Self::Start => 0b01,
            Self::Exit => 0b10,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Exit => f.write_str("exit"),
        }
    }
}

/// Closed walls and role markers of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    walls: u8,
    markers: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::sealed()
    }
}

impl Cell {
    /// A cell with all four walls closed and no markers
    pub const fn sealed() -> Self {
        Self {
            walls: ALL_WALLS,
            markers: 0,
        }
    }

    /// Whether the wall on the `direction` side is closed
    pub const fn has_wall(self, direction: Direction) -> bool {
        self.walls & direction.bit() != 0
    }

    /// Whether all four walls are still closed
    pub const fn is_sealed(self) -> bool {
        self.walls == ALL_WALLS
    }

    /// Number of open sides
    pub const fn open_sides(self) -> u32 {
        (!self.walls & ALL_WALLS).count_ones()
    }

    /// Whether the cell carries `marker`
    pub const fn has_marker(self, marker: Marker) -> bool {
        self.markers & marker.bit() != 0
    }

    const fn open(&mut self, direction: Direction) {
        self.walls &= !direction.bit();
    }

    const fn mark(&mut self, marker: Marker) {
        self.markers |= marker.bit();
    }

    const fn unmark(&mut self, marker: Marker) {
        self.markers &= !marker.bit();
    }
}

/// Rectangular maze grid indexed by [`Position`]
///
/// Cells are stored row-major in an `ndarray` matrix (`[row, col]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid where every wall is closed
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or larger than
    /// [`MAX_GRID_DIMENSION`]
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                reason: "dimensions must be positive",
            });
        }
        if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                reason: "dimensions exceed the grid limit",
            });
        }

        Ok(Self {
            cells: Array2::from_elem((height, width), Cell::sealed()),
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, grids have at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `position` lies inside the grid
    pub fn contains(&self, position: Position) -> bool {
        position.col < self.width() && position.row < self.height()
    }

    /// Cell at `position`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid
    pub fn cell(&self, position: Position) -> Result<Cell> {
        self.cells
            .get([position.row, position.col])
            .copied()
            .ok_or_else(|| self.out_of_bounds(position))
    }

    /// Whether the wall on the `direction` side of `position` is closed
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid
    pub fn has_wall(&self, position: Position, direction: Direction) -> Result<bool> {
        self.cell(position).map(|cell| cell.has_wall(direction))
    }

    /// In-bounds neighbour of `position` in `direction`
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        position
            .step(direction)
            .filter(|&neighbor| self.contains(neighbor))
    }

    /// Neighbour reachable through an open wall, if any
    pub fn passage(&self, position: Position, direction: Direction) -> Option<Position> {
        let open = self
            .cells
            .get([position.row, position.col])
            .is_some_and(|cell| !cell.has_wall(direction));
        if open {
            self.neighbor(position, direction)
        } else {
            None
        }
    }

    /// Whether a step in `direction` from `position` crosses an open wall
    pub fn is_passable(&self, position: Position, direction: Direction) -> bool {
        self.passage(position, direction).is_some()
    }

    /// Open the wall between two adjacent cells on both sides
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either cell lies outside the grid, or
    /// `NotAdjacent` if the cells do not share an edge
    pub fn carve_passage(&mut self, from: Position, to: Position) -> Result<()> {
        if !self.contains(from) {
            return Err(self.out_of_bounds(from));
        }
        if !self.contains(to) {
            return Err(self.out_of_bounds(to));
        }
        let direction = from
            .direction_to(to)
            .ok_or(MazeError::NotAdjacent { from, to })?;

        if let Some(cell) = self.cells.get_mut([from.row, from.col]) {
            cell.open(direction);
        }
        if let Some(cell) = self.cells.get_mut([to.row, to.col]) {
            cell.open(direction.opposite());
        }
        Ok(())
    }

    /// Tag the cell at `position` with `marker`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid
    pub fn set_marker(&mut self, position: Position, marker: Marker) -> Result<()> {
        let error = self.out_of_bounds(position);
        let cell = self
            .cells
            .get_mut([position.row, position.col])
            .ok_or(error)?;
        cell.mark(marker);
        Ok(())
    }

    /// Remove `marker` from every cell
    pub fn clear_marker(&mut self, marker: Marker) {
        for cell in &mut self.cells {
            cell.unmark(marker);
        }
    }

    /// First cell carrying `marker`, scanning row by row
    pub fn find_marker(&self, marker: Marker) -> Option<Position> {
        self.positions().find(|&position| {
            self.cells
                .get([position.row, position.col])
                .is_some_and(|cell| cell.has_marker(marker))
        })
    }

    /// All positions, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width();
        (0..self.height()).flat_map(move |row| (0..width).map(move |col| Position::new(col, row)))
    }

    /// Number of carved passages
    ///
    /// Each passage is counted once, from its west or north cell.
    pub fn passage_count(&self) -> usize {
        self.positions()
            .map(|position| {
                usize::from(self.is_passable(position, Direction::East))
                    + usize::from(self.is_passable(position, Direction::South))
            })
            .sum()
    }

    fn out_of_bounds(&self, position: Position) -> MazeError {
        MazeError::OutOfBounds {
            position,
            dimensions: (self.width(), self.height()),
        }
    }
}
