//! ASCII rendering of grids, solution overlays and label matrices
//!
//! Each cell row is drawn as two lines: a separator of `*` posts three
//! spaces apart, then the west edges (`|` or a space followed by the cell
//! interior). Only west walls are drawn inside the maze; a closing `*---`
//! border follows the last row.

use std::fmt::Display;

use ndarray::Array2;

use crate::algorithm::solver::SolutionOverlay;
use crate::spatial::{Direction, Grid, Marker, Position};

const OPEN_INTERIOR: &str = "   ";

/// Render the walls of `grid`
pub fn render(grid: &Grid) -> String {
    render_cells(grid, |_| OPEN_INTERIOR)
}

/// Render the walls of `grid` with the start (`S`), exit (`E`) and path
/// cells (`o`) drawn inside the cells
pub fn render_with_overlay(grid: &Grid, overlay: &SolutionOverlay) -> String {
    render_cells(grid, |position| {
        let cell = grid.cell(position).ok();
        if cell.is_some_and(|c| c.has_marker(Marker::Start)) {
            " S "
        } else if cell.is_some_and(|c| c.has_marker(Marker::Exit)) {
            " E "
        } else if overlay.contains(position) {
            " o "
        } else {
            OPEN_INTERIOR
        }
    })
}

fn render_cells<'a>(grid: &Grid, interior: impl Fn(Position) -> &'a str) -> String {
    let width = grid.width();
    // Two lines of `4 * width + 2` characters per row plus the border
    let mut text = String::with_capacity((2 * grid.height() + 1) * (4 * width + 2));

    for row in 0..grid.height() {
        for _ in 0..width {
            text.push_str("*   ");
        }
        text.push_str("*\n");

        for col in 0..width {
            let position = Position::new(col, row);
            if grid.has_wall(position, Direction::West).unwrap_or(true) {
                text.push('|');
            } else {
                text.push(' ');
            }
            text.push_str(interior(position));
        }
        text.push_str("|\n");
    }

    for _ in 0..width {
        text.push_str("*---");
    }
    text.push_str("*\n");
    text
}

/// Render a matrix one row per line, values separated by ` - `
///
/// Used for wavefront labels and 0/1 overlays.
pub fn render_matrix<T: Display>(values: &Array2<T>) -> String {
    let mut text = String::new();
    for row in values.rows() {
        let line = row
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" - ");
        text.push_str(&line);
        text.push('\n');
    }
    text
}
