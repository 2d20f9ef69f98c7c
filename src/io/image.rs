//! PNG snapshot export of a maze and an optional solution overlay

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::algorithm::solver::SolutionOverlay;
use crate::io::configuration::{
    CELL_SIZE_PX, EXIT_COLOR, FLOOR_COLOR, MAX_IMAGE_SIDE_PX, SOLUTION_COLOR, START_COLOR,
    WALL_COLOR, WALL_THICKNESS_PX,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::{Direction, Grid, Marker, Position};

// Distance between the origins of two neighbouring cells
const PITCH: u32 = CELL_SIZE_PX + WALL_THICKNESS_PX;

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: [u8; 4]) {
    for py in y..y.saturating_add(height) {
        for px in x..x.saturating_add(width) {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = Rgba(color);
            }
        }
    }
}

/// Pixel dimensions of the snapshot of a `width` × `height` grid
pub const fn image_dimensions(width: usize, height: usize) -> (u32, u32) {
    (
        width as u32 * PITCH + WALL_THICKNESS_PX,
        height as u32 * PITCH + WALL_THICKNESS_PX,
    )
}

/// Draw the maze into an in-memory image
///
/// The buffer is allocated at [`image_dimensions`] without a size check; use
/// [`export_maze_as_png`] for grids of unknown size.
///
/// Cells on the overlay are tinted, the exit is filled and the start gets an
/// inset square. Walls are drawn last so they stay on top.
pub fn render_image(grid: &Grid, overlay: Option<&SolutionOverlay>) -> RgbaImage {
    let (img_width, img_height) = image_dimensions(grid.width(), grid.height());
    let mut img = ImageBuffer::from_pixel(img_width, img_height, Rgba(FLOOR_COLOR));
    let inset = CELL_SIZE_PX / 4;

    for position in grid.positions() {
        let x = position.col as u32 * PITCH + WALL_THICKNESS_PX;
        let y = position.row as u32 * PITCH + WALL_THICKNESS_PX;
        let Ok(cell) = grid.cell(position) else {
            continue;
        };

        if overlay.is_some_and(|o| o.contains(position)) {
            fill_rect(&mut img, x, y, CELL_SIZE_PX, CELL_SIZE_PX, SOLUTION_COLOR);
        }
        if cell.has_marker(Marker::Exit) {
            fill_rect(&mut img, x, y, CELL_SIZE_PX, CELL_SIZE_PX, EXIT_COLOR);
        }
        if cell.has_marker(Marker::Start) {
            fill_rect(
                &mut img,
                x + inset,
                y + inset,
                CELL_SIZE_PX - 2 * inset,
                CELL_SIZE_PX - 2 * inset,
                START_COLOR,
            );
        }
    }

    for position in grid.positions() {
        draw_walls(&mut img, grid, position);
    }

    img
}

fn draw_walls(img: &mut RgbaImage, grid: &Grid, position: Position) {
    let Ok(cell) = grid.cell(position) else {
        return;
    };
    let x = position.col as u32 * PITCH;
    let y = position.row as u32 * PITCH;
    let span = PITCH + WALL_THICKNESS_PX;

    if cell.has_wall(Direction::North) {
        fill_rect(img, x, y, span, WALL_THICKNESS_PX, WALL_COLOR);
    }
    if cell.has_wall(Direction::West) {
        fill_rect(img, x, y, WALL_THICKNESS_PX, span, WALL_COLOR);
    }
    // South and east edges are shared with the next cell except on the border
    if position.row + 1 == grid.height() && cell.has_wall(Direction::South) {
        fill_rect(img, x, y + PITCH, span, WALL_THICKNESS_PX, WALL_COLOR);
    }
    if position.col + 1 == grid.width() && cell.has_wall(Direction::East) {
        fill_rect(img, x + PITCH, y, WALL_THICKNESS_PX, span, WALL_COLOR);
    }
}

/// Export the maze as a PNG image, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The snapshot would exceed [`MAX_IMAGE_SIDE_PX`] on either side
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_maze_as_png(
    grid: &Grid,
    overlay: Option<&SolutionOverlay>,
    output_path: &Path,
) -> Result<()> {
    let (img_width, img_height) = image_dimensions(grid.width(), grid.height());
    if img_width > MAX_IMAGE_SIDE_PX || img_height > MAX_IMAGE_SIDE_PX {
        return Err(invalid_parameter(
            "output",
            &format!("{img_width}x{img_height} px"),
            &format!("snapshots are limited to {MAX_IMAGE_SIDE_PX} px per side"),
        ));
    }

    let img = render_image(grid, overlay);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
