//! Maze defaults and rendering constants

// Default values for configurable parameters
/// Fixed seed for the reproducible demo maze
pub const DEFAULT_SEED: i64 = 1234;
/// Default maze width in cells
pub const DEFAULT_WIDTH: usize = 5;
/// Default maze height in cells
pub const DEFAULT_HEIGHT: usize = 5;
/// Default number of mazes generated per run
pub const DEFAULT_COUNT: usize = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// PNG snapshot layout
/// Side of a cell interior in pixels
pub const CELL_SIZE_PX: u32 = 24;
/// Thickness of a wall stroke in pixels
pub const WALL_THICKNESS_PX: u32 = 6;
/// Largest snapshot side in pixels, 545 cells at the default layout
pub const MAX_IMAGE_SIDE_PX: u32 = 16_384;

/// Background colour of open floor
pub const FLOOR_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Colour of wall strokes
pub const WALL_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Fill for cells on the solution path
pub const SOLUTION_COLOR: [u8; 4] = [200, 200, 250, 255];
/// Fill for the exit cell
pub const EXIT_COLOR: [u8; 4] = [100, 100, 200, 255];
/// Fill for the start cell
pub const START_COLOR: [u8; 4] = [255, 0, 0, 255];

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
