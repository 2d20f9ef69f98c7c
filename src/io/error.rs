//! Error types for grid, generation, solving and export operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::{Marker, Position};

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Grid dimensions are zero or too large
    InvalidDimensions {
        /// Requested number of columns
        width: usize,
        /// Requested number of rows
        height: usize,
        /// Which constraint was violated
        reason: &'static str,
    },

    /// Coordinate lies outside the grid
    OutOfBounds {
        /// The offending position
        position: Position,
        /// Grid dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// Passage requested between cells that do not share an edge
    NotAdjacent {
        /// First cell
        from: Position,
        /// Second cell
        to: Position,
    },

    /// The wavefront never labelled the exit
    ///
    /// Only happens on grids that are not connected, e.g. grids that were
    /// not produced by the generator.
    UnreachableExit {
        /// Where the wavefront started
        start: Position,
        /// The exit that was never reached
        exit: Position,
        /// Wavefront iterations performed before giving up
        iterations: usize,
    },

    /// No cell carries the required marker
    MissingMarker {
        /// The marker that was looked up
        marker: Marker,
    },

    /// Back-trace found no neighbour with the preceding label
    CorruptLabels {
        /// Cell where the trace got stuck
        position: Position,
        /// Label of that cell
        label: u32,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save a PNG snapshot
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system or stream operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid grid dimensions {width}x{height}: {reason}")
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position {position} is outside the {}x{} grid",
                    dimensions.0, dimensions.1
                )
            }
            Self::NotAdjacent { from, to } => {
                write!(f, "Cells {from} and {to} are not adjacent")
            }
            Self::UnreachableExit {
                start,
                exit,
                iterations,
            } => {
                write!(
                    f,
                    "Exit {exit} is unreachable from {start} after {iterations} wavefront iterations"
                )
            }
            Self::MissingMarker { marker } => {
                write!(f, "No cell is marked as {marker}")
            }
            Self::CorruptLabels { position, label } => {
                write!(
                    f,
                    "Back-trace stuck at {position} with label {label}: no neighbour labelled {}",
                    label.saturating_sub(1)
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
