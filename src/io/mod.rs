//! Rendering, export and command-line plumbing around the maze core

/// Command-line interface for generating, solving and exporting mazes
pub mod cli;
/// Defaults and constants shared by the CLI and the renderers
pub mod configuration;
/// Error types for maze operations
pub mod error;
/// PNG snapshot export
pub mod image;
/// Progress display for batch generation
pub mod progress;
/// ASCII rendering of grids, overlays and label matrices
pub mod text;
