//! Grid model shared by the generator, the solver and the renderers
//!
//! This module contains:
//! - The constant direction table (offsets, wall bits, opposites)
//! - The wall-bitmask cell grid with start/exit markers

/// Cardinal directions as a constant lookup table
pub mod direction;
/// Cell grid with symmetric wall bitmasks
pub mod grid;

pub use direction::Direction;
pub use grid::{Cell, Grid, Marker, Position};
