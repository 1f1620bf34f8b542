//! Spatial data structures for the tiling search
//!
//! This module contains:
//! - Cell coordinates and row-major advancement
//! - The left-edge encoded occupancy grid

/// Occupancy grid and placement records
pub mod grid;
/// Cell coordinates
pub mod location;

pub use grid::{Grid, Placement, grid_width};
pub use location::Location;
