//! Exhaustive enumeration of Partridge puzzle tilings
//!
//! For a largest piece size `K`, the pieces are `i` squares of size `i` for
//! every `i = 1..=K`. Their areas add up to `(K(K+1)/2)²`, and the search
//! finds every way to lay them into that square with no gaps or overlaps.
//!
//! The search is a depth-first backtracking walk over a single mutable grid
//! and piece inventory. The grid marks only the left edge of each placed
//! square, which is enough to skip whole squares when scanning for the next
//! free cell.

#![forbid(unsafe_code)]

/// Piece inventory, pruning rules and the backtracking search
pub mod algorithm;
/// Command-line interface, configuration, errors and solution output
pub mod io;
/// Grid coordinates and the occupancy grid
pub mod spatial;

pub use io::error::{PuzzleError, Result};
