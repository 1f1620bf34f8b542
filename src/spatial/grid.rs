//! Square occupancy grid using left-edge encoding
//!
//! A placed square of size `s` only tags the `s` cells of its leftmost column
//! with the value `s`; its interior stays zero. Because pieces are always laid
//! at the lowest free cell in row-major order (bottom row first), this is
//! enough to answer every query the search needs:
//!
//! - scanning a row, a tagged cell tells how many columns can be skipped
//! - the cells above a frontier cell are always empty, so the largest square
//!   that fits there is bounded by the free run along its bottom row alone

use bitvec::prelude::*;
use ndarray::Array2;
use std::fmt;

use crate::io::configuration::TAG_SYMBOLS;
use crate::spatial::Location;

/// Side length of the square covered by `i` pieces of size `i` for `i = 1..=K`
///
/// The total area is the sum of cubes `1³ + … + K³`, which always equals
/// `(K(K+1)/2)²`, so the side is the triangular number of `K`.
pub const fn grid_width(max_piece_size: usize) -> usize {
    max_piece_size * (max_piece_size + 1) / 2
}

/// A single square laid during the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Bottom-left corner of the square
    pub location: Location,
    /// Side length of the square
    pub size: usize,
}

impl Placement {
    /// Create a placement record
    pub const fn new(location: Location, size: usize) -> Self {
        Self { location, size }
    }
}

/// Occupancy grid for one search run
///
/// Cells are stored as `[row, column]` so that a row-major scan walks
/// contiguous memory. A tag of 0 means the cell carries no left edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<u8>,
    width: usize,
    max_piece_size: usize,
}

impl Grid {
    /// Create an empty grid of the given side length
    pub fn new(width: usize, max_piece_size: usize) -> Self {
        Self {
            cells: Array2::zeros((width, width)),
            width,
            max_piece_size,
        }
    }

    /// Create the empty grid sized for pieces `1..=max_piece_size`
    pub fn for_max_piece_size(max_piece_size: usize) -> Self {
        Self::new(grid_width(max_piece_size), max_piece_size)
    }

    /// Side length of the grid
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Largest piece size the grid will ever report as fitting
    pub const fn max_piece_size(&self) -> usize {
        self.max_piece_size
    }

    /// Raw tag array, indexed `[row, column]`
    pub const fn cells(&self) -> &Array2<u8> {
        &self.cells
    }

    /// Occupancy tag at a location
    ///
    /// # Panics
    ///
    /// Panics if the location lies outside the grid
    pub fn tag(&self, location: Location) -> u8 {
        self.cell(location.x, location.y)
    }

    /// Whether the cell carries no tag
    ///
    /// # Panics
    ///
    /// Panics if the location lies outside the grid
    pub fn is_free(&self, location: Location) -> bool {
        self.cell(location.x, location.y) == 0
    }

    /// Whether no piece is currently placed
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&tag| tag == 0)
    }

    /// First free cell at or after `from` in row-major order
    ///
    /// Landing on a tagged cell jumps the column forward by the tag, which is
    /// the width of the square whose left edge was hit. Returns `None` once
    /// the scan runs off the top row, meaning the grid is fully covered.
    ///
    /// # Panics
    ///
    /// Panics if `from` is on a valid row but past the last column
    pub fn next_free_location(&self, from: Location) -> Option<Location> {
        let Location { mut x, mut y } = from;
        if y >= self.width {
            return None;
        }

        loop {
            let tag = self.cell(x, y);
            if tag == 0 {
                return Some(Location::new(x, y));
            }

            x += usize::from(tag);
            if x >= self.width {
                x = 0;
                y += 1;
                if y >= self.width {
                    return None;
                }
            }
        }
    }

    /// Largest square that fits with its bottom-left corner at `location`
    ///
    /// Only the bottom row is inspected: cells above a frontier cell are
    /// always empty. The result is bounded by the piece limit and by the
    /// distance to the right and top borders. Returns `None` when the cell
    /// itself is occupied.
    ///
    /// # Panics
    ///
    /// Panics if the location lies outside the grid
    pub fn max_square_at(&self, location: Location) -> Option<usize> {
        if !self.is_free(location) {
            return None;
        }

        let bound = self
            .max_piece_size
            .min(self.width - location.x)
            .min(self.width - location.y);

        let blocked = (1..bound).find(|&offset| self.cell(location.x + offset, location.y) != 0);
        Some(blocked.unwrap_or(bound))
    }

    /// Lay a square by tagging its left-edge column with `size`
    ///
    /// The covered region must be empty; this is not re-validated.
    ///
    /// # Panics
    ///
    /// Panics if the left-edge column leaves the grid
    pub fn place(&mut self, location: Location, size: usize) {
        debug_assert!(size >= 1 && size <= self.max_piece_size);
        debug_assert!(self.is_free(location));

        let tag = size as u8;
        for row in location.y..location.y + size {
            *self.cell_mut(location.x, row) = tag;
        }
    }

    /// Remove a square previously laid with the same location and size
    ///
    /// Removals must mirror placements in LIFO order.
    ///
    /// # Panics
    ///
    /// Panics if the left-edge column does not hold a square of `size`,
    /// which means the placement stack discipline has been broken
    pub fn unplace(&mut self, location: Location, size: usize) {
        let tag = size as u8;
        for row in location.y..location.y + size {
            let cell = self.cell_mut(location.x, row);
            assert_eq!(
                *cell, tag,
                "unplace of size {size} at {location} does not match the grid"
            );
            *cell = 0;
        }
    }

    /// Rebuild the placement list from the tags, in placement order
    ///
    /// The first uncovered cell in row-major order is always the bottom-left
    /// corner of the next square and carries its size. Cells that are neither
    /// covered nor tagged are gaps and are skipped.
    pub fn derive_placements(&self) -> Vec<Placement> {
        let width = self.width;
        let mut covered = bitvec![0; width * width];
        let mut placements = Vec::new();

        for y in 0..width {
            for x in 0..width {
                let location = Location::new(x, y);
                if covered.get(location.linear_index(width)).as_deref() == Some(&true) {
                    continue;
                }

                let size = usize::from(self.cell(x, y));
                if size == 0 {
                    continue;
                }

                for row in y..(y + size).min(width) {
                    for col in x..(x + size).min(width) {
                        covered.set(row * width + col, true);
                    }
                }
                placements.push(Placement::new(location, size));
            }
        }

        placements
    }

    // Out-of-range access is a caller contract violation and must panic
    #[allow(clippy::indexing_slicing)]
    fn cell(&self, x: usize, y: usize) -> u8 {
        self.cells[[y, x]]
    }

    #[allow(clippy::indexing_slicing)]
    fn cell_mut(&mut self, x: usize, y: usize) -> &mut u8 {
        &mut self.cells[[y, x]]
    }
}

/// Renders the top row first, one symbol per cell
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::with_capacity(self.width);
        for y in (0..self.width).rev() {
            line.clear();
            for x in 0..self.width {
                let tag = usize::from(self.cell(x, y));
                line.push(char::from(TAG_SYMBOLS.get(tag).copied().unwrap_or(b'?')));
            }
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
