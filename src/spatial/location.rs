//! Grid coordinates with row-major advancement

use std::fmt;

/// A cell coordinate, 0-based, with row 0 at the bottom of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Location {
    /// The bottom-left corner, where every search starts
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a location from column and row indices
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`, wrapping to the start of the next row
    ///
    /// When `x + dx` reaches `width` the result is `(0, y + dy + 1)`.
    /// The returned row may lie past the top of the grid; callers treat
    /// that as an exhausted scan.
    #[must_use]
    pub const fn advance(self, dx: usize, dy: usize, width: usize) -> Self {
        if self.x + dx >= width {
            Self::new(0, self.y + dy + 1)
        } else {
            Self::new(self.x + dx, self.y + dy)
        }
    }

    /// Row-major index of this cell in a grid of the given width
    pub const fn linear_index(self, width: usize) -> usize {
        self.y * width + self.x
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
