use std::fmt;

use crate::io::configuration::MAX_SUPPORTED_PIECE_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid_width;

/// Which rule produced the piece counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceSet {
    /// Exactly `i` pieces of size `i` for every `i = 1..=K`
    Standard,
    /// Arbitrary counts, such as the fixed test configurations
    Custom,
}

/// Remaining piece counts per size
///
/// Sizes are 1-based; the count for size `s` lives at index `s - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    counts: Vec<u32>,
    kind: PieceSet,
}

impl Inventory {
    /// The Partridge set: `i` pieces of size `i` for `i = 1..=max_piece_size`
    pub fn standard(max_piece_size: usize) -> Self {
        Self {
            counts: (1..=max_piece_size as u32).collect(),
            kind: PieceSet::Standard,
        }
    }

    /// Arbitrary counts, `counts[i]` being the number of pieces of size `i + 1`
    ///
    /// # Errors
    ///
    /// Returns an error if no sizes are given, if the largest size exceeds
    /// [`MAX_SUPPORTED_PIECE_SIZE`], or if the pieces do not cover the grid
    /// derived from the largest size exactly
    pub fn from_counts(counts: Vec<u32>) -> Result<Self> {
        let max_piece_size = counts.len();
        if max_piece_size == 0 {
            return Err(invalid_parameter(
                "counts",
                &"[]",
                &"at least one piece size is required",
            ));
        }
        if max_piece_size > MAX_SUPPORTED_PIECE_SIZE {
            return Err(invalid_parameter(
                "counts",
                &max_piece_size,
                &format!("piece sizes above {MAX_SUPPORTED_PIECE_SIZE} are not supported"),
            ));
        }

        let inventory = Self {
            counts,
            kind: PieceSet::Custom,
        };

        let width = grid_width(max_piece_size) as u64;
        let area = inventory.total_area();
        if area != width * width {
            return Err(invalid_parameter(
                "counts",
                &format!("{:?}", inventory.counts),
                &format!("pieces cover {area} cells but the grid has {}", width * width),
            ));
        }

        Ok(inventory)
    }

    /// Fixed small configurations with known solution counts
    ///
    /// Available for piece sizes 2, 3 and 4, whose grids have 4, 32 and 79
    /// tilings respectively when pruning is disabled.
    pub fn test_configuration(max_piece_size: usize) -> Option<Self> {
        let counts = match max_piece_size {
            2 => vec![5, 1],
            3 => vec![5, 1, 3],
            4 => vec![0, 9, 0, 4],
            _ => return None,
        };
        Some(Self {
            counts,
            kind: PieceSet::Custom,
        })
    }

    /// Largest piece size tracked
    pub const fn max_piece_size(&self) -> usize {
        self.counts.len()
    }

    /// Rule that produced the counts
    pub const fn kind(&self) -> PieceSet {
        self.kind
    }

    /// Remaining counts, index `i` holding size `i + 1`
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Total number of pieces remaining
    pub fn total_pieces(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    /// Combined area of all remaining pieces
    pub fn total_area(&self) -> u64 {
        self.counts
            .iter()
            .zip(1u64..)
            .map(|(&count, size)| u64::from(count) * size * size)
            .sum()
    }

    /// Smallest size with pieces left
    pub fn smallest_available_size(&self) -> Option<usize> {
        self.counts
            .iter()
            .position(|&count| count > 0)
            .map(|index| index + 1)
    }

    /// Largest size not above `max_size` with pieces left
    pub fn biggest_available_size(&self, max_size: usize) -> Option<usize> {
        let limit = max_size.min(self.counts.len());
        self.counts
            .get(..limit)
            .and_then(|counts| counts.iter().rposition(|&count| count > 0))
            .map(|index| index + 1)
    }

    /// Whether at least one piece of `size` is left
    pub fn has_size(&self, size: usize) -> bool {
        self.count_of(size) > 0
    }

    /// Pieces of `size` left; sizes outside the tracked range have none
    pub fn count_of(&self, size: usize) -> u32 {
        size.checked_sub(1)
            .and_then(|index| self.counts.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Remove one piece of `size`
    ///
    /// # Panics
    ///
    /// Panics if no piece of `size` is left
    pub fn take(&mut self, size: usize) {
        let count = self.slot(size);
        assert!(*count > 0, "no piece of size {size} left to take");
        *count -= 1;
    }

    /// Return one piece of `size` taken earlier
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside the tracked range
    pub fn give(&mut self, size: usize) {
        *self.slot(size) += 1;
    }

    // Sizes outside 1..=K are a caller contract violation and must panic
    #[allow(clippy::indexing_slicing)]
    fn slot(&mut self, size: usize) -> &mut u32 {
        &mut self.counts[size - 1]
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inventory:")?;
        for (size, count) in (1..).zip(&self.counts) {
            write!(f, " [{size}x{size}: {count}]")?;
        }
        Ok(())
    }
}
