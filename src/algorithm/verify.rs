//! Independent exact-cover check for reported tilings
//!
//! Full occupancy is rebuilt from the placement list alone, so the check does
//! not trust the left-edge tags that the search relies on.

use bitvec::prelude::*;

use crate::algorithm::search::{Solution, SolutionSink};
use crate::io::error::{PuzzleError, Result};
use crate::spatial::{Location, Placement};

/// Check that `placements` cover a `width × width` grid exactly once
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidTiling`] naming the first square that
/// leaves the grid, the first doubly covered cell, or the first gap in
/// row-major order
pub fn verify_tiling(width: usize, placements: &[Placement]) -> Result<()> {
    let mut covered = bitvec![0; width * width];

    for placement in placements {
        let Placement { location, size } = *placement;
        if size == 0 {
            return Err(PuzzleError::InvalidTiling {
                location,
                reason: "square has no area",
            });
        }
        if location.x + size > width || location.y + size > width {
            return Err(PuzzleError::InvalidTiling {
                location,
                reason: "square extends past the grid border",
            });
        }

        for y in location.y..location.y + size {
            for x in location.x..location.x + size {
                let cell = Location::new(x, y);
                let index = cell.linear_index(width);
                if covered.get(index).as_deref() == Some(&true) {
                    return Err(PuzzleError::InvalidTiling {
                        location: cell,
                        reason: "cell covered by more than one square",
                    });
                }
                covered.set(index, true);
            }
        }
    }

    match covered.first_zero() {
        Some(index) => Err(PuzzleError::InvalidTiling {
            location: Location::new(index % width, index / width),
            reason: "cell not covered by any square",
        }),
        None => Ok(()),
    }
}

/// Sink adapter that verifies every tiling before forwarding it
#[derive(Debug)]
pub struct VerifyingSink<S> {
    inner: S,
    verified: u64,
}

impl<S> VerifyingSink<S> {
    /// Wrap a sink
    pub const fn new(inner: S) -> Self {
        Self { inner, verified: 0 }
    }

    /// Number of tilings that passed verification
    pub const fn verified(&self) -> u64 {
        self.verified
    }

    /// Unwrap the forwarded sink
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: SolutionSink> SolutionSink for VerifyingSink<S> {
    fn accept(&mut self, solution: &Solution<'_>) -> Result<()> {
        verify_tiling(solution.grid().width(), &solution.placements())?;
        self.verified += 1;
        self.inner.accept(solution)
    }
}
