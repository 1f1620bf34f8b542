//! Edge heuristics that skip placements no complete tiling can contain

use crate::algorithm::inventory::{Inventory, PieceSet};
use crate::spatial::Location;

/// Placement filter applied before a candidate is tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruningRule {
    /// Skip small squares close to the border
    ///
    /// Only valid for the standard piece set, whose piece mix guarantees
    /// that a unit square hugging the border can never be surrounded.
    #[default]
    Symmetry,
    /// Try every candidate
    Disabled,
}

impl PruningRule {
    /// The rule whose geometric assumptions hold for the given pieces
    pub const fn for_inventory(inventory: &Inventory) -> Self {
        match inventory.kind() {
            PieceSet::Standard => Self::Symmetry,
            PieceSet::Custom => Self::Disabled,
        }
    }

    /// Whether placing `size` at `location` can be skipped
    ///
    /// - size 1 never sits in the two outermost rings
    /// - size 3 and above never sits at column or row 1, nor at the last
    ///   column or row
    /// - size 5 and above never sits at column or row 2, nor at `width - 2`
    ///
    /// The far-side bound for size 3 is `width - 1`, the border itself,
    /// while the near side uses one ring in. Changing it alters which
    /// branches are explored, so it is kept as is.
    pub const fn can_skip(self, location: Location, size: usize, width: usize) -> bool {
        if matches!(self, Self::Disabled) {
            return false;
        }

        let Location { x, y } = location;
        let last = width.saturating_sub(1);
        let second_last = width.saturating_sub(2);

        if size == 1 && (x <= 1 || y <= 1 || x >= second_last || y >= second_last) {
            return true;
        }

        if size >= 3 && (x == 1 || y == 1 || x == last || y == last) {
            return true;
        }

        size >= 5 && (x == 2 || y == 2 || x == second_last || y == second_last)
    }
}
