/// Remaining piece counts per size
pub mod inventory;
/// Edge heuristics for skipping dead placements
pub mod pruning;
/// Backtracking enumeration and its reporting interfaces
pub mod search;
/// Independent tiling verification
pub mod verify;

pub use inventory::{Inventory, PieceSet};
pub use pruning::PruningRule;
pub use search::{MetricsHook, SearchOrder, SearchStats, Searcher, Solution, SolutionSink};
