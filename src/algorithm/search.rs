//! Depth-first enumeration of exact square tilings
//!
//! The searcher owns a single grid and inventory and mutates both in place.
//! Every placement is undone before the next sibling is tried, so a run ends
//! with both exactly as it started and nothing is ever copied per branch.

use std::fmt;
use std::time::{Duration, Instant};

use crate::algorithm::inventory::Inventory;
use crate::algorithm::pruning::PruningRule;
use crate::io::configuration::METRICS_CHECK_INTERVAL;
use crate::io::error::Result;
use crate::spatial::{Grid, Location, Placement};

/// Order in which candidate sizes are tried at each frontier cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    /// Smallest available size up to the largest fit
    ///
    /// A single comparison against the smallest available size prunes the
    /// whole frontier when nothing can fit.
    #[default]
    Ascending,
    /// Largest available fitting size down to 1, checking each size
    Descending,
}

/// Counters for one search session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier states visited
    pub recursions: u64,
    /// Complete tilings reported
    pub solutions: u64,
    /// Wall time since the session started
    pub elapsed: Duration,
}

impl SearchStats {
    /// Visited states per millisecond of wall time
    pub fn recursions_per_ms(&self) -> f64 {
        let millis = self.elapsed.as_secs_f64() * 1000.0;
        if millis > 0.0 {
            self.recursions as f64 / millis
        } else {
            0.0
        }
    }
}

/// A complete tiling, borrowed from the searcher while it is reported
#[derive(Debug, Clone, Copy)]
pub struct Solution<'a> {
    index: u64,
    grid: &'a Grid,
}

impl<'a> Solution<'a> {
    /// Wrap a fully covered grid
    pub const fn new(index: u64, grid: &'a Grid) -> Self {
        Self { index, grid }
    }

    /// 1-based sequence number within the session
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// Final grid contents
    pub const fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Pieces in the order they were placed
    pub fn placements(&self) -> Vec<Placement> {
        self.grid.derive_placements()
    }
}

impl fmt::Display for Solution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.grid, f)
    }
}

/// Receives every complete tiling as it is found
pub trait SolutionSink {
    /// Handle one solution
    ///
    /// # Errors
    ///
    /// Any error stops the search and is returned from [`Searcher::run`]
    fn accept(&mut self, solution: &Solution<'_>) -> Result<()>;
}

impl<F> SolutionSink for F
where
    F: FnMut(&Solution<'_>) -> Result<()>,
{
    fn accept(&mut self, solution: &Solution<'_>) -> Result<()> {
        self(solution)
    }
}

/// Observes search progress
///
/// Called every [`METRICS_CHECK_INTERVAL`] recursions and after every
/// solution, so implementations must be cheap and gate their own output.
pub trait MetricsHook {
    /// Inspect the current counters
    fn record(&mut self, stats: &SearchStats);
}

impl MetricsHook for () {
    fn record(&mut self, _stats: &SearchStats) {}
}

struct Session<'s, S, M> {
    sink: &'s mut S,
    metrics: &'s mut M,
    stats: SearchStats,
    started: Instant,
}

impl<S: SolutionSink, M: MetricsHook> Session<'_, S, M> {
    fn visit(&mut self) {
        self.stats.recursions += 1;
        if self.stats.recursions & (METRICS_CHECK_INTERVAL - 1) == 0 {
            self.report();
        }
    }

    fn solution_found(&mut self, grid: &Grid) -> Result<()> {
        self.stats.solutions += 1;
        self.report();
        tracing::debug!(
            solution = self.stats.solutions,
            recursions = self.stats.recursions,
            "tiling found"
        );
        self.sink.accept(&Solution::new(self.stats.solutions, grid))
    }

    fn report(&mut self) {
        self.stats.elapsed = self.started.elapsed();
        self.metrics.record(&self.stats);
    }
}

/// Backtracking tiling enumerator
#[derive(Debug, Clone)]
pub struct Searcher {
    grid: Grid,
    inventory: Inventory,
    pruning: PruningRule,
    order: SearchOrder,
}

impl Searcher {
    /// Prepare a search over the given pieces
    ///
    /// The grid side is derived from the largest piece size and pruning is
    /// chosen to match the piece set.
    pub fn new(inventory: Inventory) -> Self {
        Self {
            grid: Grid::for_max_piece_size(inventory.max_piece_size()),
            pruning: PruningRule::for_inventory(&inventory),
            order: SearchOrder::default(),
            inventory,
        }
    }

    /// Override the pruning rule
    #[must_use]
    pub fn with_pruning(mut self, pruning: PruningRule) -> Self {
        self.pruning = pruning;
        self
    }

    /// Override the candidate order
    #[must_use]
    pub fn with_order(mut self, order: SearchOrder) -> Self {
        self.order = order;
        self
    }

    /// Current grid contents
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current piece counts
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Active pruning rule
    pub const fn pruning(&self) -> PruningRule {
        self.pruning
    }

    /// Active candidate order
    pub const fn order(&self) -> SearchOrder {
        self.order
    }

    /// Enumerate every tiling, reporting each to `sink`
    ///
    /// Grid and inventory are restored before this returns, whether or not
    /// the search completed.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `sink`; the search stops there
    pub fn run<S, M>(&mut self, sink: &mut S, metrics: &mut M) -> Result<SearchStats>
    where
        S: SolutionSink,
        M: MetricsHook,
    {
        let mut session = Session {
            sink,
            metrics,
            stats: SearchStats::default(),
            started: Instant::now(),
        };

        let outcome = match self.grid.next_free_location(Location::ORIGIN) {
            Some(start) => self.explore(start, &mut session),
            None => Ok(()),
        };
        session.report();

        tracing::info!(
            width = self.grid.width(),
            recursions = session.stats.recursions,
            solutions = session.stats.solutions,
            elapsed_ms = session.stats.elapsed.as_millis() as u64,
            "search finished"
        );

        outcome.map(|()| session.stats)
    }

    fn explore<S, M>(&mut self, target: Location, session: &mut Session<'_, S, M>) -> Result<()>
    where
        S: SolutionSink,
        M: MetricsHook,
    {
        session.visit();

        let Some(max_fit) = self.grid.max_square_at(target) else {
            return Ok(());
        };

        match self.order {
            SearchOrder::Ascending => {
                let Some(smallest) = self.inventory.smallest_available_size() else {
                    return Ok(());
                };
                if smallest > max_fit {
                    return Ok(());
                }
                for size in smallest..=max_fit {
                    self.try_size(target, size, session)?;
                }
            }
            SearchOrder::Descending => {
                let Some(biggest) = self.inventory.biggest_available_size(max_fit) else {
                    return Ok(());
                };
                for size in (1..=biggest).rev() {
                    self.try_size(target, size, session)?;
                }
            }
        }

        Ok(())
    }

    fn try_size<S, M>(
        &mut self,
        target: Location,
        size: usize,
        session: &mut Session<'_, S, M>,
    ) -> Result<()>
    where
        S: SolutionSink,
        M: MetricsHook,
    {
        let width = self.grid.width();
        if !self.inventory.has_size(size) || self.pruning.can_skip(target, size, width) {
            return Ok(());
        }

        self.grid.place(target, size);
        self.inventory.take(size);

        let outcome = match self.grid.next_free_location(target.advance(size, 0, width)) {
            None => session.solution_found(&self.grid),
            Some(next) => self.explore(next, session),
        };

        self.grid.unplace(target, size);
        self.inventory.give(size);

        outcome
    }
}
