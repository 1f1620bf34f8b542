//! Command-line interface and run orchestration

use crate::algorithm::inventory::Inventory;
use crate::algorithm::pruning::PruningRule;
use crate::algorithm::search::{SearchOrder, SearchStats, Searcher, Solution, SolutionSink};
use crate::algorithm::verify::VerifyingSink;
use crate::io::configuration::{
    DEFAULT_MAX_PIECE_SIZE, DEFAULT_OUTPUT_DIR, DEFAULT_REPORT_EVERY, DEFAULT_RUNS,
    MAX_SUPPORTED_PIECE_SIZE,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::output::{OutputConfig, SolutionWriter};
use crate::io::progress::{SearchProgress, group_digits};
use crate::spatial::grid_width;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "partridge")]
#[command(
    author,
    version,
    about = "Enumerate every exact tiling of the Partridge puzzle square"
)]
/// Command-line arguments for the enumeration
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Largest piece size; the grid side is K(K+1)/2
    #[arg(short = 'k', long, default_value_t = DEFAULT_MAX_PIECE_SIZE, value_parser = parse_max_piece_size)]
    pub max_piece_size: usize,

    /// Use the fixed test piece counts for K = 2, 3 or 4
    #[arg(short, long)]
    pub test_data: bool,

    /// Explicit piece counts, smallest size first (e.g. 5,1,3)
    #[arg(short, long, value_delimiter = ',')]
    pub counts: Option<Vec<u32>>,

    /// Disable the edge pruning rule
    #[arg(long)]
    pub no_prune: bool,

    /// Candidate order: ascending or descending
    #[arg(long, default_value = "ascending", value_parser = parse_search_order)]
    pub order: SearchOrder,

    /// Number of full enumeration passes
    #[arg(short, long, default_value_t = DEFAULT_RUNS)]
    pub runs: usize,

    /// Directory receiving solution files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Count solutions without writing any files
    #[arg(long)]
    pub no_files: bool,

    /// Also render the first N solutions as PNG images
    #[arg(long, default_value_t = 0)]
    pub png_limit: u64,

    /// Markup file opening each HTML page
    #[arg(long, value_name = "FILE")]
    pub html_head: Option<PathBuf>,

    /// Markup file closing each HTML page
    #[arg(long, value_name = "FILE")]
    pub html_footer: Option<PathBuf>,

    /// Independently verify every tiling before writing it
    #[arg(long)]
    pub verify: bool,

    /// Recursions between progress log lines
    #[arg(long, default_value_t = DEFAULT_REPORT_EVERY)]
    pub report_every: u64,

    /// Suppress the spinner and informational logs
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_max_piece_size(s: &str) -> std::result::Result<usize, String> {
    let size = s
        .parse::<usize>()
        .map_err(|e| format!("invalid piece size '{s}': {e}"))?;
    if size == 0 || size > MAX_SUPPORTED_PIECE_SIZE {
        return Err(format!(
            "piece size must be between 1 and {MAX_SUPPORTED_PIECE_SIZE}, got {size}"
        ));
    }
    Ok(size)
}

fn parse_search_order(s: &str) -> std::result::Result<SearchOrder, String> {
    match s {
        "ascending" => Ok(SearchOrder::Ascending),
        "descending" => Ok(SearchOrder::Descending),
        _ => Err(format!(
            "invalid order '{s}', expected: ascending or descending"
        )),
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Piece counts selected by the arguments
    ///
    /// Explicit counts take their largest size from the list length.
    ///
    /// # Errors
    ///
    /// Returns an error if explicit counts and test data are both requested,
    /// if no test configuration exists for the piece size, or if explicit
    /// counts fail validation
    pub fn inventory(&self) -> Result<Inventory> {
        match (&self.counts, self.test_data) {
            (Some(_), true) => Err(invalid_parameter(
                "counts",
                &"--counts",
                &"cannot be combined with --test-data",
            )),
            (Some(counts), false) => Inventory::from_counts(counts.clone()),
            (None, true) => Inventory::test_configuration(self.max_piece_size).ok_or_else(|| {
                invalid_parameter(
                    "max-piece-size",
                    &self.max_piece_size,
                    &"test data exists only for piece sizes 2, 3 and 4",
                )
            }),
            (None, false) => Ok(Inventory::standard(self.max_piece_size)),
        }
    }

    /// Pruning rule for the selected pieces
    pub const fn pruning(&self, inventory: &Inventory) -> PruningRule {
        if self.no_prune {
            PruningRule::Disabled
        } else {
            PruningRule::for_inventory(inventory)
        }
    }

    /// Output layout, or `None` when no files are written
    ///
    /// # Errors
    ///
    /// Returns an error if a custom HTML head or footer cannot be read
    pub fn output_config(&self) -> Result<Option<OutputConfig>> {
        if self.no_files {
            return Ok(None);
        }

        let mut config = OutputConfig::new(&self.output);
        if let Some(ref path) = self.html_head {
            config.html_head = read_markup(path)?;
        }
        if let Some(ref path) = self.html_footer {
            config.html_footer = read_markup(path)?;
        }
        config.png_limit = self.png_limit;

        Ok(Some(config))
    }
}

fn read_markup(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_path(path, "read html markup")
}

struct DiscardSolutions;

impl SolutionSink for DiscardSolutions {
    fn accept(&mut self, _solution: &Solution<'_>) -> Result<()> {
        Ok(())
    }
}

/// Runs the configured number of enumeration passes
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute every pass and return the counters of each
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, verification or solution
    /// output fails
    pub fn process(&self) -> Result<Vec<SearchStats>> {
        let inventory = self.cli.inventory()?;
        let pruning = self.cli.pruning(&inventory);
        let runs = self.cli.runs.max(1);

        tracing::info!(
            max_piece_size = inventory.max_piece_size(),
            width = grid_width(inventory.max_piece_size()),
            pieces = inventory.total_pieces(),
            ?pruning,
            order = ?self.cli.order,
            "starting enumeration"
        );

        let started = Instant::now();
        let mut results = Vec::with_capacity(runs);

        for run in 1..=runs {
            let mut searcher = Searcher::new(inventory.clone())
                .with_pruning(pruning)
                .with_order(self.cli.order);
            let mut progress =
                SearchProgress::new(self.cli.should_show_progress(), self.cli.report_every);

            let outcome = match self.cli.output_config()? {
                Some(config) => {
                    let writer = SolutionWriter::create(config)?;
                    self.search(&mut searcher, writer, &mut progress)
                        .and_then(|(stats, writer)| writer.finish().map(|()| stats))
                }
                None => self
                    .search(&mut searcher, DiscardSolutions, &mut progress)
                    .map(|(stats, _)| stats),
            };
            progress.finish();
            let stats = outcome?;

            tracing::info!(
                run,
                solutions = %group_digits(stats.solutions),
                recursions = %group_digits(stats.recursions),
                elapsed_ms = stats.elapsed.as_millis() as u64,
                "run complete"
            );
            results.push(stats);
        }

        let total = started.elapsed();
        let per_run = mean_elapsed(&results);
        let recursions: u64 = results.iter().map(|stats| stats.recursions).sum();
        let solutions: u64 = results.iter().map(|stats| stats.solutions).sum();
        tracing::info!(
            total_ms = total.as_millis() as u64,
            per_run_ms = per_run.as_millis() as u64,
            recursions = %group_digits(recursions),
            solutions = %group_digits(solutions),
            "enumeration finished"
        );

        Ok(results)
    }

    fn search<S: SolutionSink>(
        &self,
        searcher: &mut Searcher,
        mut sink: S,
        progress: &mut SearchProgress,
    ) -> Result<(SearchStats, S)> {
        if self.cli.verify {
            let mut verifying = VerifyingSink::new(sink);
            let stats = searcher.run(&mut verifying, progress)?;
            tracing::info!(verified = verifying.verified(), "all tilings verified");
            Ok((stats, verifying.into_inner()))
        } else {
            let stats = searcher.run(&mut sink, progress)?;
            Ok((stats, sink))
        }
    }
}

/// Average wall time of a set of runs
pub fn mean_elapsed(results: &[SearchStats]) -> Duration {
    if results.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = results.iter().map(|stats| stats.elapsed).sum();
    total / results.len() as u32
}
