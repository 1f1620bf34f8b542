//! Live search progress with a spinner and threshold-gated log lines

use crate::algorithm::search::{MetricsHook, SearchStats};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Reports search counters while a run is in progress
///
/// The spinner refreshes on every hook call; a log line is emitted each
/// time the recursion count passes another `report_every` boundary.
pub struct SearchProgress {
    spinner: Option<ProgressBar>,
    report_every: u64,
    next_report: u64,
    reports: u64,
}

impl SearchProgress {
    /// Create a reporter, with a spinner unless `show_spinner` is false
    pub fn new(show_spinner: bool, report_every: u64) -> Self {
        let spinner = show_spinner.then(|| {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(SPINNER_STYLE.clone());
            spinner.enable_steady_tick(Duration::from_millis(120));
            spinner
        });
        let report_every = report_every.max(1);

        Self {
            spinner,
            report_every,
            next_report: report_every,
            reports: 0,
        }
    }

    /// Number of threshold log lines emitted so far
    pub const fn reports(&self) -> u64 {
        self.reports
    }

    /// Recursion count that triggers the next log line
    pub const fn next_report(&self) -> u64 {
        self.next_report
    }

    /// Clear the spinner after a run
    pub fn finish(&self) {
        if let Some(ref spinner) = self.spinner {
            spinner.finish_and_clear();
        }
    }
}

impl MetricsHook for SearchProgress {
    fn record(&mut self, stats: &SearchStats) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(format!(
                "{} recursions, {} solutions, {:.0}/ms",
                group_digits(stats.recursions),
                group_digits(stats.solutions),
                stats.recursions_per_ms()
            ));
        }

        if stats.recursions >= self.next_report {
            self.reports += 1;
            tracing::info!(
                recursions = stats.recursions,
                solutions = stats.solutions,
                elapsed_ms = stats.elapsed.as_millis() as u64,
                per_ms = stats.recursions_per_ms(),
                "search progress"
            );
            let passed = stats.recursions / self.report_every;
            self.next_report = passed.saturating_add(1).saturating_mul(self.report_every);
        }
    }
}

/// Format an integer with comma thousands separators
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
