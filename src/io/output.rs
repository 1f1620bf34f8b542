//! Solution files: a running text listing plus batched HTML pages
//!
//! HTML pages hold [`HTML_BATCH_SIZE`] solutions each. The first page is
//! numbered 0 and every later page is numbered by the first solution it
//! holds. Each page is wrapped in the configured head and footer markup.

use crate::algorithm::search::{Solution, SolutionSink};
use crate::io::configuration::{
    DEFAULT_HTML_FOOTER, DEFAULT_HTML_HEAD, HTML_BATCH_SIZE, PNG_CELL_PIXELS, SOLUTIONS_HTML_PREFIX,
    SOLUTIONS_TXT,
};
use crate::io::error::{Result, WithPath};
use crate::io::image::export_solution_as_png;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where and how solutions are written
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory receiving every output file
    pub directory: PathBuf,
    /// Markup opening each HTML page
    pub html_head: String,
    /// Markup closing each HTML page
    pub html_footer: String,
    /// Solutions per HTML page
    pub html_batch_size: u64,
    /// Solutions, counted from the first, that are also rendered as PNG
    pub png_limit: u64,
}

impl OutputConfig {
    /// Default layout inside `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            html_head: DEFAULT_HTML_HEAD.to_string(),
            html_footer: DEFAULT_HTML_FOOTER.to_string(),
            html_batch_size: HTML_BATCH_SIZE,
            png_limit: 0,
        }
    }
}

/// Name of the HTML page that starts at the given solution
pub fn html_file_name(first_index: u64) -> String {
    let number = if first_index <= 1 { 0 } else { first_index };
    format!("{SOLUTIONS_HTML_PREFIX}{number:05}.html")
}

/// HTML fragment for one solution
///
/// Every piece becomes a `div` carrying `s{size} c{size} x{col} y{row}`
/// classes (1-based, row counted from the bottom) plus an inline CSS grid
/// position so the page renders without per-puzzle stylesheets.
pub fn render_html(solution: &Solution<'_>) -> String {
    let width = solution.grid().width();
    let mut html = format!(
        "<h1>Solution {}</h1>\n<div class=\"grid\">",
        solution.index()
    );

    for placement in solution.placements() {
        let size = placement.size;
        let x = placement.location.x;
        let y = placement.location.y;
        let row = width.saturating_sub(y + size) + 1;
        let _ = writeln!(
            html,
            "<div class=\"square s{size} c{size} x{} y{}\" style=\"grid-column: {} / span {size}; grid-row: {row} / span {size};\"></div>",
            x + 1,
            y + 1,
            x + 1,
        );
    }

    html.push_str("</div>\n");
    html
}

struct HtmlPage {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl HtmlPage {
    fn open(path: PathBuf, head: &str) -> Result<Self> {
        let file = File::create(&path).with_path(&path, "create html page")?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(head.as_bytes())
            .with_path(&path, "write html head")?;
        Ok(Self { path, writer })
    }

    fn close(mut self, footer: &str) -> Result<()> {
        self.writer
            .write_all(footer.as_bytes())
            .with_path(&self.path, "write html footer")?;
        self.writer.flush().with_path(&self.path, "flush html page")
    }
}

/// Sink writing every solution to text, HTML and optionally PNG files
pub struct SolutionWriter {
    config: OutputConfig,
    text_path: PathBuf,
    text: BufWriter<File>,
    page: Option<HtmlPage>,
    pages: Vec<PathBuf>,
    written: u64,
}

impl SolutionWriter {
    /// Create the output directory and open the text listing
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the text file cannot be created
    pub fn create(config: OutputConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.directory)
            .with_path(&config.directory, "create output directory")?;

        let text_path = config.directory.join(SOLUTIONS_TXT);
        let text = BufWriter::new(
            File::create(&text_path).with_path(&text_path, "create solution listing")?,
        );

        Ok(Self {
            config,
            text_path,
            text,
            page: None,
            pages: Vec::new(),
            written: 0,
        })
    }

    /// Number of solutions written so far
    pub const fn written(&self) -> u64 {
        self.written
    }

    /// HTML pages opened so far, in order
    pub fn pages(&self) -> &[PathBuf] {
        &self.pages
    }

    /// Path of the text listing
    pub fn text_path(&self) -> &Path {
        &self.text_path
    }

    /// Close the open HTML page and flush everything
    ///
    /// # Errors
    ///
    /// Returns an error if the footer cannot be written or a flush fails
    pub fn finish(mut self) -> Result<()> {
        if let Some(page) = self.page.take() {
            page.close(&self.config.html_footer)?;
        }
        self.text
            .flush()
            .with_path(&self.text_path, "flush solution listing")
    }

    fn page_for(&mut self, index: u64) -> Result<&mut HtmlPage> {
        let batch = self.config.html_batch_size.max(1);
        let page = match self.page.take() {
            Some(page) if index % batch != 0 => page,
            previous => {
                if let Some(page) = previous {
                    page.close(&self.config.html_footer)?;
                }
                let path = self.config.directory.join(html_file_name(index));
                tracing::debug!(path = %path.display(), "starting html page");
                self.pages.push(path.clone());
                HtmlPage::open(path, &self.config.html_head)?
            }
        };
        Ok(self.page.insert(page))
    }
}

impl SolutionSink for SolutionWriter {
    fn accept(&mut self, solution: &Solution<'_>) -> Result<()> {
        let index = solution.index();

        write!(self.text, "Solution number {index}\n{solution}\n\n")
            .with_path(&self.text_path, "write solution listing")?;

        let markup = render_html(solution);
        let page = self.page_for(index)?;
        page.writer
            .write_all(markup.as_bytes())
            .with_path(&page.path, "write html solution")?;

        if index <= self.config.png_limit {
            let path = self.config.directory.join(format!("solution_{index:05}.png"));
            export_solution_as_png(solution, PNG_CELL_PIXELS, &path)?;
        }

        self.written += 1;
        Ok(())
    }
}
