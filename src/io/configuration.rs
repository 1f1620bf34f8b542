//! Search constants and runtime configuration defaults

// Puzzle size limits
/// Largest piece size searched when none is given
pub const DEFAULT_MAX_PIECE_SIZE: usize = 8;

/// Largest supported piece size
pub const MAX_SUPPORTED_PIECE_SIZE: usize = 63;

// One rendering symbol per tag, the first being reserved for empty cells
/// Symbols used to render occupancy tags, indexed by tag value
pub const TAG_SYMBOLS: &[u8; 64] =
    b".123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz@#";

// Metrics gating
/// Recursions between metrics hook invocations (must be a power of two)
pub const METRICS_CHECK_INTERVAL: u64 = 1 << 16;

/// Recursions between progress log lines
pub const DEFAULT_REPORT_EVERY: u64 = 10_000_000_000;

/// Number of enumeration passes per invocation
pub const DEFAULT_RUNS: usize = 1;

// Output settings
/// Directory receiving solution files
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Plain text file listing every solution
pub const SOLUTIONS_TXT: &str = "Solutions.txt";
/// Prefix of the batched HTML solution files
pub const SOLUTIONS_HTML_PREFIX: &str = "Solutions";
/// Solutions written to each HTML file
pub const HTML_BATCH_SIZE: u64 = 1000;
/// Edge length of one grid cell in rendered PNG images
pub const PNG_CELL_PIXELS: u32 = 16;

/// Markup written at the start of every HTML batch file
pub const DEFAULT_HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Partridge puzzle solutions</title>
<style>
body { font-family: sans-serif; }
.grid { display: grid; grid-auto-rows: 12px; grid-auto-columns: 12px; width: max-content; margin-bottom: 2em; }
.square { box-sizing: border-box; border: 1px solid #222; }
.c1 { background: #e6194b; } .c2 { background: #3cb44b; } .c3 { background: #ffe119; }
.c4 { background: #4363d8; } .c5 { background: #f58231; } .c6 { background: #911eb4; }
.c7 { background: #46f0f0; } .c8 { background: #f032e6; } .c9 { background: #bcf60c; }
</style>
</head>
<body>
"#;

/// Markup written at the end of every HTML batch file
pub const DEFAULT_HTML_FOOTER: &str = "</body>\n</html>\n";
