//! Output formatters for scan reports.
//!
//! This module provides the report formats:
//! - Plain text summary (default)
//! - JSON for automation and scripting
//!
//! It also owns [`format_size`], the decimal size renderer used by both.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::duplicates::DuplicateFinder;
//! use dupescan::output::TextOutput;
//! use std::path::Path;
//!
//! let report = DuplicateFinder::new().scan(Path::new(".")).unwrap();
//! TextOutput::new(&report).write_to(&mut std::io::stdout()).unwrap();
//! ```

pub mod json;
pub mod text;

// Re-export main types
pub use json::JsonOutput;
pub use text::TextOutput;

/// One kilobyte (decimal).
pub const KB: u64 = 1000;
/// One megabyte (decimal).
pub const MB: u64 = 1000 * KB;
/// One gigabyte (decimal).
pub const GB: u64 = 1000 * MB;
/// One terabyte (decimal).
pub const TB: u64 = 1000 * GB;

/// Units from largest to smallest, excluding plain bytes.
const UNITS: [(u64, &str); 4] = [(TB, "TB"), (GB, "GB"), (MB, "MB"), (KB, "KB")];

/// Format a byte count with decimal units.
///
/// The largest unit strictly smaller than `bytes` is chosen and the value is
/// truncated to an integer, so a count equal to a unit boundary stays in the
/// next smaller unit.
///
/// # Examples
///
/// ```
/// use dupescan::output::format_size;
///
/// assert_eq!(format_size(999), "999 B");
/// assert_eq!(format_size(1000), "1000 B");
/// assert_eq!(format_size(1500), "1 KB");
/// assert_eq!(format_size(2_500_000), "2 MB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    UNITS
        .iter()
        .find(|(unit, _)| bytes > *unit)
        .map_or_else(
            || format!("{bytes} B"),
            |(unit, name)| format!("{} {}", bytes / unit, name),
        )
}

/// Errors that can occur while writing a report.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
