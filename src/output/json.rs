//! JSON output formatter for scan reports.
//!
//! Provides machine-readable JSON output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "root": "/data",
//!   "duplicates": [
//!     {
//!       "original": "/data/A.txt",
//!       "duplicates": ["/data/B.txt"],
//!       "latest": "/data/B.txt"
//!     }
//!   ],
//!   "skipped": [
//!     { "path": "/data/locked.bin", "error": "Failed to read file ..." }
//!   ],
//!   "summary": {
//!     "total_files": 2,
//!     "duplicates": 1,
//!     "duplicate_files": 1,
//!     "duplicate_size": 5,
//!     "duplicate_size_display": "5 B",
//!     "skipped_files": 1,
//!     "scan_duration_ms": 3,
//!     "exit_code": 3,
//!     "exit_code_name": "DS003"
//!   }
//! }
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{format_size, OutputError};
use crate::duplicates::ScanReport;
use crate::error::ExitCode;

/// An original file and the copies found after it.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// First path seen with this content
    pub original: String,
    /// Later paths with the same content, in discovery order
    pub duplicates: Vec<String>,
    /// Most recently discovered duplicate
    pub latest: Option<String>,
}

impl JsonDuplicateGroup {
    fn new(original: &Path, duplicates: &[PathBuf]) -> Self {
        Self {
            original: display_path(original),
            duplicates: duplicates.iter().map(|p| display_path(p)).collect(),
            latest: duplicates.last().map(|p| display_path(p)),
        }
    }
}

/// A file that could not be read.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSkippedFile {
    /// Path of the skipped file
    pub path: String,
    /// Error message
    pub error: String,
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Distinct content digests
    pub total_files: usize,
    /// Originals with at least one duplicate
    pub duplicates: usize,
    /// Files classified as duplicates
    pub duplicate_files: usize,
    /// Bytes held by duplicates
    pub duplicate_size: u64,
    /// `duplicate_size` rendered with decimal units
    pub duplicate_size_display: String,
    /// Files skipped because they could not be read
    pub skipped_files: usize,
    /// Duration of the scan in milliseconds
    pub scan_duration_ms: u64,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "DS000")
    pub exit_code_name: String,
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Scanned root directory
    pub root: String,
    /// Duplicate groups sorted by original path
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Files skipped during the scan
    pub skipped: Vec<JsonSkippedFile>,
    /// Scan summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output from a scan report and an exit code.
    #[must_use]
    pub fn new(report: &ScanReport, exit_code: ExitCode) -> Self {
        let registry = &report.registry;

        let mut duplicates: Vec<_> = registry
            .iter_duplicates()
            .map(|(original, dupes)| JsonDuplicateGroup::new(original, dupes))
            .collect();
        duplicates.sort_by(|a, b| a.original.cmp(&b.original));

        let skipped = report
            .skipped
            .iter()
            .map(|err| JsonSkippedFile {
                path: display_path(err.path()),
                error: err.to_string(),
            })
            .collect();

        Self {
            root: display_path(&report.root),
            duplicates,
            skipped,
            summary: JsonSummary {
                total_files: registry.total_files(),
                duplicates: registry.duplicate_count(),
                duplicate_files: registry.duplicate_file_count(),
                duplicate_size: registry.duplicate_size(),
                duplicate_size_display: format_size(registry.duplicate_size()),
                skipped_files: report.skipped.len(),
                scan_duration_ms: u64::try_from(report.scan_duration.as_millis()).unwrap_or(u64::MAX),
                exit_code: exit_code.as_i32(),
                exit_code_name: exit_code.code_prefix().to_string(),
            },
        }
    }

    /// Serialize to compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write JSON to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), OutputError> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
