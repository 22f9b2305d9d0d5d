//! Plain text summary output.
//!
//! ```text
//! DUPLICATES
//! TOTAL FILES: 2
//! DUPLICATES: 1
//! TOTAL DUPLICATE SIZE: 5 B
//! ```

use std::io::Write;

use super::{format_size, OutputError};
use crate::duplicates::ScanReport;

/// Four-line summary of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOutput {
    /// Distinct content digests
    pub total_files: usize,
    /// Originals with at least one duplicate
    pub duplicates: usize,
    /// Bytes held by duplicates
    pub duplicate_size: u64,
}

impl TextOutput {
    /// Build the summary from a finished scan.
    #[must_use]
    pub fn new(report: &ScanReport) -> Self {
        Self {
            total_files: report.registry.total_files(),
            duplicates: report.registry.duplicate_count(),
            duplicate_size: report.registry.duplicate_size(),
        }
    }

    /// Render the summary, one line per field.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "DUPLICATES\nTOTAL FILES: {}\nDUPLICATES: {}\nTOTAL DUPLICATE SIZE: {}\n",
            self.total_files,
            self.duplicates,
            format_size(self.duplicate_size)
        )
    }

    /// Write the summary to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), OutputError> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
