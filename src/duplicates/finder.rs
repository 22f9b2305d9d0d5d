//! Scan orchestration: walk, hash, record.
//!
//! # Overview
//!
//! [`DuplicateFinder::scan`] performs one single-threaded pass over a
//! directory tree:
//!
//! 1. **Walk** - enumerate regular files depth first
//! 2. **Hash** - read each file fully and compute its BLAKE3 digest
//! 3. **Record** - classify the file as original or duplicate
//!
//! Directory listing failures abort the scan and no report is produced.
//! Files that cannot be read are logged, collected in
//! [`ScanReport::skipped`] and otherwise ignored.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::duplicates::DuplicateFinder;
//! use std::path::Path;
//!
//! let report = DuplicateFinder::new().scan(Path::new(".")).unwrap();
//! println!("{} distinct files", report.registry.total_files());
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::registry::DuplicateRegistry;
use crate::scanner::{Hasher, ScanError, Walker};

/// Result of a completed scan.
#[derive(Debug)]
pub struct ScanReport {
    /// Root directory that was scanned
    pub root: PathBuf,
    /// Hash registry, duplicate set and duplicate size
    pub registry: DuplicateRegistry,
    /// Files skipped because they could not be read
    pub skipped: Vec<ScanError>,
    /// Wall-clock duration of the scan
    pub scan_duration: Duration,
}

impl ScanReport {
    /// Whether any file had to be skipped.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Runs the walk/hash/record pipeline.
#[derive(Debug, Default, Clone)]
pub struct DuplicateFinder {
    hasher: Hasher,
}

impl DuplicateFinder {
    /// Create a finder with the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `root` and return the populated registry.
    ///
    /// # Errors
    ///
    /// - [`ScanError::DirectoryRead`] if the root or any subdirectory cannot
    ///   be listed
    /// - [`ScanError::Hash`] if the hasher fails
    pub fn scan(&self, root: &Path) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let walker = Walker::new(root);
        walker.check_root()?;

        log::debug!("Scanning {}", walker.root().display());

        let mut registry = DuplicateRegistry::new();
        let mut skipped = Vec::new();
        self.scan_into(&walker, &mut registry, &mut skipped)?;

        let scan_duration = start.elapsed();
        log::debug!(
            "Scan of {} finished in {:?}: {} distinct, {} with duplicates, {} skipped",
            walker.root().display(),
            scan_duration,
            registry.total_files(),
            registry.duplicate_count(),
            skipped.len()
        );

        Ok(ScanReport {
            root: walker.root().to_path_buf(),
            registry,
            skipped,
            scan_duration,
        })
    }

    /// Feed every file under the walker's root into `registry`.
    ///
    /// Each duplicate is charged the size reported by the directory listing.
    /// Recoverable errors are pushed onto `skipped`; fatal ones are returned.
    fn scan_into(
        &self,
        walker: &Walker,
        registry: &mut DuplicateRegistry,
        skipped: &mut Vec<ScanError>,
    ) -> Result<(), ScanError> {
        for entry in walker.walk() {
            let outcome = entry.and_then(|file| {
                let digest = self.hasher.hash_file(&file.path)?;
                registry.record(digest, file.path, file.size);
                Ok(())
            });

            match outcome {
                Ok(()) => {}
                Err(err) if !err.is_fatal() => {
                    log::warn!("Skipping unreadable file: {}", err);
                    skipped.push(err);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}
