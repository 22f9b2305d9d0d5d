//! Run configuration resolved from the command line.
//!
//! The only setting with a non-trivial default is the scan root: when
//! `--path` (or `DUPESCAN_PATH`) is missing or empty, the current working
//! directory is scanned.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};

/// Settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory to scan
    pub root: PathBuf,
    /// Report format
    pub output: OutputFormat,
}

impl ScanConfig {
    /// Build the configuration from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the root defaults to the current directory and
    /// that directory cannot be determined.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            root: resolve_root(cli.path.as_deref())?,
            output: cli.output,
        })
    }
}

/// Use `path` unless it is missing or empty, else the working directory.
fn resolve_root(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) if !p.as_os_str().is_empty() => Ok(p.to_path_buf()),
        _ => env::current_dir().context("Failed to get current directory"),
    }
}
