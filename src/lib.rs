//! dupescan - Content-based duplicate file counter
//!
//! Walks a directory tree, hashes every regular file with BLAKE3 and reports
//! how many distinct files exist, how many of them have duplicates and how
//! much space the duplicates take.

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::Write;

use anyhow::Result;

use crate::cli::{Cli, OutputFormat};
use crate::config::ScanConfig;
use crate::duplicates::DuplicateFinder;
use crate::error::ExitCode;
use crate::output::{JsonOutput, TextOutput};

/// Run the application: set up logging, scan, print the report.
///
/// # Errors
///
/// Returns an error if the scan fails fatally or the report cannot be
/// written. Nothing is printed to stdout in that case.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let config = ScanConfig::from_cli(&cli)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_scan(&config, &mut handle)
}

/// Scan `config.root` and write the report to `writer`.
///
/// # Errors
///
/// Returns the fatal [`scanner::ScanError`] that aborted the scan, or an
/// output error if writing the report fails.
pub fn run_scan<W: Write>(config: &ScanConfig, writer: &mut W) -> Result<ExitCode> {
    let report = DuplicateFinder::new().scan(&config.root)?;

    let exit_code = if report.is_partial() {
        log::warn!(
            "{} file(s) could not be read and were skipped",
            report.skipped.len()
        );
        ExitCode::PartialSuccess
    } else {
        ExitCode::Success
    };

    match config.output {
        OutputFormat::Text => TextOutput::new(&report).write_to(writer)?,
        OutputFormat::Json => JsonOutput::new(&report, exit_code).write_to(writer, true)?,
    }

    Ok(exit_code)
}
