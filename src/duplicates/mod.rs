//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Duplicate bookkeeping (hash registry, duplicate set, wasted space)
//! - Scan orchestration over a directory tree

pub mod finder;
pub mod registry;

pub use finder::{DuplicateFinder, ScanReport};
pub use registry::{Classification, DuplicateRegistry};
