//! Scanner module for directory traversal and content hashing.
//!
//! This module provides functionality for:
//! - Depth-first directory walking using walkdir
//! - Content hashing with BLAKE3
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: BLAKE3 content digests
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."));
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(file) => println!("{}", file.path.display()),
//!         Err(e) => eprintln!("Fatal: {}", e),
//!     }
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::fs::FileType;
use std::path::PathBuf;

// Re-export main types
pub use hasher::{ContentDigest, Hasher};
pub use walker::Walker;

/// Kind of a filesystem node as reported by the directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Symlinks, sockets, devices, FIFOs
    Other,
}

impl EntryKind {
    /// Classify a file type without following symlinks.
    #[must_use]
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            Self::Other
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// A regular file discovered during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path to the file (parent path joined with the file name)
    pub path: PathBuf,
    /// Size in bytes as reported by the listing metadata
    pub size: u64,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// Errors that can occur during a scan.
///
/// Only [`ScanError::FileRead`] is recoverable: the file is skipped and the
/// scan continues. The other variants abort the scan.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Listing a directory failed.
    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        /// Directory that could not be listed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading one file's content failed.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        /// File that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Feeding content into the hasher failed.
    #[error("Failed to hash {path}: {source}")]
    Hash {
        /// File whose content was being hashed
        path: PathBuf,
        /// The underlying write error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Whether this error must abort the whole scan.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::FileRead { .. })
    }

    /// Path the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DirectoryRead { path, .. }
            | Self::FileRead { path, .. }
            | Self::Hash { path, .. } => path,
        }
    }
}
