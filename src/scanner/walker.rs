//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree depth first and yielding every regular file beneath it.
//!
//! # Behavior
//!
//! - Entries are visited in the order the filesystem lists them (no sorting)
//! - Subdirectories are descended into as they are encountered
//! - Symbolic links are never followed; they are skipped like sockets,
//!   devices and FIFOs
//! - A directory that cannot be listed yields [`ScanError::DirectoryRead`]
//! - A file that cannot be stat'ed yields [`ScanError::FileRead`]
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"));
//! let files: Result<Vec<_>, _> = walker.walk().collect();
//! println!("Found {} files", files.unwrap().len());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{EntryKind, FileEntry, ScanError};

/// Depth-first directory walker.
#[derive(Debug, Clone)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root directory.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// Root directory of this walker.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Verify the root exists and is a directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::DirectoryRead`] naming the root if it is missing,
    /// inaccessible or not a directory.
    pub fn check_root(&self) -> Result<(), ScanError> {
        let metadata = fs::metadata(&self.root).map_err(|source| ScanError::DirectoryRead {
            path: self.root.clone(),
            source,
        })?;

        if !metadata.is_dir() {
            return Err(ScanError::DirectoryRead {
                path: self.root.clone(),
                source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            });
        }
        Ok(())
    }

    /// Walk the directory tree, yielding regular files.
    ///
    /// A directory that cannot be listed yields [`ScanError::DirectoryRead`],
    /// which callers are expected to stop at. A file whose metadata cannot be
    /// read yields a recoverable [`ScanError::FileRead`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dupescan::scanner::Walker;
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."));
    /// for entry in walker.walk() {
    ///     let file = entry?;
    ///     println!("{}: {} bytes", file.path.display(), file.size);
    /// }
    /// # Ok::<(), dupescan::scanner::ScanError>(())
    /// ```
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .min_depth(1)
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => Self::process_entry(entry),
                Err(e) => Some(Err(self.handle_walk_error(e))),
            })
    }

    /// Turn a listed entry into a [`FileEntry`] if it is a regular file.
    fn process_entry(entry: DirEntry) -> Option<Result<FileEntry, ScanError>> {
        match EntryKind::from_file_type(entry.file_type()) {
            EntryKind::Directory => {
                log::trace!("Entering directory: {}", entry.path().display());
                None
            }
            EntryKind::Other => {
                log::trace!("Skipping non-regular entry: {}", entry.path().display());
                None
            }
            EntryKind::File => match entry.metadata() {
                Ok(metadata) => Some(Ok(FileEntry::new(entry.into_path(), metadata.len()))),
                Err(e) => {
                    let message = e.to_string();
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other(message));
                    Some(Err(ScanError::FileRead {
                        path: entry.into_path(),
                        source,
                    }))
                }
            },
        }
    }

    /// Convert a walkdir error into a directory read failure.
    fn handle_walk_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        let message = error.to_string();
        let source = error
            .into_io_error()
            .unwrap_or_else(|| io::Error::other(message));

        log::debug!("Walker error for {}: {}", path.display(), source);
        ScanError::DirectoryRead { path, source }
    }
}
