//! Duplicate bookkeeping for a single scan.
//!
//! # Overview
//!
//! [`DuplicateRegistry`] owns the three pieces of scan state:
//!
//! - the hash registry: digest to first-seen ("original") path
//! - the duplicate set: original path to every later path with the same digest
//! - the aggregate duplicate size: bytes held by the later copies
//!
//! The first path seen for a digest is canonical. Every later occurrence is a
//! duplicate and its size is charged to the wasted-space total; the
//! original's size never is.
//!
//! # Example
//!
//! ```
//! use dupescan::duplicates::{Classification, DuplicateRegistry};
//! use dupescan::scanner::Hasher;
//! use std::path::{Path, PathBuf};
//!
//! let hasher = Hasher::new();
//! let hello = hasher.digest(Path::new("A.txt"), b"hello").unwrap();
//! let world = hasher.digest(Path::new("C.txt"), b"world").unwrap();
//!
//! let mut registry = DuplicateRegistry::new();
//! registry.record(hello, PathBuf::from("A.txt"), 5);
//! let class = registry.record(hello, PathBuf::from("B.txt"), 5);
//! registry.record(world, PathBuf::from("C.txt"), 5);
//!
//! assert_eq!(class, Classification::Duplicate { original: PathBuf::from("A.txt") });
//! assert_eq!(registry.total_files(), 2);
//! assert_eq!(registry.duplicate_count(), 1);
//! assert_eq!(registry.duplicate_size(), 5);
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::scanner::ContentDigest;

/// Outcome of recording one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// First file seen with this digest
    Original,
    /// Later file sharing the digest of `original`
    Duplicate {
        /// Path first recorded for the digest
        original: PathBuf,
    },
}

/// Hash registry, duplicate set and wasted-space total for one scan.
#[derive(Debug, Default, Clone)]
pub struct DuplicateRegistry {
    /// Digest to first-seen path
    hashes: HashMap<ContentDigest, PathBuf>,
    /// Original path to duplicate paths, in discovery order
    duplicates: HashMap<PathBuf, Vec<PathBuf>>,
    /// Sum of duplicate sizes in bytes
    dupe_size: u64,
}

impl DuplicateRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hashed file and classify it.
    ///
    /// If the digest is new, `path` becomes its original. Otherwise `path` is
    /// appended to the original's duplicates and `size` is added to the
    /// duplicate total.
    pub fn record(&mut self, digest: ContentDigest, path: PathBuf, size: u64) -> Classification {
        match self.hashes.entry(digest) {
            Entry::Vacant(vacant) => {
                vacant.insert(path);
                Classification::Original
            }
            Entry::Occupied(occupied) => {
                let original = occupied.get().clone();
                log::debug!(
                    "Duplicate: {} matches {}",
                    path.display(),
                    original.display()
                );
                self.duplicates
                    .entry(original.clone())
                    .or_default()
                    .push(path);
                self.dupe_size += size;
                Classification::Duplicate { original }
            }
        }
    }

    /// Number of distinct content digests seen.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.hashes.len()
    }

    /// Number of originals that have at least one duplicate.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }

    /// Number of files classified as duplicates.
    #[must_use]
    pub fn duplicate_file_count(&self) -> usize {
        self.duplicates.values().map(Vec::len).sum()
    }

    /// Total bytes held by duplicate files.
    #[must_use]
    pub fn duplicate_size(&self) -> u64 {
        self.dupe_size
    }

    /// Path first recorded for a digest.
    #[must_use]
    pub fn original_for(&self, digest: &ContentDigest) -> Option<&Path> {
        self.hashes.get(digest).map(PathBuf::as_path)
    }

    /// All duplicates recorded for an original, oldest first.
    #[must_use]
    pub fn duplicates_of(&self, original: &Path) -> Option<&[PathBuf]> {
        self.duplicates.get(original).map(Vec::as_slice)
    }

    /// Most recently recorded duplicate of an original.
    #[must_use]
    pub fn latest_duplicate(&self, original: &Path) -> Option<&Path> {
        self.duplicates
            .get(original)
            .and_then(|dupes| dupes.last())
            .map(PathBuf::as_path)
    }

    /// Iterate over `(original, duplicates)` pairs in arbitrary order.
    pub fn iter_duplicates(&self) -> impl Iterator<Item = (&Path, &[PathBuf])> {
        self.duplicates
            .iter()
            .map(|(original, dupes)| (original.as_path(), dupes.as_slice()))
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}
