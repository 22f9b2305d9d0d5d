//! BLAKE3 content hashing.
//!
//! # Overview
//! Files are read fully into memory and digested in one pass. Peak memory is
//! bounded by the largest single file, not by the size of the tree.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::ScanError;

/// Digest of a file's full content.
///
/// Two files with equal digests are treated as identical content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hexadecimal rendering (64 characters).
    #[must_use]
    pub fn to_hex(&self) -> String {
        blake3::Hash::from(self.0).to_hex().to_string()
    }
}

impl From<blake3::Hash> for ContentDigest {
    fn from(hash: blake3::Hash) -> Self {
        Self(*hash.as_bytes())
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Content hasher.
#[derive(Debug, Default, Clone, Copy)]
pub struct Hasher;

impl Hasher {
    /// Create a new hasher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Digest an in-memory byte slice.
    ///
    /// `path` is only used to label a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Hash`] if the hasher rejects the write. This does
    /// not happen for in-memory input and is treated as fatal by callers.
    pub fn digest(&self, path: &Path, content: &[u8]) -> Result<ContentDigest, ScanError> {
        let mut hasher = blake3::Hasher::new();
        hasher.write_all(content).map_err(|source| ScanError::Hash {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(hasher.finalize().into())
    }

    /// Read a file fully and digest its content.
    ///
    /// # Errors
    ///
    /// - [`ScanError::FileRead`] if the file cannot be read (recoverable)
    /// - [`ScanError::Hash`] if hashing fails (fatal)
    pub fn hash_file(&self, path: &Path) -> Result<ContentDigest, ScanError> {
        let content = fs::read(path).map_err(|source| ScanError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let digest = self.digest(path, &content)?;
        log::trace!("Hashed {} ({} bytes): {}", path.display(), content.len(), digest);
        Ok(digest)
    }
}
