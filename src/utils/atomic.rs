//! Atomic file writes
//!
//! Content is written to a `.tmp` sibling, synced, then renamed over the
//! destination, so a reader sees either the old or the new file and never a
//! partial one.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

/// Result type for atomic operations
pub type AtomicResult<T> = Result<T, AtomicError>;

/// Errors that can occur during atomic operations
#[derive(Debug, Error)]
pub enum AtomicError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("path has no file name: {0}")]
    InvalidPath(String),
}

impl From<AtomicError> for io::Error {
    fn from(e: AtomicError) -> Self {
        match e {
            AtomicError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
        }
    }
}

/// Atomically write content to a file
///
/// This function:
/// 1. Writes content to a .tmp file next to `path`
/// 2. Syncs the file to disk
/// 3. Atomically renames it over `path`
///
/// # Arguments
///
/// * `path` - The final destination path
/// * `content` - The content to write
///
/// # Example
///
/// ```ignore
/// atomic_write("data/knowledge_graph.json", r#"{"entities":[],"relations":[]}"#)?;
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> AtomicResult<()> {
    let path = path.as_ref();
    if path.file_name().is_none() {
        return Err(AtomicError::InvalidPath(path.display().to_string()));
    }
    let temp_path = path.with_extension("tmp");

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Write to temp file
    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;

    // Sync to disk (ensure data is durable)
    file.sync_all()?;

    // Atomic rename
    fs::rename(&temp_path, path)?;

    Ok(())
}
