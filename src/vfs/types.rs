//! Virtual File System Types
//!
//! Core types and errors for the archive-backed virtual file system.

use std::time::SystemTime;
use thiserror::Error;

/// Virtual file system errors.
///
/// Every variant is handled locally at the command handler that triggered it;
/// nothing here unwinds past the dispatcher.
#[derive(Error, Debug, Clone)]
pub enum VfsError {
    #[error("VFS is not loaded")]
    NotLoaded,

    #[error("invalid archive: {reason}")]
    ArchiveInvalid { reason: String },

    #[error("directory not found: '{path}'")]
    PathNotFound { path: String },

    #[error("file not found: '{path}'")]
    FileNotFound { path: String },

    #[error("not a text file: '{path}'")]
    NotText { path: String },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// A single stored (path, bytes) pair from the archive.
///
/// Paths carry no leading `/` but are treated as rooted. A path ending in `/`
/// is an explicit directory marker with empty content; directories may also
/// exist only implicitly as prefixes of other entry paths.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub path: String,
    pub content: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn is_dir_marker(&self) -> bool {
        self.path.ends_with('/')
    }
}

/// Metadata snapshot for a loaded archive, as shown by `vfs-info`.
#[derive(Debug, Clone)]
pub struct VfsInfo {
    pub name: String,
    pub source_path: String,
    /// Display fingerprint derived from name, size and mtime. Stable within
    /// one process run only; not a content hash.
    pub fingerprint: String,
    pub file_count: usize,
    pub dir_count: usize,
    pub total_entries: usize,
    pub size_bytes: u64,
    pub modified: SystemTime,
}
