//! Archive-Backed Virtual Filesystem
//!
//! Presents a navigable, directory-like view over the flat entry list of a
//! ZIP archive. Hierarchy is entirely inferred from `/`-delimited prefixes of
//! entry paths; the archive is read-only for the life of the process. The
//! current directory is the only mutable field, written exclusively by
//! `change_directory`.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::vfs::archive::parse_archive;
use crate::vfs::types::{ArchiveEntry, VfsError, VfsInfo};

/// Display name used in the prompt when no archive is loaded.
pub const UNLOADED_NAME: &str = "no-vfs";

struct LoadedArchive {
    entries: Vec<ArchiveEntry>,
    name: String,
    source_path: String,
    size_bytes: u64,
    modified: SystemTime,
}

/// Outcome of a successful load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub name: String,
    pub entry_count: usize,
    /// Set when the archive parsed cleanly but contains no entries.
    pub warning: Option<String>,
}

pub struct VirtualFs {
    source: Option<LoadedArchive>,
    current_dir: String,
}

impl VirtualFs {
    /// Create an unloaded filesystem. Every operation except `resolve`
    /// reports `NotLoaded` until `load` succeeds.
    pub fn new() -> Self {
        Self {
            source: None,
            current_dir: "/".to_string(),
        }
    }

    /// Build a filesystem directly from an entry list, bypassing the archive
    /// container. Used for preloaded filesystems and in tests.
    pub fn from_entries(name: &str, entries: Vec<ArchiveEntry>) -> Self {
        let size_bytes = entries.iter().map(|e| e.content.len() as u64).sum();
        Self {
            source: Some(LoadedArchive {
                entries,
                name: name.to_string(),
                source_path: "<memory>".to_string(),
                size_bytes,
                modified: SystemTime::now(),
            }),
            current_dir: "/".to_string(),
        }
    }

    /// Load a ZIP archive from disk. On failure the filesystem stays (or
    /// becomes) unloaded and the error is returned for reporting; the caller
    /// treats every failure as non-fatal.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport, VfsError> {
        let meta = std::fs::metadata(path).map_err(|_| VfsError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let bytes = std::fs::read(path).map_err(|e| VfsError::ArchiveInvalid {
            reason: format!("cannot read '{}': {}", path.display(), e),
        })?;
        let entries = parse_archive(&bytes)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "default".to_string());
        let source_path = std::fs::canonicalize(path)
            .unwrap_or_else(|_| path.to_path_buf())
            .display()
            .to_string();

        let report = LoadReport {
            name: name.clone(),
            entry_count: entries.len(),
            warning: entries
                .is_empty()
                .then(|| "archive contains no entries".to_string()),
        };

        self.source = Some(LoadedArchive {
            entries,
            name,
            source_path,
            size_bytes: meta.len(),
            modified: meta.modified().unwrap_or(UNIX_EPOCH),
        });
        self.current_dir = "/".to_string();
        Ok(report)
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// Display name of the loaded archive, or the fixed placeholder.
    pub fn name(&self) -> &str {
        self.source
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or(UNLOADED_NAME)
    }

    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    /// Resolve a user-supplied path against the current directory into a
    /// normalized absolute path. Pure string work: never touches the entry
    /// list, never fails. `..` pops one segment (no-op at root), `.` and
    /// empty segments are dropped, the separator is always `/`.
    pub fn resolve(&self, arg: &str) -> String {
        let joined = if arg.starts_with('/') {
            arg.to_string()
        } else if self.current_dir == "/" {
            format!("/{}", arg)
        } else {
            format!("{}/{}", self.current_dir, arg)
        };
        normalize_path(&joined)
    }

    /// Change the current directory. The target must denote a directory:
    /// root, a prefix of some entry's path, or an explicit directory marker.
    /// On failure the current directory is left unchanged, which keeps the
    /// invariant that it always points at an enterable directory.
    pub fn change_directory(&mut self, target: &str) -> Result<(), VfsError> {
        let src = self.source.as_ref().ok_or(VfsError::NotLoaded)?;
        let resolved = self.resolve(target);
        if resolved != "/" {
            let prefix = format!("{}/", &resolved[1..]);
            // A marker entry equals the prefix exactly; starts_with covers both.
            if !src.entries.iter().any(|e| e.path.starts_with(&prefix)) {
                return Err(VfsError::PathNotFound { path: resolved });
            }
        }
        self.current_dir = resolved;
        Ok(())
    }

    /// List the direct children of a directory: the deduplicated union of
    /// file names and inferred first-segment subdirectory names under the
    /// target's prefix, sorted case-insensitively (stable).
    ///
    /// An unloaded filesystem is an error, not an empty listing.
    pub fn list_files(&self, directory: Option<&str>) -> Result<Vec<String>, VfsError> {
        let src = self.source.as_ref().ok_or(VfsError::NotLoaded)?;
        let target = match directory {
            Some(d) => self.resolve(d),
            None => self.current_dir.clone(),
        };
        let prefix = if target == "/" {
            String::new()
        } else {
            format!("{}/", &target[1..])
        };

        let mut names = BTreeSet::new();
        for entry in &src.entries {
            if entry.path.len() > prefix.len() && entry.path.starts_with(&prefix) {
                let rest = &entry.path[prefix.len()..];
                match rest.find('/') {
                    Some(pos) => {
                        // Deeper entry: the first segment names a subdirectory.
                        names.insert(rest[..pos].to_string());
                    }
                    None => {
                        names.insert(rest.to_string());
                    }
                }
            }
        }

        let mut out: Vec<String> = names.into_iter().collect();
        out.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        Ok(out)
    }

    /// Re-derive whether a path names a directory (explicitly marked or
    /// inferred). Consumers use this to decorate listings.
    pub fn is_directory(&self, path: &str) -> bool {
        let Some(src) = self.source.as_ref() else {
            return false;
        };
        let resolved = self.resolve(path);
        if resolved == "/" {
            return true;
        }
        let prefix = format!("{}/", &resolved[1..]);
        src.entries.iter().any(|e| e.path.starts_with(&prefix))
    }

    /// Read a file as text. An exact entry match is required; a miss is
    /// `FileNotFound`, a match whose bytes are not valid UTF-8 is `NotText`.
    /// Line terminators are preserved; splitting is the caller's concern.
    pub fn read_file(&self, name: &str) -> Result<String, VfsError> {
        let src = self.source.as_ref().ok_or(VfsError::NotLoaded)?;
        let resolved = self.resolve(name);
        let key = &resolved[1..];
        let entry = src
            .entries
            .iter()
            .find(|e| e.path == key)
            .ok_or_else(|| VfsError::FileNotFound {
                path: resolved.clone(),
            })?;
        String::from_utf8(entry.content.clone())
            .map_err(|_| VfsError::NotText { path: resolved })
    }

    /// Metadata for `vfs-info`. The fingerprint hashes (name, size, mtime)
    /// with the standard library's `DefaultHasher` and keeps the low 32 bits;
    /// it is a display value, stable within one process run only.
    pub fn info(&self) -> Result<VfsInfo, VfsError> {
        let src = self.source.as_ref().ok_or(VfsError::NotLoaded)?;
        let dir_count = src.entries.iter().filter(|e| e.is_dir_marker()).count();
        let mtime_secs = src
            .modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let mut hasher = DefaultHasher::new();
        src.name.hash(&mut hasher);
        src.size_bytes.hash(&mut hasher);
        mtime_secs.hash(&mut hasher);
        let fingerprint = format!("{:08x}", hasher.finish() as u32);

        Ok(VfsInfo {
            name: src.name.clone(),
            source_path: src.source_path.clone(),
            fingerprint,
            file_count: src.entries.len() - dir_count,
            dir_count,
            total_entries: src.entries.len(),
            size_bytes: src.size_bytes,
            modified: src.modified,
        })
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

// ============================================================================
// Tests
// ============================================================================
