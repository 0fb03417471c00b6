//! Data models for directory entries, discovered files and progress reports

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// One entry of a directory listing as reported by a filesystem accessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Raw name as stored on disk; need not be valid UTF-8
    pub name: OsString,
    pub is_dir: bool,
}

impl DirEntry {
    #[must_use]
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    #[must_use]
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Portable subset of platform file information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub len: u64,
    pub modified: Option<SystemTime>,
    pub readonly: bool,
}

impl From<&fs::Metadata> for FileMetadata {
    fn from(metadata: &fs::Metadata) -> Self {
        Self {
            len: metadata.len(),
            modified: metadata.modified().ok(),
            readonly: metadata.permissions().readonly(),
        }
    }
}

/// A regular file found during traversal
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub name: String,
    pub path: PathBuf,
    pub metadata: FileMetadata,
}

/// Lightweight record kept in the result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFile {
    pub name: String,
    pub path: String,
}

/// Matched files keyed by file name.
///
/// Two files sharing a name in different directories collide; the one
/// visited last wins.
pub type FileList = HashMap<String, TargetFile>;

/// Location dump emitted when a progress report is requested mid-scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub directory: PathBuf,
    /// Absolute segment count of the entry being visited
    pub depth: usize,
    /// Segment count relative to the starting directory
    pub relative_depth: usize,
}
