//! Accessor backed by the host filesystem.

use super::FsAccessor;
use crate::models::{DirEntry, FileMetadata};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FsAccessor for LocalFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // file_type does not follow symlinks
            let is_dir = entry.file_type()?.is_dir();
            entries.push(DirEntry {
                name: entry.file_name(),
                is_dir,
            });
        }
        Ok(entries)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let metadata = fs::symlink_metadata(path)?;
        log::trace!("Metadata for {}: {} bytes", path.display(), metadata.len());
        Ok(FileMetadata::from(&metadata))
    }
}
