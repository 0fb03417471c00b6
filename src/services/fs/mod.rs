//! Filesystem accessors used by the traversal engine.
//!
//! The engine never touches `std::fs` directly; it goes through an
//! [`FsAccessor`] so that traversal can run against the real filesystem
//! ([`local::LocalFs`]) or an in-memory tree ([`memory::MemoryFs`]).

use crate::models::{DirEntry, FileMetadata};
use std::io;
use std::path::{Path, PathBuf};

/// Capability for listing directories and resolving the starting point of a scan.
pub trait FsAccessor {
    /// List the entries of `path` in the order the backend yields them.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Directory a scan starts from when no explicit root is given.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Metadata for a file previously returned by [`FsAccessor::read_dir`].
    fn metadata(&self, path: &Path) -> io::Result<FileMetadata>;
}

impl<T: FsAccessor + ?Sized> FsAccessor for &T {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        (**self).read_dir(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        (**self).current_dir()
    }

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        (**self).metadata(path)
    }
}

pub mod local;
pub mod memory;

pub use local::LocalFs;
pub use memory::MemoryFs;
