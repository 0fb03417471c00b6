//! In-memory accessor for tests and callers that scan synthetic trees.

use super::FsAccessor;
use crate::models::{DirEntry, FileMetadata};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum Node {
    Dir { readable: bool },
    File { metadata: Option<FileMetadata> },
}

/// Directory tree held in memory.
///
/// Listings are returned in path order. Parents are created implicitly
/// whenever a descendant is added.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    cwd: Option<PathBuf>,
    nodes: BTreeMap<PathBuf, Node>,
}

impl MemoryFs {
    /// Create a tree whose working directory is `cwd`.
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let fs = Self::default().with_dir(&cwd);
        Self {
            cwd: Some(cwd),
            ..fs
        }
    }

    #[must_use]
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), Node::Dir { readable: true });
        self
    }

    /// Add a directory whose listing fails with `PermissionDenied`.
    #[must_use]
    pub fn with_unreadable_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), Node::Dir { readable: false });
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, len: u64) -> Self {
        let metadata = FileMetadata {
            len,
            ..FileMetadata::default()
        };
        self.insert(
            path.as_ref(),
            Node::File {
                metadata: Some(metadata),
            },
        );
        self
    }

    /// Add a file that lists fine but whose metadata cannot be read.
    #[must_use]
    pub fn with_broken_file(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), Node::File { metadata: None });
        self
    }

    fn insert(&mut self, path: &Path, node: Node) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Dir { readable: true });
        }
        self.nodes.insert(path.to_path_buf(), node);
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such entry: {}", path.display()),
        )
    }
}

impl FsAccessor for MemoryFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        match self.nodes.get(path) {
            None => return Err(Self::not_found(path)),
            Some(Node::File { .. }) => {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("not a directory: {}", path.display()),
                ));
            }
            Some(Node::Dir { readable: false }) => {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!("permission denied: {}", path.display()),
                ));
            }
            Some(Node::Dir { readable: true }) => {}
        }

        let entries = self
            .nodes
            .range(path.to_path_buf()..)
            .skip(1)
            .take_while(|(candidate, _)| candidate.starts_with(path))
            .filter(|(candidate, _)| candidate.parent() == Some(path))
            .filter_map(|(candidate, node)| {
                let name = candidate.file_name()?.to_os_string();
                Some(DirEntry {
                    name,
                    is_dir: matches!(node, Node::Dir { .. }),
                })
            })
            .collect();
        Ok(entries)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.cwd
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "working directory unavailable"))
    }

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        match self.nodes.get(path) {
            None => Err(Self::not_found(path)),
            Some(Node::Dir { .. }) => Ok(FileMetadata::default()),
            Some(Node::File { metadata: Some(metadata) }) => Ok(metadata.clone()),
            Some(Node::File { metadata: None }) => Err(io::Error::other(format!(
                "metadata unavailable: {}",
                path.display()
            ))),
        }
    }
}
