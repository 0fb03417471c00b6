//! Depth-limited recursive traversal.
//!
//! The engine walks one directory at a time, depth first and on the calling
//! thread. Every call owns its own accumulator; results of nested calls are
//! moved into the parent's. Two external inputs are observed cooperatively:
//!
//! - the [`CancellationToken`], checked once on entry to every call;
//! - the [`ProgressFlag`], consumed once per visited entry.

pub mod cancel;
pub mod progress;

pub use cancel::CancellationToken;
pub use progress::{ProgressFlag, ProgressNotifier};

use crate::models::{FileRecord, ProgressReport};
use crate::services::depth::check_depth;
use crate::services::fs::FsAccessor;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Control inputs shared between a running scan and whoever drives it.
#[derive(Debug, Clone, Default)]
pub struct ScanSignals {
    pub cancel: CancellationToken,
    pub progress: ProgressFlag,
}

impl ScanSignals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals whose cancellation token expires after `timeout`.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancel: CancellationToken::with_timeout(timeout),
            progress: ProgressFlag::new(),
        }
    }
}

/// Per-call traversal state.
///
/// The starting directory and depth limit are fixed when the root context is
/// built; [`TraversalContext::child`] only swaps the current directory.
#[derive(Debug, Clone)]
pub struct TraversalContext<'a> {
    current_dir: PathBuf,
    starter_dir: &'a Path,
    depth_limit: u16,
}

impl<'a> TraversalContext<'a> {
    #[must_use]
    pub fn new(starter_dir: &'a Path, depth_limit: u16) -> Self {
        Self {
            current_dir: starter_dir.to_path_buf(),
            starter_dir,
            depth_limit,
        }
    }

    #[must_use]
    pub fn child(&self, current_dir: PathBuf) -> Self {
        Self {
            current_dir,
            starter_dir: self.starter_dir,
            depth_limit: self.depth_limit,
        }
    }

    #[must_use]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[must_use]
    pub fn starter_dir(&self) -> &'a Path {
        self.starter_dir
    }

    #[must_use]
    pub fn depth_limit(&self) -> u16 {
        self.depth_limit
    }
}

/// Traversal engine bound to an accessor and a set of scan signals.
pub struct Traverser<'a, F: FsAccessor + ?Sized> {
    fs: &'a F,
    signals: &'a ScanSignals,
    visit_delay: Duration,
    notifier: Option<&'a ProgressNotifier>,
}

impl<'a, F: FsAccessor + ?Sized> Traverser<'a, F> {
    #[must_use]
    pub fn new(fs: &'a F, signals: &'a ScanSignals) -> Self {
        Self {
            fs,
            signals,
            visit_delay: Duration::ZERO,
            notifier: None,
        }
    }

    /// Sleep this long at the start of every directory visit.
    #[must_use]
    pub fn with_visit_delay(mut self, delay: Duration) -> Self {
        self.visit_delay = delay;
        self
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Option<&'a ProgressNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Collect the files under `ctx.current_dir()` that lie within the depth limit.
    ///
    /// Returns an empty list without error when the scan has been cancelled.
    /// When the first child of a directory exceeds the limit, that directory's
    /// remaining entries are not visited.
    ///
    /// A pending progress request is answered in place of the entry being
    /// visited: that entry is neither recursed into nor recorded, so a report
    /// can drop a real file from the result.
    pub fn traverse(&self, ctx: &TraversalContext<'_>) -> Result<Vec<FileRecord>> {
        let current = ctx.current_dir();

        if self.signals.cancel.is_cancelled() {
            log::info!("Scan cancelled, not listing {}", current.display());
            return Ok(Vec::new());
        }

        log::info!(
            "New directory check: curDir={} dLimit={}",
            current.display(),
            ctx.depth_limit()
        );

        if !self.visit_delay.is_zero() {
            std::thread::sleep(self.visit_delay);
        }

        let entries = self.fs.read_dir(current).map_err(|source| {
            log::error!(
                "Failed to read directory: path={} error={source}",
                current.display()
            );
            Error::Listing {
                path: current.to_path_buf(),
                source,
            }
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let child = ctx.child(current.join(&entry.name));
            let check = check_depth(child.current_dir(), child.starter_dir(), child.depth_limit())?;

            if check.exceeded {
                return Ok(files);
            }

            if self.signals.progress.take() {
                let report = ProgressReport {
                    directory: current.to_path_buf(),
                    depth: check.depth,
                    relative_depth: check.relative_depth,
                };
                progress::emit(&report, self.notifier);
                continue;
            }

            if entry.is_dir {
                log::info!(
                    "Starting new list directory: path={}",
                    child.current_dir().display()
                );
                let nested = self.traverse(&child).inspect_err(|err| {
                    log::error!(
                        "Failed to list nested directory: path={} starterDir={} dLimit={} error={err}",
                        child.current_dir().display(),
                        ctx.starter_dir().display(),
                        ctx.depth_limit()
                    );
                })?;
                if let Some(first) = nested.first() {
                    log::info!(
                        "Got new children: path={} count={} first={}",
                        child.current_dir().display(),
                        nested.len(),
                        first.path.display()
                    );
                }
                files.extend(nested);
            } else {
                let metadata = self.fs.metadata(child.current_dir()).map_err(|source| {
                    log::error!(
                        "Failed to get file info: filename={} error={source}",
                        entry.name.to_string_lossy()
                    );
                    Error::Metadata {
                        path: child.current_dir().to_path_buf(),
                        source,
                    }
                })?;
                log::info!("Got new file: path={}", child.current_dir().display());
                files.push(FileRecord {
                    name: entry.name.to_string_lossy().into_owned(),
                    path: child.current_dir().to_path_buf(),
                    metadata,
                });
            }
        }

        Ok(files)
    }
}
