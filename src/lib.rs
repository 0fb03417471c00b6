//! Depth-limited file discovery library
//!
//! This library walks a directory tree up to a fixed depth below its starting
//! directory and collects the files whose name carries a given extension.
//! Scans cooperate with an external cancellation token (explicit cancel or
//! deadline) and answer asynchronous progress-report requests.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{DirEntry, FileList, FileMetadata, FileRecord, ProgressReport, TargetFile};
pub use services::fs::{FsAccessor, LocalFs, MemoryFs};
pub use services::traverse::{
    CancellationToken, ProgressFlag, ProgressNotifier, ScanSignals, TraversalContext, Traverser,
};

use std::path::{Path, PathBuf};
use std::result;
use std::time::{Duration, SystemTime};

/// Extension searched for when none is configured
pub const DEFAULT_EXTENSION: &str = ".go";
/// Depth limit applied when none is configured
pub const DEFAULT_MAX_DEPTH: u16 = 2;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    PathResolution {
        path: PathBuf,
        source: std::io::Error,
    },
    Listing {
        path: PathBuf,
        source: std::io::Error,
    },
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
    WorkingDirectory(std::io::Error),
    InvalidInput(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::PathResolution { path, source } => {
                write!(f, "cannot resolve absolute path of {}: {source}", path.display())
            }
            Error::Listing { path, source } => {
                write!(f, "cannot read directory {}: {source}", path.display())
            }
            Error::Metadata { path, source } => {
                write!(f, "cannot read file info of {}: {source}", path.display())
            }
            Error::WorkingDirectory(e) => write!(f, "cannot determine working directory: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::PathResolution { source, .. }
            | Error::Listing { source, .. }
            | Error::Metadata { source, .. }
            | Error::WorkingDirectory(source) => Some(source),
            Error::InvalidInput(_) => None,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Options for a scan
#[derive(Clone)]
pub struct ScanOptions {
    /// Target extension including the leading dot, e.g. `.go`
    pub extension: String,
    pub max_depth: u16,
    /// Artificial latency at the start of each directory visit
    pub visit_delay: Duration,
    pub progress_notifier: Option<ProgressNotifier>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            visit_delay: Duration::ZERO,
            progress_notifier: None,
        }
    }
}

impl std::fmt::Debug for ScanOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanOptions")
            .field("extension", &self.extension)
            .field("max_depth", &self.max_depth)
            .field("visit_delay", &self.visit_delay)
            .field("progress_notifier", &self.progress_notifier.is_some())
            .finish()
    }
}

/// Summary result from a scan operation
#[derive(Debug)]
pub struct Summary {
    pub root: String,
    pub extension: String,
    pub depth_limit: u16,
    pub files: FileList,
    /// Whether cancellation was observed; `files` may then be partial
    pub cancelled: bool,
    pub started_at: SystemTime,
    pub finished_at: SystemTime,
}

/// Scan the accessor's working directory for files matching `opts.extension`.
pub fn find_files<F: FsAccessor + ?Sized>(
    fs: &F,
    opts: &ScanOptions,
    signals: &ScanSignals,
) -> Result<Summary> {
    let wd = fs.current_dir().map_err(|e| {
        log::error!("Failed to get working directory: error={e}");
        Error::WorkingDirectory(e)
    })?;

    find_files_in(fs, &wd, opts, signals)
}

/// Scan `root` for files matching `opts.extension`.
///
/// # Arguments
/// * `fs` - Accessor used for every listing and metadata lookup
/// * `root` - Starting directory; depth is measured from here
/// * `opts` - Scan options
/// * `signals` - Cancellation token and progress flag observed by the walk
pub fn find_files_in<F: FsAccessor + ?Sized>(
    fs: &F,
    root: &Path,
    opts: &ScanOptions,
    signals: &ScanSignals,
) -> Result<Summary> {
    if !opts.extension.starts_with('.') {
        return Err(Error::InvalidInput(format!(
            "extension must start with '.': {:?}",
            opts.extension
        )));
    }

    let started_at = SystemTime::now();

    let context = TraversalContext::new(root, opts.max_depth);
    let traverser = Traverser::new(fs, signals)
        .with_visit_delay(opts.visit_delay)
        .with_notifier(opts.progress_notifier.as_ref());

    let records = traverser.traverse(&context).inspect_err(|e| {
        log::error!(
            "Failed to collect files: wd={} dLimit={} error={e}",
            root.display(),
            opts.max_depth
        );
    })?;

    let files = services::filter::filter_by_extension(records, &opts.extension);
    let cancelled = signals.cancel.is_cancelled();
    if cancelled {
        log::warn!(
            "Scan of {} cancelled; {} matching files collected before stopping",
            root.display(),
            files.len()
        );
    }

    Ok(Summary {
        root: root.to_string_lossy().into_owned(),
        extension: opts.extension.clone(),
        depth_limit: opts.max_depth,
        files,
        cancelled,
        started_at,
        finished_at: SystemTime::now(),
    })
}
