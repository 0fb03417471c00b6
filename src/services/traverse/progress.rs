//! Progress-report requests raised asynchronously (SIGUSR1) and consumed by the engine.

use crate::models::ProgressReport;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Callback receiving progress reports.
pub type ProgressNotifier = Arc<dyn Fn(&ProgressReport) + Send + Sync>;

/// Pending "report progress" request.
///
/// Raising is lossy: several raises between two checks produce one report.
#[derive(Debug, Clone, Default)]
pub struct ProgressFlag {
    requested: Arc<AtomicBool>,
}

impl ProgressFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    /// Consume a pending request, returning whether one was raised.
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }

    /// Shared flag for registration with an OS signal handler.
    #[cfg_attr(not(unix), allow(dead_code))]
    pub(crate) fn shared(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.requested)
    }
}

/// Deliver a report to the notifier, if any, and log it.
pub(crate) fn emit(report: &ProgressReport, notifier: Option<&ProgressNotifier>) {
    log::info!(
        "Progress: directory={} depth={} relative_depth={}",
        report.directory.display(),
        report.depth,
        report.relative_depth
    );

    if let Some(notifier) = notifier {
        notifier(report);
    }
}
