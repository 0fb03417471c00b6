//! Output formatting for CLI

use crate::models::{FileList, ProgressReport, TargetFile};
use crate::Summary;

/// Matched files ordered by name, then path
#[must_use]
pub fn sorted_files(files: &FileList) -> Vec<&TargetFile> {
    let mut sorted: Vec<&TargetFile> = files.values().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
    sorted
}

/// One `Name: <name>  Path: <path>` line per matched file
#[must_use]
pub fn format_text(files: &FileList) -> String {
    sorted_files(files)
        .into_iter()
        .map(|file| format!("Name: {}  Path: {}\n", file.name, file.path))
        .collect()
}

/// Format a summary as a JSON document
#[must_use]
pub fn format_json(summary: &Summary) -> String {
    let elapsed_ms = summary
        .finished_at
        .duration_since(summary.started_at)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0);

    let output = serde_json::json!({
        "root": summary.root,
        "extension": summary.extension,
        "depth_limit": summary.depth_limit,
        "cancelled": summary.cancelled,
        "elapsed_ms": elapsed_ms,
        "file_count": summary.files.len(),
        "files": sorted_files(&summary.files),
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Line printed when a progress report is requested
#[must_use]
pub fn format_progress(report: &ProgressReport) -> String {
    format!(
        "Directory: {}, Depth: {}",
        report.directory.display(),
        report.depth
    )
}
