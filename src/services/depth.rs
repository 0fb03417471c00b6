//! Depth-limit evaluation relative to the directory a scan started from

use crate::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Outcome of comparing a candidate path against the depth limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthCheck {
    pub exceeded: bool,
    /// Segment count of the candidate's absolute path, root included
    pub depth: usize,
    /// Segments below the starting directory
    pub relative_depth: usize,
}

/// Compare `current` against `starter` and report whether it lies more than
/// `depth_limit` segments below it.
///
/// Both paths are made absolute first; relative paths resolve against the
/// process working directory.
pub fn check_depth(current: &Path, starter: &Path, depth_limit: u16) -> Result<DepthCheck> {
    let current_abs = resolve(current)?;
    let starter_abs = resolve(starter)?;

    let depth = segment_count(&current_abs);
    let relative_depth = depth.saturating_sub(segment_count(&starter_abs));
    let exceeded = relative_depth > usize::from(depth_limit);

    if exceeded {
        log::info!(
            "Depth limit reached: curDir={} depth={relative_depth} dLimit={depth_limit}",
            current.display()
        );
    }

    Ok(DepthCheck {
        exceeded,
        depth,
        relative_depth,
    })
}

fn resolve(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|source| {
        log::error!(
            "Failed to resolve absolute path: path={} error={source}",
            path.display()
        );
        Error::PathResolution {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Count path segments using the host's component rules.
///
/// `.` is ignored and `..` cancels the preceding normal segment, so the count
/// matches the lexically cleaned path.
pub(crate) fn segment_count(path: &Path) -> usize {
    let mut anchors = 0usize;
    let mut normal = 0usize;
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => anchors += 1,
            Component::CurDir => {}
            Component::ParentDir => normal = normal.saturating_sub(1),
            Component::Normal(_) => normal += 1,
        }
    }
    anchors + normal
}
