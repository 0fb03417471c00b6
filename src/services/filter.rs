//! Extension filtering of traversal results

use crate::models::{FileList, FileRecord, TargetFile};

/// Extension of a file name: the suffix from the last `.` onwards, or `""`.
///
/// Dot-files count as pure extension (`.bashrc` → `.bashrc`) and only the
/// final suffix of compound extensions is kept (`a.tar.gz` → `.gz`).
#[must_use]
pub fn extension_of(name: &str) -> &str {
    name.rfind('.').map_or("", |idx| &name[idx..])
}

/// Keep records whose extension equals `ext` exactly, keyed by file name.
///
/// Matching is case-sensitive. A later record replaces an earlier one with
/// the same name.
#[must_use]
pub fn filter_by_extension(files: Vec<FileRecord>, ext: &str) -> FileList {
    let mut list = FileList::with_capacity(files.len());
    for file in files {
        if extension_of(&file.name) != ext {
            continue;
        }
        log::info!("Adding file: {}", file.name);
        let path = file.path.to_string_lossy().into_owned();
        list.insert(
            file.name.clone(),
            TargetFile {
                name: file.name,
                path,
            },
        );
    }
    list
}
