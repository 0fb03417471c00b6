//! Integration tests for scanning real and in-memory trees

use crate::fixtures::{create_tree, names};
use extscan::{Error, LocalFs, MemoryFs, ScanOptions, ScanSignals};
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn scan_via_api_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_tree(
        root,
        &["main.go", "README.md", "pkg/util.go", "pkg/util_test.go", "pkg/deep/inner/hidden.go"],
    )
    .unwrap();

    let summary =
        extscan::find_files_in(&LocalFs, root, &ScanOptions::default(), &ScanSignals::new())
            .unwrap();

    assert_eq!(
        names(&summary.files).into_iter().collect::<Vec<_>>(),
        vec!["main.go", "util.go", "util_test.go"]
    );
    assert_eq!(
        PathBuf::from(&summary.files["util.go"].path),
        root.join("pkg").join("util.go")
    );
    assert!(!summary.cancelled);
    assert_eq!(summary.depth_limit, 2);
    assert_eq!(summary.root, root.to_string_lossy());
}

#[test]
fn repeated_scans_of_unchanged_tree_agree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_tree(root, &["a.go", "b/c.go", "b/d.txt", "e/f/g.go"]).unwrap();

    let opts = ScanOptions {
        max_depth: 3,
        ..ScanOptions::default()
    };
    let first = extscan::find_files_in(&LocalFs, root, &opts, &ScanSignals::new()).unwrap();
    let second = extscan::find_files_in(&LocalFs, root, &opts, &ScanSignals::new()).unwrap();

    assert_eq!(first.files, second.files);
    assert_eq!(first.files.len(), 3);
}

#[test]
fn custom_extension_and_depth() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_tree(root, &["lib.rs", "src/a/b/c/deep.rs", "src/a/b/mid.rs"]).unwrap();

    let opts = ScanOptions {
        extension: ".rs".to_string(),
        max_depth: 4,
        ..ScanOptions::default()
    };
    let summary = extscan::find_files_in(&LocalFs, root, &opts, &ScanSignals::new()).unwrap();

    assert_eq!(
        names(&summary.files).into_iter().collect::<Vec<_>>(),
        vec!["lib.rs", "mid.rs"]
    );
}

#[test]
fn duplicate_names_keep_the_last_visited() {
    let fs = MemoryFs::new("/root")
        .with_file("/root/a/x.go", 1)
        .with_file("/root/b/x.go", 1);

    let summary = extscan::find_files(&fs, &ScanOptions::default(), &ScanSignals::new()).unwrap();

    assert_eq!(summary.files.len(), 1);
    assert_eq!(
        PathBuf::from(&summary.files["x.go"].path),
        PathBuf::from("/root/b/x.go")
    );
}

#[test]
fn find_files_starts_at_working_directory() {
    let fs = MemoryFs::new("/root")
        .with_file("/root/a.go", 1)
        .with_file("/root/b/c.go", 1)
        .with_file("/root/b/notes.txt", 1)
        .with_file("/other/d.go", 1);

    let summary = extscan::find_files(&fs, &ScanOptions::default(), &ScanSignals::new()).unwrap();

    assert_eq!(summary.files.len(), 2);
    assert!(summary.files.contains_key("a.go"));
    assert!(summary.files.contains_key("c.go"));
    assert_eq!(PathBuf::from(&summary.root), PathBuf::from("/root"));
}

#[test]
fn extension_without_dot_is_invalid_input() {
    let fs = MemoryFs::new("/root").with_file("/root/a.go", 1);
    let opts = ScanOptions {
        extension: "go".to_string(),
        ..ScanOptions::default()
    };

    let err = extscan::find_files(&fs, &opts, &ScanSignals::new()).unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)), "got {err}");
}

#[test]
fn binary_prints_matches_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_tree(root, &["main.go", "cmd/tool.go", "cmd/tool/nested/skip.go", "docs/guide.md"]).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_extscan"))
        .arg("--quiet")
        .current_dir(root)
        .output()
        .expect("run extscan");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout: {stdout}");
    assert!(lines[0].starts_with("Name: main.go  Path: "));
    assert!(lines[1].starts_with("Name: tool.go  Path: "));
}

#[test]
fn binary_emits_json() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_tree(root, &["a.rs", "b.go"]).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_extscan"))
        .args(["--quiet", "--json", "--ext", ".rs"])
        .current_dir(root)
        .output()
        .expect("run extscan");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["extension"], ".rs");
    assert_eq!(json["file_count"], 1);
    assert_eq!(json["files"][0]["name"], "a.rs");
}

#[test]
fn binary_help_and_bad_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_extscan"))
        .arg("--help")
        .output()
        .expect("run extscan");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--max-depth"));

    let output = Command::new(env!("CARGO_BIN_EXE_extscan"))
        .args(["--ext", "go"])
        .output()
        .expect("run extscan");
    assert_eq!(output.status.code(), Some(2));
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_file_name_does_not_break_the_scan() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_tree(root, &["main.go", "pkg/util.go"]).unwrap();
    std::fs::write(root.join(OsStr::from_bytes(b"bad\xffname.txt")), b"x").unwrap();
    std::fs::write(root.join("pkg").join(OsStr::from_bytes(b"odd\xfe.go")), b"x").unwrap();

    let summary =
        extscan::find_files_in(&LocalFs, root, &ScanOptions::default(), &ScanSignals::new())
            .unwrap();

    assert!(summary.files.contains_key("main.go"));
    assert!(summary.files.contains_key("util.go"));
    // Lossy name in the result, but the file itself was reached
    assert!(summary.files.contains_key("odd\u{FFFD}.go"));
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_not_descended() {
    let outside = TempDir::new().unwrap();
    create_tree(outside.path(), &["outside.go"]).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_tree(root, &["inside.go"]).unwrap();
    std::os::unix::fs::symlink(outside.path(), root.join("linked")).unwrap();

    let summary =
        extscan::find_files_in(&LocalFs, root, &ScanOptions::default(), &ScanSignals::new())
            .unwrap();

    assert_eq!(names(&summary.files).into_iter().collect::<Vec<_>>(), vec!["inside.go"]);
}
