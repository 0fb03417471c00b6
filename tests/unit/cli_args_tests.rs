//! Unit tests for CLI argument parsing

use extscan::cli::args::{CliArgs, DEFAULT_TIMEOUT_SECS, parse_args};

fn make_args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_arguments_use_defaults() {
    let parsed = parse_args(&make_args(&["extscan"])).expect("parse defaults");

    assert_eq!(parsed, CliArgs::default());
    assert_eq!(parsed.extension, ".go");
    assert_eq!(parsed.max_depth, 2);
    assert_eq!(parsed.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(parsed.visit_delay_ms, 0);
}

#[test]
fn all_options_are_applied() {
    let argv = make_args(&[
        "extscan",
        "--ext",
        ".rs",
        "--max-depth",
        "5",
        "--timeout",
        "10",
        "--visit-delay-ms",
        "250",
        "--json",
        "--quiet",
    ]);

    let parsed = parse_args(&argv).expect("parse options");

    assert_eq!(parsed.extension, ".rs");
    assert_eq!(parsed.max_depth, 5);
    assert_eq!(parsed.timeout_secs, 10);
    assert_eq!(parsed.visit_delay_ms, 250);
    assert!(parsed.json);
    assert!(parsed.quiet);
}

#[test]
fn extension_requires_leading_dot() {
    let err = parse_args(&make_args(&["extscan", "--ext", "go"]))
        .expect_err("extension without dot should fail");
    assert!(err.contains("must start with '.'"));
}

#[test]
fn value_flags_require_values() {
    for flag in ["--ext", "--max-depth", "--timeout", "--visit-delay-ms"] {
        let err = parse_args(&make_args(&["extscan", flag]))
            .expect_err("flag without value should fail");
        assert!(err.contains("requires a value"), "{flag}: {err}");
    }
}

#[test]
fn timeout_must_be_positive() {
    let err = parse_args(&make_args(&["extscan", "--timeout", "0"]))
        .expect_err("zero timeout should be rejected");
    assert!(err.contains("greater than zero"));
}

#[test]
fn non_numeric_depth_is_rejected() {
    let err = parse_args(&make_args(&["extscan", "--max-depth", "deep"]))
        .expect_err("non-numeric depth should fail");
    assert!(err.contains("--max-depth must be a number"));
}

#[test]
fn unknown_options_and_positionals_are_rejected() {
    let err = parse_args(&make_args(&["extscan", "--recursive"])).unwrap_err();
    assert!(err.contains("Unknown option"));

    let err = parse_args(&make_args(&["extscan", "/tmp"])).unwrap_err();
    assert!(err.contains("Unexpected argument"));
}
