//! extscan - Main binary entry point

use extscan::cli::args::{CliArgs, parse_args};
use extscan::cli::output::{format_json, format_progress, format_text};
use extscan::cli::signals;
use extscan::models::ProgressReport;
use extscan::{LocalFs, ScanOptions, ScanSignals};
use std::process;
use std::sync::Arc;
use std::time::Duration;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=info extscan --ext .rs
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if let Some(first) = args.get(1) {
        match first.as_str() {
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--version" | "-v" => {
                print_version();
                return;
            }
            _ => {}
        }
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    process::exit(run(&cli_args));
}

fn run(args: &CliArgs) -> i32 {
    let scan_signals = ScanSignals::with_timeout(Duration::from_secs(args.timeout_secs));

    let guard = match signals::install(&scan_signals) {
        Ok(guard) => guard,
        Err(e) => {
            log::error!("Failed to install signal handlers: {e}");
            eprintln!("Error: failed to install signal handlers: {e}");
            return 1;
        }
    };

    // Progress reports print even with --quiet
    let opts = ScanOptions {
        extension: args.extension.clone(),
        max_depth: args.max_depth,
        visit_delay: Duration::from_millis(args.visit_delay_ms),
        progress_notifier: Some(Arc::new(|report: &ProgressReport| {
            eprintln!("{}", format_progress(report));
        })),
    };

    if !args.quiet {
        eprintln!(
            "Searching for *{} (depth limit {}, timeout {}s)",
            args.extension, args.max_depth, args.timeout_secs
        );
    }

    let worker_signals = scan_signals.clone();
    let worker = std::thread::Builder::new()
        .name("scan".to_string())
        .spawn(move || extscan::find_files(&LocalFs, &opts, &worker_signals));

    let outcome = match worker {
        Ok(handle) => handle.join(),
        Err(e) => {
            guard.close();
            log::error!("Failed to start scan thread: {e}");
            eprintln!("Error: failed to start scan thread: {e}");
            return 1;
        }
    };

    guard.close();

    let summary = match outcome {
        Ok(Ok(summary)) => summary,
        Ok(Err(e)) => {
            log::error!("Error on search: {e}");
            eprintln!("Error: {e}");
            return 1;
        }
        Err(_) => {
            log::error!("Scan thread panicked");
            eprintln!("Error: scan thread panicked");
            return 1;
        }
    };

    if args.json {
        println!("{}", format_json(&summary));
    } else {
        print!("{}", format_text(&summary.files));
    }

    if !args.quiet {
        if summary.cancelled {
            eprintln!("Scan interrupted; results may be incomplete");
        }
        eprintln!("Done: {} matching files", summary.files.len());
    }

    0
}

fn print_help() {
    println!("extscan - Find files by extension within a limited directory depth");
    println!();
    println!("USAGE:");
    println!("    extscan [OPTIONS]");
    println!();
    println!("The scan starts in the current working directory.");
    println!();
    println!("OPTIONS:");
    println!("    --ext <EXT>               Extension to match, with leading dot (default: .go)");
    println!("    --max-depth <N>           Directory levels below the start to search (default: 2)");
    println!("    --timeout <S>             Cancel the scan after S seconds (default: 30)");
    println!("    --visit-delay-ms <MS>     Simulated latency per directory visit (default: 0)");
    println!("    --json                    Emit machine-readable output");
    println!("    --quiet                   Suppress status lines on stderr (progress reports still print)");
    println!("    -h, --help                Show this help message");
    println!("    -v, --version             Show version information");
    println!();
    println!("SIGNALS:");
    println!("    SIGINT, SIGTERM           Stop the scan and print what was found so far");
    println!("    SIGUSR1                   Print the directory and depth currently visited");
    println!();
    println!("EXAMPLES:");
    println!("    extscan");
    println!("    extscan --ext .rs --max-depth 4 --json");
    println!("    RUST_LOG=info extscan --visit-delay-ms 500");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const COMMIT: &str = env!("EXTSCAN_COMMIT");
    const TARGET: &str = env!("EXTSCAN_TARGET");

    println!("extscan {VERSION}");
    println!("Commit: {COMMIT}");
    println!("Target: {TARGET}");
}
