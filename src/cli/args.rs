//! CLI argument parsing

use crate::{DEFAULT_EXTENSION, DEFAULT_MAX_DEPTH};

/// Overall deadline applied when `--timeout` is not given
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub extension: String,
    pub max_depth: u16,
    pub timeout_secs: u64,
    pub visit_delay_ms: u64,
    pub json: bool,
    pub quiet: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            visit_delay_ms: 0,
            json: false,
            quiet: false,
        }
    }
}

/// Parse command line arguments; `args[0]` is the program name.
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli_args = CliArgs::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--ext" => {
                let value = take_value(args, &mut i, "--ext requires a value")?;
                if !value.starts_with('.') {
                    return Err(format!("--ext must start with '.': {value}"));
                }
                cli_args.extension = value.to_string();
            }
            "--max-depth" => {
                let value = take_value(args, &mut i, "--max-depth requires a value")?;
                cli_args.max_depth = value
                    .parse()
                    .map_err(|_| "--max-depth must be a number".to_string())?;
            }
            "--timeout" => {
                let value = take_value(args, &mut i, "--timeout requires a value")?;
                let secs: u64 = value
                    .parse()
                    .map_err(|_| "--timeout must be a positive integer".to_string())?;
                if secs == 0 {
                    return Err("--timeout must be greater than zero".to_string());
                }
                cli_args.timeout_secs = secs;
            }
            "--visit-delay-ms" => {
                let value = take_value(args, &mut i, "--visit-delay-ms requires a value")?;
                cli_args.visit_delay_ms = value
                    .parse()
                    .map_err(|_| "--visit-delay-ms must be a number".to_string())?;
            }
            "--json" => {
                cli_args.json = true;
            }
            "--quiet" => {
                cli_args.quiet = true;
            }
            arg if !arg.starts_with("--") => {
                return Err(format!("Unexpected argument: {arg}"));
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(cli_args)
}

fn take_value<'a>(args: &'a [String], i: &mut usize, missing: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| missing.to_string())
}
