// Embeds the commit and build target so `extscan --version` can report them

use std::process::Command;

fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}

fn main() {
    let commit = git(&["rev-parse", "--short", "HEAD"]);
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=EXTSCAN_COMMIT={commit}");
    println!("cargo:rustc-env=EXTSCAN_TARGET={target}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
