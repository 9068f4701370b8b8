use std::fs;
use std::path::Path;
use std::process::Command;

const BUILD_NUMBER_FILE: &str = "BUILD_NUMBER";
const VERSION_FILE: &str = "VERSION";

fn main() {
    // Every build gets the next number so a published draw names the binary that ran it
    let build = next_build_number(Path::new(BUILD_NUMBER_FILE));

    // Release builds are reported as such, anything else as development
    let profile = match std::env::var("PROFILE").as_deref() {
        Ok("release") => "release",
        _ => "development",
    };

    // VERSION file wins over the crate version
    let version = read_version(Path::new(VERSION_FILE));

    // Commit the draw binary was built from, when built inside a checkout
    let git_hash = short_git_hash().unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=RAFFLE_VERSION={}", version);
    println!("cargo:rustc-env=RAFFLE_BUILD={}", build);
    println!("cargo:rustc-env=RAFFLE_PROFILE={}", profile);
    println!("cargo:rustc-env=RAFFLE_GIT_HASH={}", git_hash);

    // Rerun if these files change
    println!("cargo:rerun-if-changed={}", BUILD_NUMBER_FILE);
    println!("cargo:rerun-if-changed={}", VERSION_FILE);
    println!("cargo:rerun-if-env-changed=PROFILE");
}

/// Read the last build number (0 when missing or garbled) and store the next one
fn next_build_number(path: &Path) -> u64 {
    let last: u64 = fs::read_to_string(path)
        .ok()
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(0);
    let next = last + 1;
    fs::write(path, next.to_string()).expect("Failed to write build number");
    next
}

fn read_version(path: &Path) -> String {
    fs::read_to_string(path)
        .ok()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .or_else(|| std::env::var("CARGO_PKG_VERSION").ok())
        .unwrap_or_else(|| "0.1.0".to_string())
}

fn short_git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!hash.is_empty()).then_some(hash)
}
