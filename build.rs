//! Bumps `build_number.txt` and exports the build number and a UTC timestamp
//! as NUTRIPLAN_BUILD_NUMBER / NUTRIPLAN_BUILD_TIMESTAMP.

use std::fs;
use std::path::Path;

const COUNTER_FILE: &str = "build_number.txt";

/// Next build number; a missing or garbled counter restarts at 1
fn next_build_number(path: &Path) -> u64 {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map_or(1, |n| n.saturating_add(1))
}

fn main() {
    println!("cargo:rerun-if-changed=src");

    let counter = Path::new(COUNTER_FILE);
    let build = next_build_number(counter);
    if let Err(e) = fs::write(counter, build.to_string()) {
        println!("cargo:warning=could not update {}: {}", COUNTER_FILE, e);
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    println!("cargo:rustc-env=NUTRIPLAN_BUILD_NUMBER={}", build);
    println!("cargo:rustc-env=NUTRIPLAN_BUILD_TIMESTAMP={}", timestamp);
}
