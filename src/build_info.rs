//! Compile-time build metadata
//!
//! `build.rs` bumps `build_number.txt` and exports the number and a UTC
//! timestamp; both fall back to placeholders when built without it.

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("NUTRIPLAN_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("NUTRIPLAN_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

// const-evaluable, so str::parse is out
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        result = match result.checked_mul(10) {
            Some(r) => match r.checked_add((b - b'0') as u64) {
                Some(r) => r,
                None => return None,
            },
            None => return None,
        };
        i += 1;
    }
    Some(result)
}

fn banner_lines() -> [String; 5] {
    let rule = "=".repeat(47);
    [
        rule.clone(),
        format!("  Nutrition Plan Calculator ({})", NAME),
        format!("  Version: {} | Build: {}", VERSION, BUILD_NUMBER),
        format!("  Compiled: {}", BUILD_TIMESTAMP),
        rule,
    ]
}

/// Print the startup banner to stderr
///
/// stdout carries the MCP transport, so nothing else may write there.
pub fn print_startup_banner() {
    for line in banner_lines() {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u64() {
        assert_eq!(parse_u64("42"), Some(42));
        assert_eq!(parse_u64("0"), Some(0));
        assert_eq!(parse_u64("4a"), None);
        assert_eq!(parse_u64(""), None);
        assert_eq!(parse_u64("99999999999999999999"), None);
    }

    #[test]
    fn test_banner_names_the_build() {
        let lines = banner_lines();
        assert!(lines[1].contains("nutriplan"));
        assert!(lines[2].contains(VERSION));
        assert!(lines[3].ends_with(BUILD_TIMESTAMP));
        assert_eq!(lines[0], lines[4]);
    }
}
