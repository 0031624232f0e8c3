// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Case-insensitive substring test against any of `needles` (given lowercase).
pub fn contains_any_ci(haystack: &str, needles: &[&str]) -> bool {
    let lc = haystack.to_lowercase();
    needles.iter().any(|n| lc.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_nbsp_and_newlines() {
        assert_eq!(normalize_ws("  Mo\u{a0} 06:00\n\n bis  Di "), "Mo 06:00 bis Di");
    }

    #[test]
    fn ci_contains() {
        assert!(contains_any_ci("Closed at NIGHT", &["night"]));
        assert!(contains_any_ci("Nachtbaustelle", &["nacht"]));
        assert!(!contains_any_ci("daytime", &["night", "nacht"]));
    }
}
