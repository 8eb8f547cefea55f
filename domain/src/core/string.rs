//! String utilities for the domain layer.

/// Suffix appended to text shortened by [`truncate_chars`]
pub const ELLIPSIS: &str = "...";

/// Truncate a string to at most `max_chars` characters, appending `...` when
/// anything was cut (UTF-8 safe).
///
/// Counts characters rather than bytes, so the kept prefix is exactly
/// `max_chars` characters long and the result may be up to
/// `max_chars + 3` characters.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}{}", &s[..end], ELLIPSIS),
        None => s.to_string(),
    }
}

/// Case-insensitive equality for agent names and command words
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello world", 5), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 6 characters, 18 bytes
        assert_eq!(truncate_chars("日本語テスト", 6), "日本語テスト");
        assert_eq!(truncate_chars("日本語テスト", 3), "日本語...");
        assert_eq!(truncate_chars("👋🌍🎉", 1), "👋...");
    }

    #[test]
    fn test_truncate_zero() {
        assert_eq!(truncate_chars("", 0), "");
        assert_eq!(truncate_chars("a", 0), "...");
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("DevOpsEngineer", "devopsengineer"));
        assert!(eq_ignore_case("TechLead", "TECHLEAD"));
        assert!(!eq_ignore_case("TechLead", "Tech Lead"));
    }
}
