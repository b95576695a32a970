//! Email address shape check

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Returns true if `email` looks like `local@domain.tld`.
///
/// This is a shape check only, with no DNS lookup. It is lenient: the
/// domain part may contain consecutive dots (`a@b..com` passes) and any
/// non-whitespace, non-`@` characters are accepted.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@chapter.example.org"));
    }

    #[test]
    fn test_rejects_missing_tld() {
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(!is_valid_email("a.com"));
    }

    #[test]
    fn test_accepts_consecutive_dots_in_domain() {
        // Known leniency of the pattern
        assert!(is_valid_email("a@b..com"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("a@b.com "));
    }

    #[test]
    fn test_rejects_double_at() {
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_valid_email(""));
    }
}
