use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidateLength;

lazy_static! {
    /// Regex for validating contact email addresses
    /// ASCII local part, dotted domain, alphabetic top-level segment of 2+ letters
    /// - Valid: "a@b.co", "first.last+tag@mail.example.org"
    /// - Invalid: "not-an-email", "a@b", "a@b.c", "a b@c.com"
    pub static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
}

/// Treat absent and empty form fields alike.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// True when `value` holds at most `max` characters, counted as Unicode
/// scalar values (not bytes, not UTF-16 units) like the `char_length` checks
/// on the tables.
pub fn within_max_chars(value: &str, max: u64) -> bool {
    value.validate_length(None, Some(max), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_regex_valid() {
        assert!(EMAIL_REGEX.is_match("a@b.co"));
        assert!(EMAIL_REGEX.is_match("first.last+tag@mail.example.org"));
        assert!(EMAIL_REGEX.is_match("USER_1%x@Sub-Domain.IO"));
    }

    #[test]
    fn test_email_regex_invalid() {
        assert!(!EMAIL_REGEX.is_match("not-an-email"));
        assert!(!EMAIL_REGEX.is_match("a@b")); // no tld
        assert!(!EMAIL_REGEX.is_match("a@b.c")); // tld too short
        assert!(!EMAIL_REGEX.is_match("a b@c.com")); // space
        assert!(!EMAIL_REGEX.is_match("a@b.c0m")); // digit in tld
        assert!(!EMAIL_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_present() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some(String::new())), None);
        // whitespace is a value; trimming happens after validation
        assert_eq!(present(Some(" ".to_string())), Some(" ".to_string()));
    }

    #[test]
    fn test_within_max_chars_counts_characters() {
        assert!(within_max_chars(&"a".repeat(100), 100));
        assert!(!within_max_chars(&"a".repeat(101), 100));
        // 100 two-byte characters still fit
        assert!(within_max_chars(&"ă".repeat(100), 100));
    }

    #[test]
    fn test_within_max_chars_counts_astral_characters_once() {
        // Each emoji is two UTF-16 units but one character
        assert!(within_max_chars(&"😀".repeat(100), 100));
        assert!(!within_max_chars(&"😀".repeat(101), 100));
    }
}
