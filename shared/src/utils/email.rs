//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Pragmatic address shape check; deliverability is proven by the OTP flow,
// not by the regex.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap()
});

/// Normalize an email address: trim surrounding whitespace and lowercase.
///
/// All lookups and stored addresses go through this so that
/// `User@Example.COM ` and `user@example.com` resolve to the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check whether a normalized email address has a plausible shape
pub fn is_valid_email(email: &str) -> bool {
    let normalized = normalize_email(email);
    !normalized.is_empty() && EMAIL_REGEX.is_match(&normalized)
}

/// Mask an email address for logging (e.g. `us***@example.com`)
pub fn mask_email(email: &str) -> String {
    let normalized = normalize_email(email);
    match normalized.split_once('@') {
        Some((local, domain)) => {
            let visible = local.chars().take(2).collect::<String>();
            format!("{}***@{}", visible, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  User@Example.COM "), "user@example.com");
        assert_eq!(normalize_email(""), "");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email(" USER@EXAMPLE.COM "));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@example.com"));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("user@example.com"), "us***@example.com");
        assert_eq!(mask_email("a@b.co"), "a***@b.co");
        assert_eq!(mask_email("garbage"), "***");
    }
}
