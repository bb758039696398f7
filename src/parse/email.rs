//! Email address validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part, `@`, domain, and a 2 to 4 letter top-level domain.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").expect("Invalid email pattern")
});

/// Checks an address against a conservative ASCII email pattern.
///
/// # Example
/// ```
/// use stopclock::parse::is_valid_email;
///
/// assert!(is_valid_email("test@test.com"));
/// assert!(!is_valid_email("not an email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
