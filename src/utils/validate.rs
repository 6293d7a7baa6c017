use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // local@domain.tld, exactly one @, no whitespace anywhere.
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref MOBILE_RE: Regex = Regex::new(r"^\d{10}$").unwrap();
}

/// An identifier is either an email address or a strict 10-digit mobile
/// number. Anything else is rejected at signup.
pub fn is_valid_identifier(value: &str) -> bool {
    EMAIL_RE.is_match(value) || MOBILE_RE.is_match(value)
}
