//! Domain validation and normalization

use crate::error::{HstsToolkitError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Charset check for a normalized domain; length and hyphen placement are
/// enforced separately because the regex crate has no lookaround.
static DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.-]+$").expect("domain pattern is valid"));

const MAX_DOMAIN_LEN: usize = 253;

/// Normalize and validate a user-supplied domain string
///
/// Strips whitespace and one trailing dot, lowercases, converts
/// internationalized names to punycode, and validates the result against
/// the usual DNS shape (1-253 chars, `[A-Za-z0-9.-]`, no leading or
/// trailing hyphen). Returns the safe ASCII form.
pub fn normalize(input: &str) -> Result<String> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let lowered = trimmed.to_lowercase();

    let ascii = idna::domain_to_ascii(&lowered)
        .map_err(|_| HstsToolkitError::InvalidDomain(format!("{} (IDN encoding failed)", input.trim())))?;

    if ascii.is_empty()
        || ascii.len() > MAX_DOMAIN_LEN
        || ascii.starts_with('-')
        || ascii.ends_with('-')
        || !DOMAIN_RE.is_match(&ascii)
    {
        return Err(HstsToolkitError::InvalidDomain(ascii));
    }

    Ok(ascii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_mixed_case_with_trailing_dot() {
        assert_eq!(normalize("  Example.COM.  ").unwrap(), "example.com");
    }

    #[test]
    fn test_encodes_idn_to_punycode() {
        assert_eq!(normalize("münchen.de").unwrap(), "xn--mnchen-3ya.de");
    }

    #[test]
    fn test_rejects_overlong_domain() {
        let long = "a".repeat(254);
        assert!(normalize(&long).is_err());
    }

    #[test]
    fn test_rejects_leading_hyphen() {
        assert!(normalize("-example.com").is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(normalize("   ").is_err());
    }
}
