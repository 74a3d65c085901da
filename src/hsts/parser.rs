//! Strict-Transport-Security header parsing and validation

use serde::{Serialize, Serializer};
use std::fmt;

/// A problem found while validating an HSTS header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HstsIssue {
    /// No Strict-Transport-Security header was present at all
    NoHstsHeader,
    /// A max-age directive was present but its value did not parse as a
    /// non-negative integer
    InvalidMaxAge,
    /// No max-age directive was parsed
    MissingMaxAge,
    /// The preload directive was set without includeSubDomains
    PreloadWithoutSubdomains,
    /// A directive the HSTS grammar does not define, carrying the raw text
    UnknownDirective(String),
    /// The server could not be reached to fetch the header
    ConnectionError,
}

impl fmt::Display for HstsIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HstsIssue::NoHstsHeader => write!(f, "no_hsts_header"),
            HstsIssue::InvalidMaxAge => write!(f, "invalid_max_age"),
            HstsIssue::MissingMaxAge => write!(f, "missing_max_age"),
            HstsIssue::PreloadWithoutSubdomains => write!(f, "preload_without_subdomains"),
            HstsIssue::UnknownDirective(raw) => write!(f, "unknown_directive:{}", raw),
            HstsIssue::ConnectionError => write!(f, "connection_error"),
        }
    }
}

impl Serialize for HstsIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Parsed Strict-Transport-Security header
///
/// Built once by [`validate_hsts`] and never mutated afterwards.
/// `ok` holds exactly when `issues` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HstsResult {
    pub present: bool,
    pub max_age: Option<u64>,
    pub include_subdomains: bool,
    pub preload: bool,
    pub issues: Vec<HstsIssue>,
    pub ok: bool,
}

impl HstsResult {
    /// Result for a response that carried no HSTS header
    pub fn missing() -> Self {
        HstsResult {
            present: false,
            max_age: None,
            include_subdomains: false,
            preload: false,
            issues: vec![HstsIssue::NoHstsHeader],
            ok: false,
        }
    }

    /// Fallback result when the server itself could not be reached
    pub fn connection_error() -> Self {
        HstsResult {
            present: false,
            max_age: None,
            include_subdomains: false,
            preload: false,
            issues: vec![HstsIssue::ConnectionError],
            ok: false,
        }
    }

    /// Whether this is the fallback result for an unreachable server
    pub fn is_connection_error(&self) -> bool {
        !self.present && self.issues.contains(&HstsIssue::ConnectionError)
    }

    /// Render the issue list as a comma separated string
    pub fn issues_summary(&self) -> String {
        self.issues
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Validate an HSTS header value
///
/// `raw` is the header value as sent by the server, or `None` when the
/// response carried no Strict-Transport-Security header. This is a pure
/// function: the same input always produces the same result.
pub fn validate_hsts(raw: Option<&str>) -> HstsResult {
    let Some(raw) = raw else {
        return HstsResult::missing();
    };

    let mut issues = Vec::new();
    let mut max_age = None;
    let mut include_subdomains = false;
    let mut preload = false;

    for segment in raw.split(';') {
        let segment = segment.trim();

        // The directive name is case-sensitive per the deployed grammar;
        // a capitalised Max-Age falls through to unknown_directive.
        if segment.starts_with("max-age") {
            match segment.split_once('=') {
                Some((_, value)) => match value.trim().parse::<u64>() {
                    Ok(age) => max_age = Some(age),
                    Err(_) => issues.push(HstsIssue::InvalidMaxAge),
                },
                None => issues.push(HstsIssue::InvalidMaxAge),
            }
        } else if segment.eq_ignore_ascii_case("includesubdomains") {
            include_subdomains = true;
        } else if segment.eq_ignore_ascii_case("preload") {
            preload = true;
        } else if !segment.is_empty() {
            issues.push(HstsIssue::UnknownDirective(segment.to_string()));
        }
    }

    if max_age.is_none() {
        issues.push(HstsIssue::MissingMaxAge);
    }
    if preload && !include_subdomains {
        issues.push(HstsIssue::PreloadWithoutSubdomains);
    }

    let ok = issues.is_empty();
    HstsResult {
        present: true,
        max_age,
        include_subdomains,
        preload,
        issues,
        ok,
    }
}

/// Validate HSTS from a full response header map
pub fn validate_from_headers(headers: &reqwest::header::HeaderMap) -> HstsResult {
    let raw = headers
        .get("strict-transport-security")
        .and_then(|v| v.to_str().ok());
    validate_hsts(raw)
}
