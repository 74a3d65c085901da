//! Chromium HSTS preload list checking
//!
//! Fetches the domain's own HSTS header, downloads the Chromium preload
//! list (base64-encoded JSON), and assesses preload eligibility against
//! the Chrome submission rules.

use crate::checks::build_client;
use crate::config::{HttpSettings, ProbeSettings};
use crate::error::Result;
use crate::hsts::{validate_from_headers, HstsResult};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Minimum max-age required for preload submission (one year, per Chrome)
pub const MIN_PRELOAD_MAX_AGE: u64 = 31_536_000;

/// Membership status against the downloaded preload list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PreloadStatus {
    Preloaded,
    NotPreloaded,
    /// The list could not be fetched or decoded
    Unknown,
}

impl PreloadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreloadStatus::Preloaded => "preloaded",
            PreloadStatus::NotPreloaded => "not_preloaded",
            PreloadStatus::Unknown => "unknown",
        }
    }
}

/// Preload membership plus eligibility assessment
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PreloadInfo {
    pub status: PreloadStatus,
    pub eligible: bool,
}

impl PreloadInfo {
    /// Info when the domain itself could not be reached: membership is
    /// unknowable, so the list is not consulted at all
    pub fn unavailable() -> Self {
        PreloadInfo {
            status: PreloadStatus::Unknown,
            eligible: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PreloadList {
    #[serde(default)]
    entries: Vec<PreloadEntry>,
}

#[derive(Debug, Deserialize)]
struct PreloadEntry {
    name: String,
}

/// Checker for preload membership and eligibility
pub struct PreloadChecker {
    client: reqwest::Client,
    list_url: String,
}

impl PreloadChecker {
    pub fn new(http: &HttpSettings, probes: &ProbeSettings) -> Result<Self> {
        Ok(Self {
            client: build_client(http)?,
            list_url: probes.preload_list_url.clone(),
        })
    }

    /// Run the full preload check for a domain
    ///
    /// Returns the domain's own HSTS result (a connection failure against
    /// the domain degrades to a fallback result rather than an error) and
    /// the preload membership/eligibility info.
    pub async fn check(&self, domain: &str) -> (HstsResult, PreloadInfo) {
        let hsts = self.fetch_domain_hsts(domain).await;

        // An unreachable domain ends the check here; downloading the list
        // anyway could report membership for a host nobody can reach.
        if hsts.is_connection_error() {
            return (hsts, PreloadInfo::unavailable());
        }

        let list = self.download_list().await;
        let status = membership(list.as_ref(), domain);
        let eligible = is_eligible(&hsts);

        (hsts, PreloadInfo { status, eligible })
    }

    /// Fetch and validate the domain's own HSTS header
    pub async fn fetch_domain_hsts(&self, domain: &str) -> HstsResult {
        let url = format!("https://{}", domain);
        match self.client.get(&url).send().await {
            Ok(response) => validate_from_headers(response.headers()),
            Err(e) => {
                debug!("root fetch for {} failed: {}", domain, e);
                HstsResult::connection_error()
            }
        }
    }

    /// Download and decode the preload list; `None` means unavailable
    async fn download_list(&self) -> Option<PreloadList> {
        let text = match self.fetch_list_text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("preload list download failed: {}", e);
                return None;
            }
        };

        match decode_list(&text) {
            Some(list) => Some(list),
            None => {
                warn!("preload list could not be decoded");
                None
            }
        }
    }

    async fn fetch_list_text(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.list_url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Decode the base64-encoded JSON body of the preload list
fn decode_list(text: &str) -> Option<PreloadList> {
    // googlesource wraps the base64 payload across lines
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Exact-name membership lookup against the decoded list
fn membership(list: Option<&PreloadList>, domain: &str) -> PreloadStatus {
    let Some(list) = list else {
        return PreloadStatus::Unknown;
    };

    if list.entries.iter().any(|e| e.name == domain) {
        PreloadStatus::Preloaded
    } else {
        PreloadStatus::NotPreloaded
    }
}

/// Preload eligibility per the Chrome submission rules
pub fn is_eligible(hsts: &HstsResult) -> bool {
    hsts.present
        && hsts.max_age.is_some_and(|age| age >= MIN_PRELOAD_MAX_AGE)
        && hsts.include_subdomains
        && hsts.preload
        && hsts.issues.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hsts::validate_hsts;

    fn encode_list(json: &str) -> String {
        STANDARD.encode(json)
    }

    #[test]
    fn test_eligible_at_one_year_boundary() {
        let hsts = validate_hsts(Some("max-age=31536000; includeSubDomains; preload"));
        assert!(is_eligible(&hsts));
    }

    #[test]
    fn test_ineligible_one_second_below_boundary() {
        let hsts = validate_hsts(Some("max-age=31535999; includeSubDomains; preload"));
        assert!(!is_eligible(&hsts));
    }

    #[test]
    fn test_ineligible_without_preload_flag() {
        let hsts = validate_hsts(Some("max-age=63072000; includeSubDomains"));
        assert!(!is_eligible(&hsts));
    }

    #[test]
    fn test_ineligible_when_header_missing() {
        let hsts = validate_hsts(None);
        assert!(!is_eligible(&hsts));
    }

    #[test]
    fn test_unreachable_domain_gets_unavailable_info() {
        let hsts = HstsResult::connection_error();
        assert!(hsts.is_connection_error());

        let info = PreloadInfo::unavailable();
        assert_eq!(info.status, PreloadStatus::Unknown);
        assert!(!info.eligible);
    }

    #[test]
    fn test_reachable_results_are_not_connection_errors() {
        assert!(!validate_hsts(None).is_connection_error());
        assert!(!validate_hsts(Some("max-age=abc")).is_connection_error());
    }

    #[test]
    fn test_decode_list_roundtrip() {
        let encoded = encode_list(r#"{"entries":[{"name":"example.com"}]}"#);
        let list = decode_list(&encoded).unwrap();
        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.entries[0].name, "example.com");
    }

    #[test]
    fn test_decode_list_tolerates_line_wrapping() {
        let encoded = encode_list(r#"{"entries":[{"name":"example.com"}]}"#);
        let wrapped = format!("{}\n{}", &encoded[..10], &encoded[10..]);
        assert!(decode_list(&wrapped).is_some());
    }

    #[test]
    fn test_decode_list_garbage_is_none() {
        assert!(decode_list("not base64 at all!!!").is_none());
    }

    #[test]
    fn test_membership_lookup() {
        let encoded = encode_list(r#"{"entries":[{"name":"example.com"}]}"#);
        let list = decode_list(&encoded);
        assert_eq!(
            membership(list.as_ref(), "example.com"),
            PreloadStatus::Preloaded
        );
        assert_eq!(
            membership(list.as_ref(), "sub.example.com"),
            PreloadStatus::NotPreloaded
        );
        assert_eq!(membership(None, "example.com"), PreloadStatus::Unknown);
    }
}
