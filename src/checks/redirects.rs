//! HTTP to HTTPS redirect probing
//!
//! Issues plain-HTTP requests and follows the redirect chain by hand so
//! every intermediate hop can be recorded, then reports whether the final
//! URL landed on HTTPS.

use crate::checks::build_no_redirect_client;
use crate::config::HttpSettings;
use crate::error::{HstsToolkitError, Result};
use reqwest::header::LOCATION;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Upper bound on hops before a chain is reported as an error
const MAX_REDIRECTS: usize = 10;

/// Result of following one redirect scenario
#[derive(Debug, Clone, Serialize)]
pub struct RedirectOutcome {
    pub scenario: String,
    pub start_url: String,
    pub final_url: Option<String>,
    pub status: Option<u16>,
    /// Intermediate hops as (status, url) in request order
    pub history: Vec<(u16, String)>,
    pub https_enforced: bool,
    pub error: Option<String>,
}

/// Prober for the fixed HTTP entry-point scenarios
pub struct RedirectProber {
    client: reqwest::Client,
}

impl RedirectProber {
    pub fn new(http: &HttpSettings) -> Result<Self> {
        Ok(Self {
            client: build_no_redirect_client(http)?,
        })
    }

    /// Probe both scenarios (`http_root`, `http_www`) for a domain
    pub async fn check_scenarios(&self, domain: &str) -> Vec<RedirectOutcome> {
        let scenarios = [
            ("http_root", format!("http://{}/", domain)),
            ("http_www", format!("http://www.{}/", domain)),
        ];

        let mut outcomes = Vec::new();
        for (name, start_url) in scenarios {
            let outcome = match self.follow(&start_url).await {
                Ok((final_url, status, history)) => {
                    let https_enforced = final_url.starts_with("https://");
                    RedirectOutcome {
                        scenario: name.to_string(),
                        start_url,
                        final_url: Some(final_url),
                        status: Some(status),
                        history,
                        https_enforced,
                        error: None,
                    }
                }
                Err(e) => RedirectOutcome {
                    scenario: name.to_string(),
                    start_url,
                    final_url: None,
                    status: None,
                    history: Vec::new(),
                    https_enforced: false,
                    error: Some(e.to_string()),
                },
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Follow redirects from `start`, recording each redirecting hop
    async fn follow(&self, start: &str) -> Result<(String, u16, Vec<(u16, String)>)> {
        let mut chain = RedirectChain::new(start)?;

        loop {
            let response = self.client.get(chain.url.clone()).send().await?;
            let status = response.status();
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok());

            if !chain.advance(status, location)? {
                return Ok((chain.url.to_string(), status.as_u16(), chain.history));
            }
        }
    }
}

/// Redirect chain state: the URL to request next plus the hops taken so far
struct RedirectChain {
    url: Url,
    history: Vec<(u16, String)>,
}

impl RedirectChain {
    fn new(start: &str) -> Result<Self> {
        let url = Url::parse(start).map_err(|e| HstsToolkitError::Connection(e.to_string()))?;
        Ok(Self {
            url,
            history: Vec::new(),
        })
    }

    /// Feed one response into the chain
    ///
    /// Returns `true` when the response redirects and the chain should
    /// continue from the updated URL, `false` when the chain ends at this
    /// response. A 3xx without a usable Location ends the chain; a
    /// redirect past the hop cap is an error.
    fn advance(&mut self, status: reqwest::StatusCode, location: Option<&str>) -> Result<bool> {
        if !status.is_redirection() {
            return Ok(false);
        }

        let Some(next) = location.and_then(|loc| self.url.join(loc).ok()) else {
            return Ok(false);
        };

        if self.history.len() >= MAX_REDIRECTS {
            return Err(HstsToolkitError::Connection(format!(
                "exceeded {} redirects at {}",
                MAX_REDIRECTS, self.url
            )));
        }

        debug!("redirect {} -> {}", self.url, next);
        self.history.push((status.as_u16(), self.url.to_string()));
        self.url = next;
        Ok(true)
    }
}
