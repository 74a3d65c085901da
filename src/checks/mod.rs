//! Probe implementations for hsts-toolkit
//!
//! Each probe is a single bounded-timeout request with no retries;
//! failures are captured in the probe's own result rather than aborting
//! the surrounding command.

pub mod preload;
pub mod redirects;
pub mod scan;
pub mod subdomains;

pub use preload::{PreloadChecker, PreloadInfo, PreloadStatus};
pub use redirects::{RedirectOutcome, RedirectProber};
pub use scan::{PathOutcome, PathScanner, PathStatus};
pub use subdomains::{SubdomainOutcome, SubdomainProber, SubdomainStatus};

use crate::config::HttpSettings;
use crate::error::Result;

/// Build the HTTP client used by probes that follow redirects
pub(crate) fn build_client(http: &HttpSettings) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(http.timeout())
        .user_agent(http.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Build an HTTP client that reports redirects instead of following them,
/// so hop chains can be recorded
pub(crate) fn build_no_redirect_client(http: &HttpSettings) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(http.timeout())
        .user_agent(http.user_agent.clone())
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}
