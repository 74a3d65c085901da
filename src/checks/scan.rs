//! HSTS path scanning
//!
//! Probes HSTS validity across a set of URL paths on a single host.

use crate::checks::build_client;
use crate::config::HttpSettings;
use crate::error::Result;
use crate::hsts::{validate_from_headers, HstsResult};
use serde::Serialize;

/// Scan status for one path
#[derive(Debug, Clone, Serialize)]
pub enum PathStatus {
    Hsts(HstsResult),
    Error(String),
}

impl PathStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, PathStatus::Error(_))
    }
}

/// Result for one scanned path
#[derive(Debug, Clone, Serialize)]
pub struct PathOutcome {
    pub path: String,
    pub status: PathStatus,
}

/// Scanner for a caller-supplied list of paths
pub struct PathScanner {
    client: reqwest::Client,
}

impl PathScanner {
    pub fn new(http: &HttpSettings) -> Result<Self> {
        Ok(Self {
            client: build_client(http)?,
        })
    }

    /// Probe `https://{domain}{path}` for each path, in order
    pub async fn scan_paths(&self, domain: &str, paths: &[String]) -> Vec<PathOutcome> {
        let mut outcomes = Vec::new();
        for path in paths {
            let url = format!("https://{}{}", domain, path);
            let status = match self.client.get(&url).send().await {
                Ok(response) => PathStatus::Hsts(validate_from_headers(response.headers())),
                Err(e) => PathStatus::Error(format!("error: {}", e)),
            };
            outcomes.push(PathOutcome {
                path: path.clone(),
                status,
            });
        }
        outcomes
    }
}

/// Split a comma separated `--paths` argument into a path list
pub fn parse_path_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}
