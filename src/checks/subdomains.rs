//! Common subdomain probing
//!
//! Resolves a fixed set of subdomain labels through the system resolver
//! and, for each one that resolves, probes HTTPS and validates the HSTS
//! header it serves.

use crate::checks::build_client;
use crate::config::{HttpSettings, ProbeSettings};
use crate::error::{HstsToolkitError, Result};
use crate::hsts::{validate_from_headers, HstsResult};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::Resolver;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

type TokioResolver = Resolver<TokioConnectionProvider>;

/// Probe status for one subdomain
#[derive(Debug, Clone, Serialize)]
pub enum SubdomainStatus {
    /// The host did not resolve; no HTTP probe was attempted
    NoDns,
    /// HTTPS responded; the attached result describes its HSTS header
    Https(HstsResult),
    /// HTTPS probe failed with the given error text
    Error(String),
}

impl SubdomainStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, SubdomainStatus::Error(_))
    }
}

/// Result for one probed subdomain host
#[derive(Debug, Clone, Serialize)]
pub struct SubdomainOutcome {
    pub host: String,
    pub status: SubdomainStatus,
}

/// Prober for the configured set of common subdomain labels
pub struct SubdomainProber {
    client: reqwest::Client,
    labels: Vec<String>,
    dns_timeout: Duration,
}

impl SubdomainProber {
    pub fn new(http: &HttpSettings, probes: &ProbeSettings) -> Result<Self> {
        Ok(Self {
            client: build_client(http)?,
            labels: probes.subdomain_labels.clone(),
            dns_timeout: http.timeout(),
        })
    }

    /// Probe every configured label under `domain`, in order
    pub async fn check_subdomains(&self, domain: &str) -> Result<Vec<SubdomainOutcome>> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| HstsToolkitError::Dns(format!("failed to create system resolver: {}", e)))?
            .build();

        let mut outcomes = Vec::new();
        for label in &self.labels {
            let host = format!("{}.{}", label, domain);
            let status = self.probe_host(&resolver, &host).await;
            outcomes.push(SubdomainOutcome { host, status });
        }
        Ok(outcomes)
    }

    async fn probe_host(&self, resolver: &TokioResolver, host: &str) -> SubdomainStatus {
        if !self.resolves(resolver, host).await {
            debug!("{} does not resolve, skipping probe", host);
            return SubdomainStatus::NoDns;
        }

        let url = format!("https://{}", host);
        match self.client.get(&url).send().await {
            Ok(response) => SubdomainStatus::Https(validate_from_headers(response.headers())),
            Err(e) => SubdomainStatus::Error(e.to_string()),
        }
    }

    /// DNS availability check (A/AAAA), bounded by the probe timeout
    async fn resolves(&self, resolver: &TokioResolver, host: &str) -> bool {
        matches!(
            tokio::time::timeout(self.dns_timeout, resolver.lookup_ip(host)).await,
            Ok(Ok(_))
        )
    }
}
