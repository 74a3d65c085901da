//! Subdomains command implementation

use crate::checks::SubdomainProber;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{create_spinner, print_header, print_info, print_subdomain_table};

/// Run the subdomains command
pub async fn run_subdomains(domain: &str, settings: &Settings) -> Result<()> {
    print_info(&format!("Subdomain analysis for {}", domain));

    let prober = SubdomainProber::new(&settings.http, &settings.probes)?;
    let spinner = create_spinner("Resolving and probing common subdomains...");
    let outcomes = prober.check_subdomains(domain).await;
    spinner.finish_and_clear();

    print_header("Subdomain Analysis");
    print_subdomain_table(&outcomes?);
    Ok(())
}
