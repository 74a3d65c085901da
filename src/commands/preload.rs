//! Preload command implementation

use crate::checks::PreloadChecker;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{create_spinner, print_header, print_info, print_preload_table};

/// Run the preload command
pub async fn run_preload(domain: &str, settings: &Settings) -> Result<()> {
    print_info(&format!("Preload analysis for {}", domain));

    let checker = PreloadChecker::new(&settings.http, &settings.probes)?;
    let spinner = create_spinner("Fetching HSTS header and preload list...");
    let (hsts, info) = checker.check(domain).await;
    spinner.finish_and_clear();

    print_header("HSTS Preload Report");
    print_preload_table(&hsts, info.status.as_str(), info.eligible);
    Ok(())
}
