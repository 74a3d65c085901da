//! Redirects command implementation

use crate::checks::RedirectProber;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{create_spinner, print_header, print_info, print_redirect_table};

/// Run the redirects command
pub async fn run_redirects(domain: &str, settings: &Settings) -> Result<()> {
    print_info(&format!("Redirect analysis for {}", domain));

    let prober = RedirectProber::new(&settings.http)?;
    let spinner = create_spinner("Following HTTP redirect scenarios...");
    let outcomes = prober.check_scenarios(domain).await;
    spinner.finish_and_clear();

    print_header("Redirect Report");
    print_redirect_table(&outcomes);
    Ok(())
}
