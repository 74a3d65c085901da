//! Check command implementation

use crate::checks;
use crate::config::Settings;
use crate::error::Result;
use crate::hsts::validate_from_headers;
use crate::output::{create_spinner, print_error, print_hsts_result, print_info};

/// Run the check command
///
/// Exit code contract: 0 when the header validates cleanly, 1 when the
/// domain cannot be reached or serves no HSTS header, 2 when the header
/// is present but has issues.
pub async fn run_check(domain: &str, settings: &Settings) -> Result<i32> {
    print_info(&format!("HSTS check for {}", domain));

    let client = checks::build_client(&settings.http)?;
    let spinner = create_spinner(&format!("Fetching https://{}...", domain));
    let response = client.get(format!("https://{}", domain)).send().await;
    spinner.finish_and_clear();

    let response = response?;
    let result = validate_from_headers(response.headers());

    if !result.present {
        print_error("FAIL — no HSTS header");
        return Ok(1);
    }

    print_hsts_result(&result);
    if result.ok {
        Ok(0)
    } else {
        Ok(2)
    }
}
