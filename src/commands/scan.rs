//! Scan command implementation

use crate::checks::scan::parse_path_list;
use crate::checks::PathScanner;
use crate::config::Settings;
use crate::error::{HstsToolkitError, Result};
use crate::output::{create_spinner, print_header, print_info, print_scan_table};

/// Run the scan command over a comma separated path list
pub async fn run_scan(domain: &str, raw_paths: &str, settings: &Settings) -> Result<()> {
    let paths = parse_path_list(raw_paths);
    if paths.is_empty() {
        return Err(HstsToolkitError::Config(
            "no paths to scan; pass --paths /,/login".to_string(),
        ));
    }

    print_info(&format!("HSTS multi-path scan for {}", domain));

    let scanner = PathScanner::new(&settings.http)?;
    let spinner = create_spinner(&format!("Scanning {} paths...", paths.len()));
    let outcomes = scanner.scan_paths(domain, &paths).await;
    spinner.finish_and_clear();

    print_header("HSTS Path Scan");
    print_scan_table(&outcomes);
    Ok(())
}
