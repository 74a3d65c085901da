//! Audit command implementation

use crate::audit::Auditor;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{
    create_spinner, print_grade, print_header, print_hsts_result, print_info,
    print_redirect_table, print_scan_table, print_subdomain_table,
};

/// Run the full audit command
pub async fn run_audit(domain: &str, settings: &Settings, verbose: bool) -> Result<()> {
    print_info(&format!("Full HSTS audit for {}", domain));

    let auditor = Auditor::new(settings.clone());
    let spinner = create_spinner("Running audit probes...");
    let report = auditor.run(domain).await;
    spinner.finish_and_clear();

    let report = report?;

    print_grade(report.grade, report.overall_status);

    print_header("HSTS Header");
    print_hsts_result(&report.hsts);
    print_info(&format!(
        "Preload list: {} (eligible: {})",
        report.preload.status.as_str(),
        if report.preload.eligible { "yes" } else { "no" }
    ));

    print_header("Redirects");
    print_redirect_table(&report.redirects);

    print_header("Subdomains");
    print_subdomain_table(&report.subdomains);

    print_header("Paths");
    print_scan_table(&report.paths);

    if verbose {
        for outcome in &report.redirects {
            for (status, url) in &outcome.history {
                print_info(&format!("{}: hop {} {}", outcome.scenario, status, url));
            }
        }
    }

    Ok(())
}
