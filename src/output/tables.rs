//! Table rendering using comfy-table

use crate::checks::{PathOutcome, PathStatus, RedirectOutcome, SubdomainOutcome, SubdomainStatus};
use crate::hsts::HstsResult;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};

/// Print a formatted table with headers and rows
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    // Constrain table width to terminal width minus indent
    if let Ok((cols, _)) = crossterm::terminal::size() {
        table.set_width(cols.saturating_sub(4));
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in rows {
        let cells: Vec<Cell> = row
            .iter()
            .map(|text| {
                let mut cell = Cell::new(text);
                if text.contains('✓') || text == "ok" || text == "yes" {
                    cell = cell.fg(Color::Green);
                } else if text.contains('✗') || text.starts_with("error") || text == "no" {
                    cell = cell.fg(Color::Red);
                }
                cell
            })
            .collect();
        table.add_row(cells);
    }

    // Indent the table
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

fn hsts_cell(result: &HstsResult) -> String {
    if result.ok {
        "✓ OK".to_string()
    } else {
        result.issues_summary()
    }
}

/// Print the preload report table
pub fn print_preload_table(hsts: &HstsResult, status: &str, eligible: bool) {
    let rows = vec![
        vec!["HSTS OK".to_string(), yes_no(hsts.ok)],
        vec![
            "max-age".to_string(),
            hsts.max_age.map_or("-".to_string(), |a| a.to_string()),
        ],
        vec![
            "includeSubDomains".to_string(),
            yes_no(hsts.include_subdomains),
        ],
        vec!["preload flag".to_string(), yes_no(hsts.preload)],
        vec!["Preload list".to_string(), status.to_string()],
        vec!["Eligible".to_string(), yes_no(eligible)],
    ];
    print_table(&["Check", "Result"], &rows);
}

/// Print the redirect scenario table
pub fn print_redirect_table(outcomes: &[RedirectOutcome]) {
    let rows: Vec<Vec<String>> = outcomes
        .iter()
        .map(|o| {
            vec![
                o.scenario.clone(),
                o.start_url.clone(),
                o.final_url.clone().unwrap_or_else(|| "-".to_string()),
                o.status.map_or_else(
                    || o.error.clone().unwrap_or_else(|| "-".to_string()),
                    |s| s.to_string(),
                ),
                yes_no(o.https_enforced),
            ]
        })
        .collect();
    print_table(
        &["Scenario", "Start", "Final", "Status", "HTTPS Enforced"],
        &rows,
    );
}

/// Print the path scan table
pub fn print_scan_table(outcomes: &[PathOutcome]) {
    let rows: Vec<Vec<String>> = outcomes
        .iter()
        .map(|o| {
            let status = match &o.status {
                PathStatus::Hsts(result) => hsts_cell(result),
                PathStatus::Error(e) => e.clone(),
            };
            vec![o.path.clone(), status]
        })
        .collect();
    print_table(&["Path", "Status"], &rows);
}

/// Print the subdomain analysis table
pub fn print_subdomain_table(outcomes: &[SubdomainOutcome]) {
    let rows: Vec<Vec<String>> = outcomes
        .iter()
        .map(|o| {
            let (status, details) = match &o.status {
                SubdomainStatus::NoDns => ("no_dns".to_string(), "-".to_string()),
                SubdomainStatus::Https(result) => {
                    if result.ok {
                        ("ok".to_string(), "-".to_string())
                    } else {
                        ("issues".to_string(), result.issues_summary())
                    }
                }
                SubdomainStatus::Error(e) => ("error".to_string(), e.clone()),
            };
            vec![o.host.clone(), status, details]
        })
        .collect();
    print_table(&["Host", "Status", "Details"], &rows);
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}
