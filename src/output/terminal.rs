//! Terminal output formatting

use crate::hsts::HstsResult;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for long-running operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .expect("spinner template is valid")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Print an HSTS validation result as a verdict line plus issue list
pub fn print_hsts_result(result: &HstsResult) {
    if result.ok {
        print_success("HSTS OK");
        if let Some(age) = result.max_age {
            print_info(&format!("max-age: {}", age));
        }
        if result.include_subdomains {
            print_info("includeSubDomains set");
        }
        if result.preload {
            print_info("preload set");
        }
        return;
    }

    if !result.present {
        print_error("no HSTS header");
    } else {
        print_warning("Issues detected:");
    }
    for issue in &result.issues {
        println!("   {} {}", style("-").dim(), issue);
    }
}
