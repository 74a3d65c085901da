//! hsts-toolkit - HTTP Strict Transport Security auditing
//!
//! This tool provides functionality for:
//! - Validating HSTS headers served by a domain
//! - Checking HTTP to HTTPS redirect enforcement
//! - Probing common subdomains for HTTPS and HSTS
//! - Scanning HSTS validity across paths
//! - Checking the Chromium preload list
//! - Grading the overall HSTS deployment

use clap::Parser;
use console::style;
use hsts_toolkit::cli::{Cli, Commands};
use hsts_toolkit::config::Settings;
use hsts_toolkit::error::Result;
use hsts_toolkit::{commands, domain};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match run(cli).await {
        Ok(code) if code != 0 => std::process::exit(code),
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    let settings = Settings::load_default()?.with_timeout(cli.timeout);

    match cli.command {
        Commands::Check(args) => {
            let domain = domain::normalize(&args.domain)?;
            commands::run_check(&domain, &settings).await
        }
        Commands::Preload(args) => {
            let domain = domain::normalize(&args.domain)?;
            commands::run_preload(&domain, &settings).await?;
            Ok(0)
        }
        Commands::Redirects(args) => {
            let domain = domain::normalize(&args.domain)?;
            commands::run_redirects(&domain, &settings).await?;
            Ok(0)
        }
        Commands::Scan(args) => {
            let domain = domain::normalize(&args.domain)?;
            commands::run_scan(&domain, &args.paths, &settings).await?;
            Ok(0)
        }
        Commands::Subdomains(args) => {
            let domain = domain::normalize(&args.domain)?;
            commands::run_subdomains(&domain, &settings).await?;
            Ok(0)
        }
        Commands::Audit(args) => {
            let domain = domain::normalize(&args.domain)?;
            commands::run_audit(&domain, &settings, cli.verbose).await?;
            Ok(0)
        }
    }
}
