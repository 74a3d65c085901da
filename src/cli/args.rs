//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hsts-toolkit")]
#[command(version)]
#[command(about = "A toolkit for auditing HTTP Strict Transport Security deployment", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "5")]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the HSTS header served by a domain
    Check(DomainArgs),

    /// Check preload list membership and eligibility
    Preload(DomainArgs),

    /// Check HTTP to HTTPS redirect enforcement
    Redirects(DomainArgs),

    /// Scan HSTS validity across multiple paths
    Scan(ScanArgs),

    /// Probe common subdomains for HTTPS and HSTS
    Subdomains(DomainArgs),

    /// Run the full HSTS audit and grade the domain
    Audit(DomainArgs),
}

#[derive(Args)]
pub struct DomainArgs {
    /// Domain to check
    #[arg(required = true)]
    pub domain: String,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Domain to check
    #[arg(required = true)]
    pub domain: String,

    /// Comma separated paths to scan
    #[arg(long, default_value = "/")]
    pub paths: String,
}
