//! HSTS-Toolkit Library
//!
//! Audits a domain's HTTP Strict Transport Security posture:
//! - Header fetching and directive validation
//! - HTTP to HTTPS redirect enforcement
//! - Common subdomain probing (DNS + HTTPS + HSTS)
//! - Multi-path HSTS scanning
//! - Chromium preload list membership and eligibility
//! - Aggregate letter grading
//!
//! # Usage
//!
//! ```rust,ignore
//! use hsts_toolkit::audit::Auditor;
//! use hsts_toolkit::config::Settings;
//!
//! #[tokio::main]
//! async fn main() {
//!     let auditor = Auditor::new(Settings::default());
//!     let report = auditor.run("example.com").await.unwrap();
//!     println!("{}", report.grade.as_str());
//! }
//! ```

pub mod audit;
pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod hsts;
pub mod output;

// Re-export commonly used types
pub use audit::{derive_grade, AuditReport, Auditor, Grade, OverallStatus};
pub use cli::Cli;
pub use config::Settings;
pub use error::{HstsToolkitError, Result};
pub use hsts::{validate_hsts, HstsIssue, HstsResult};
