//! Command implementations for hsts-toolkit

pub mod audit;
pub mod check;
pub mod preload;
pub mod redirects;
pub mod scan;
pub mod subdomains;

pub use audit::run_audit;
pub use check::run_check;
pub use preload::run_preload;
pub use redirects::run_redirects;
pub use scan::run_scan;
pub use subdomains::run_subdomains;
