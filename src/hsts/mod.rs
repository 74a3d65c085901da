//! HSTS header validation

pub mod parser;

pub use parser::{validate_from_headers, validate_hsts, HstsIssue, HstsResult};
