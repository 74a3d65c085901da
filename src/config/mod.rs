//! Configuration module for hsts-toolkit

pub mod settings;

pub use settings::{HttpSettings, ProbeSettings, Settings, DEFAULT_PRELOAD_LIST_URL};
