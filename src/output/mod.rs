//! Output formatting module
//!
//! Terminal output with colors, spinners and tables.

pub mod grade;
pub mod tables;
pub mod terminal;

pub use grade::{print_grade, print_grade_compact};
pub use tables::{
    print_preload_table, print_redirect_table, print_scan_table, print_subdomain_table,
    print_table,
};
pub use terminal::{
    create_spinner, print_error, print_header, print_hsts_result, print_info, print_success,
    print_warning,
};
