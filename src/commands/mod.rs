//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use models::ReportArgs;
pub use report::{build_request, execute_report, validate_args};
pub use utils::{display_schema, display_version, validate_report_file};
