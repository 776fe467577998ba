//! Output writers for reports and charts.
//!
//! This module handles writing data to disk:
//! - JSON reports (pretty printed)
//! - SVG charts

pub mod json;
pub mod path;
pub mod svg;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use svg::write_svg;
