//! Export module for housesplit
//!
//! - JSON: balance report for other tools
//! - YAML: balance report for reading
//! - CSV: ledger entries for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_ledger_csv;
pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
