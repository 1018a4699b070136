//! JSON Export functionality
//!
//! Writes a balance report with schema and version metadata.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::HouseholdResult;
use crate::reports::BalanceReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Balance report export structure
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Amounts are integer cents
    pub amount_unit: &'static str,

    pub report: &'a BalanceReport,
}

impl<'a> ReportExport<'a> {
    pub fn new(report: &'a BalanceReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            amount_unit: "cents",
            report,
        }
    }
}

/// Export a balance report as pretty-printed JSON
pub fn export_report_json<W: Write>(report: &BalanceReport, writer: &mut W) -> HouseholdResult<()> {
    let export = ReportExport::new(report);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
