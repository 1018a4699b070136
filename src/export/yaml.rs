//! YAML Export functionality
//!
//! Same content as the JSON export, for reading by humans.

use std::io::Write;

use crate::error::HouseholdResult;
use crate::export::json::ReportExport;
use crate::reports::BalanceReport;

/// Export a balance report as YAML with a short header comment
pub fn export_report_yaml<W: Write>(report: &BalanceReport, writer: &mut W) -> HouseholdResult<()> {
    let export = ReportExport::new(report);

    writeln!(writer, "# housesplit balance report: {}", report.household_name)?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# Amounts are in cents")?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HouseholdId, MemberId, Money};
    use crate::reports::PlannedPayment;

    #[test]
    fn test_yaml_export() {
        let report = BalanceReport {
            household_id: HouseholdId::new(),
            household_name: "Maple Street".into(),
            members: Vec::new(),
            plan: vec![PlannedPayment {
                from_member_id: MemberId::new(),
                from_name: "Bob".into(),
                to_member_id: MemberId::new(),
                to_name: "Alice".into(),
                amount: Money::from_cents(3106),
            }],
            all_settled: false,
            residual: Vec::new(),
        };

        let mut output = Vec::new();
        export_report_yaml(&report, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# housesplit balance report: Maple Street"));
        assert!(text.contains("from_name: Bob"));
        assert!(text.contains("amount: 3106"));
    }
}
