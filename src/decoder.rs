// Row decoder: flat text cells in, one typed `Record` out.
//
// Reports are requested with a caller-chosen column subset, so the header
// is whatever this particular fetch carried. Unknown columns are skipped
// (a newer API version may add columns we have no binding for); known
// columns are coerced per their declared kind, and any coercion failure
// fails the whole row with full context.
use crate::errors::DecodeError;
use crate::metadata::index_for;
use crate::types::{Record, ReportType};
use log::debug;

/// Decode one report row.
///
/// `header` and `row` must be the same length; cells pair positionally with
/// column names. Decoding is stateless: the same inputs always populate the
/// same field set with the same values, and no two rows affect each other.
pub fn decode<S: AsRef<str>>(
    report_type: ReportType,
    header: &[S],
    row: &[S],
) -> Result<Record, DecodeError> {
    if header.len() != row.len() {
        return Err(DecodeError::RowWidth {
            report_type,
            header_len: header.len(),
            row_len: row.len(),
        });
    }

    let index = index_for(report_type);
    let mut record = Record::new(report_type);
    for (column, cell) in header.iter().zip(row.iter()) {
        let column = column.as_ref();
        let Some(field) = index.get(column) else {
            debug!("{}: skipping unbound column `{}`", report_type, column);
            continue;
        };
        record
            .apply(field, cell.as_ref())
            .map_err(|source| DecodeError::Cell {
                report_type,
                column: column.to_string(),
                raw: cell.as_ref().to_string(),
                source,
            })?;
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormatError;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn keyword_header() -> Vec<&'static str> {
        vec![
            "CampaignId",
            "AdgroupId",
            "Id",
            "Criteria",
            "Day",
            "Impressions",
            "Clicks",
            "Cost",
            "Ctr",
            "Device",
        ]
    }

    fn keyword_row() -> Vec<&'static str> {
        vec![
            "100", "200", "300", "shoes", "2024-03-14", "1,250", "37", "12.50", "2.96%", "Mobile",
        ]
    }

    #[test]
    fn decodes_a_keyword_row() {
        let record = decode(
            ReportType::KeywordsPerformanceReport,
            &keyword_header(),
            &keyword_row(),
        )
        .unwrap();
        assert_eq!(record.report_type, ReportType::KeywordsPerformanceReport);
        assert_eq!(record.campaign_id, Some(100));
        assert_eq!(record.ad_group_id, Some(200));
        assert_eq!(record.row_id, Some(300));
        assert_eq!(record.criteria.as_deref(), Some("shoes"));
        assert_eq!(record.day.as_deref(), Some("2024-03-14"));
        assert_eq!(record.impressions, Some(1250));
        assert_eq!(record.clicks, Some(37));
        assert_eq!(record.cost, Some(dec("12.50")));
        assert_eq!(record.ctr, Some(dec("2.96")));
        assert_eq!(record.device.as_deref(), Some("Mobile"));
    }

    #[test]
    fn decoding_is_deterministic() {
        let a = decode(
            ReportType::KeywordsPerformanceReport,
            &keyword_header(),
            &keyword_row(),
        )
        .unwrap();
        let b = decode(
            ReportType::KeywordsPerformanceReport,
            &keyword_header(),
            &keyword_row(),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_extra_columns_are_skipped() {
        let mut header = keyword_header();
        let mut row = keyword_row();
        header.push("BrandNewApiColumn");
        row.push("whatever");
        let with_extra = decode(ReportType::KeywordsPerformanceReport, &header, &row).unwrap();
        let without = decode(
            ReportType::KeywordsPerformanceReport,
            &keyword_header(),
            &keyword_row(),
        )
        .unwrap();
        assert_eq!(with_extra, without);
    }

    #[test]
    fn empty_cells_leave_fields_absent() {
        let header = vec!["Impressions", "Clicks", "Device"];
        let row = vec!["", "5", ""];
        let record = decode(ReportType::AccountPerformanceReport, &header, &row).unwrap();
        assert_eq!(record.impressions, None);
        assert_eq!(record.clicks, Some(5));
        assert_eq!(record.device, None);
    }

    #[test]
    fn a_bad_cell_fails_the_row_with_context() {
        let header = vec!["Impressions", "Cost"];
        let row = vec!["10", "not-money"];
        let err = decode(ReportType::CampaignPerformanceReport, &header, &row).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Cell {
                report_type: ReportType::CampaignPerformanceReport,
                column: "Cost".to_string(),
                raw: "not-money".to_string(),
                source: FormatError::NotNumeric("not-money".to_string()),
            }
        );
    }

    #[test]
    fn mismatched_row_width_is_rejected() {
        let header = vec!["Impressions", "Clicks"];
        let row = vec!["10"];
        let err = decode(ReportType::AccountPerformanceReport, &header, &row).unwrap_err();
        assert!(matches!(err, DecodeError::RowWidth { header_len: 2, row_len: 1, .. }));
    }

    #[test]
    fn columns_outside_the_report_scope_are_ignored() {
        // CampaignId is not bound for account-level reports
        let header = vec!["CampaignId", "Clicks"];
        let row = vec!["123", "7"];
        let record = decode(ReportType::AccountPerformanceReport, &header, &row).unwrap();
        assert_eq!(record.campaign_id, None);
        assert_eq!(record.clicks, Some(7));
    }
}
