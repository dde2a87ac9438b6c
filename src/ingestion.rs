use crate::amount::normalize_amount;
use crate::error::{ReportError, Result};
use crate::schema::{FinancialRecord, RawRecordRow, RecordStatus};
use chrono::NaiveDate;

/// Converts a batch of backend rows into canonical records.
///
/// Amounts are normalized and made non-negative (the collection a record is
/// passed in carries the sign). A malformed date is the one shape violation
/// that surfaces as an error here instead of being zeroed away, so that bad
/// rows never reach the aggregation functions.
pub fn canonicalize_rows(rows: &[RawRecordRow]) -> Result<Vec<FinancialRecord>> {
    rows.iter().map(canonicalize_row).collect()
}

pub fn canonicalize_row(row: &RawRecordRow) -> Result<FinancialRecord> {
    let date = parse_record_date(&row.date)?;

    let status = row
        .status
        .as_deref()
        .map(RecordStatus::parse_lenient)
        .unwrap_or_default();

    Ok(FinancialRecord {
        id: row.id.clone(),
        description: row.description.clone().unwrap_or_default(),
        amount: normalize_amount(&row.amount).abs(),
        date,
        group_key: row.group_key.clone(),
        project_name: row.project_name.clone(),
        status,
    })
}

fn parse_record_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| ReportError::InvalidDate {
        value: value.to_string(),
        details: e.to_string(),
    })
}
