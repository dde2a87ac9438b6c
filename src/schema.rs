use crate::amount::RawAmount;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settlement state of a record. Incomes use Pending/Received, expenses use
/// Pending/Paid, tax obligations use Pending/Paid/Overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Pending,
    Received,
    Paid,
    Overdue,
}

impl RecordStatus {
    /// Lenient parse for the free-form status strings the backend stores.
    /// Unknown values fall back to Pending.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "received" | "recebido" => RecordStatus::Received,
            "paid" | "pago" => RecordStatus::Paid,
            "overdue" | "atrasado" | "vencido" => RecordStatus::Overdue,
            _ => RecordStatus::Pending,
        }
    }
}

/// A single income, expense or tax-obligation entry in canonical form.
///
/// The amount is always non-negative; whether it counts as revenue or cost is
/// determined by which collection the record is passed in, not by its sign.
/// `group_key` is the income source id or expense category id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub group_key: String,
    pub project_name: Option<String>,
    pub status: RecordStatus,
}

impl FinancialRecord {
    pub fn new(
        id: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        group_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            amount,
            date,
            group_key: group_key.into(),
            project_name: None,
            status: RecordStatus::default(),
        }
    }
}

/// Labeling entity for a grouping key (an income source or expense category).
/// Immutable for the duration of a computation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDefinition {
    pub id: String,
    pub name: String,
    pub display_color: String,
}

/// The loose row shape the CRUD backend returns for incomes, expenses and tax
/// obligations. Amounts may be numbers or formatted strings, dates are plain
/// `YYYY-MM-DD` strings. Use [`crate::ingestion::canonicalize_rows`] to turn
/// these into [`FinancialRecord`]s.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawRecordRow {
    #[schemars(description = "Backend row identifier")]
    pub id: String,

    #[schemars(description = "Human-readable description of the entry")]
    #[serde(default)]
    pub description: Option<String>,

    #[schemars(
        description = "Monetary amount. May be a number, a formatted string ('1.234,56', '$1,234.56') or null."
    )]
    #[serde(default)]
    pub amount: RawAmount,

    #[schemars(description = "Entry date in YYYY-MM-DD format")]
    pub date: String,

    #[schemars(description = "Income source id or expense category id the entry belongs to")]
    pub group_key: String,

    #[schemars(description = "Optional project this entry is attributed to")]
    #[serde(default)]
    pub project_name: Option<String>,

    #[schemars(description = "Settlement status string ('pending', 'received', 'paid', 'overdue')")]
    #[serde(default)]
    pub status: Option<String>,
}

impl RawRecordRow {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(RawRecordRow)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::RawAmount;

    #[test]
    fn test_status_parse_lenient() {
        assert_eq!(RecordStatus::parse_lenient("received"), RecordStatus::Received);
        assert_eq!(RecordStatus::parse_lenient(" PAID "), RecordStatus::Paid);
        assert_eq!(RecordStatus::parse_lenient("overdue"), RecordStatus::Overdue);
        assert_eq!(RecordStatus::parse_lenient("whatever"), RecordStatus::Pending);
        assert_eq!(RecordStatus::parse_lenient(""), RecordStatus::Pending);
    }

    #[test]
    fn test_schema_generation() {
        let schema_json = RawRecordRow::schema_as_json().unwrap();
        assert!(schema_json.contains("group_key"));
        assert!(schema_json.contains("amount"));
        assert!(schema_json.contains("date"));
    }

    #[test]
    fn test_raw_row_deserializes_mixed_amounts() {
        let json = r#"[
            {"id": "1", "amount": 1000, "date": "2025-01-10", "group_key": "src-A"},
            {"id": "2", "amount": "1.234,56", "date": "2025-02-05", "group_key": "src-B", "status": "received"},
            {"id": "3", "amount": null, "date": "2025-02-06", "group_key": "src-B"}
        ]"#;

        let rows: Vec<RawRecordRow> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].amount, RawAmount::Number(1000.0));
        assert_eq!(rows[1].amount, RawAmount::Text("1.234,56".to_string()));
        assert_eq!(rows[2].amount, RawAmount::Missing);
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = FinancialRecord {
            id: "inc-1".to_string(),
            description: "Consulting retainer".to_string(),
            amount: 2500.0,
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            group_key: "src-A".to_string(),
            project_name: Some("Acme".to_string()),
            status: RecordStatus::Received,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: FinancialRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
