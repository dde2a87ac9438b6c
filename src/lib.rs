//! # Financial Reporting
//!
//! A library for aggregating income, expense and tax-obligation records into
//! dashboard-ready financial reports: totals, per-source and per-category
//! breakdowns, trailing-month time series, growth deltas and ROI rankings.
//!
//! ## Core Concepts
//!
//! - **Records**: dated, tagged entries supplied by an external data-fetch
//!   layer. Amounts are canonical and non-negative; the collection a record is
//!   passed in (incomes vs. expenses) carries its sign.
//! - **Normalization**: heterogeneous backend amounts (numbers, formatted
//!   strings, nulls) collapse to finite numbers through a single entry point.
//! - **Total functions**: no aggregation ever throws or produces NaN. A zero
//!   denominator yields 0, an empty dataset yields a defined empty state.
//! - **No state**: every function is a pure function of its inputs and may run
//!   on any thread. Persistence, HTTP and UI are external collaborators.
//!
//! ## Example
//!
//! ```rust,ignore
//! use financial_reporting::*;
//! use chrono::NaiveDate;
//!
//! let incomes = vec![
//!     FinancialRecord::new("1", 1000.0, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(), "src-A"),
//!     FinancialRecord::new("2", 500.0, NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(), "src-B"),
//! ];
//! let expenses = vec![
//!     FinancialRecord::new("3", 300.0, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(), "cat-X"),
//! ];
//!
//! let as_of = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
//! let report = build_dashboard_report(&incomes, &expenses, &[], MonthWindow::Six, as_of);
//! ```

pub mod amount;
pub mod error;
pub mod grouping;
pub mod growth;
pub mod ingestion;
pub mod report;
pub mod schema;
pub mod summary;
pub mod timeseries;
pub mod utils;

pub use amount::{normalize_amount, RawAmount};
pub use error::{ReportError, Result};
pub use grouping::{group_order, group_sum, top_group};
pub use growth::{
    growth_percent, profit_delta, roi, roi_by_group, CostAttribution, GroupRoi, GrowthReport,
};
pub use ingestion::{canonicalize_row, canonicalize_rows};
pub use report::{breakdown, DashboardReport, GroupBreakdown};
pub use schema::{FinancialRecord, GroupDefinition, RawRecordRow, RecordStatus};
pub use summary::{compute_summary, FinancialSummary, TopGroup};
pub use timeseries::{bucket_months, sum_in_month, MonthBucket, MonthWindow};

use chrono::NaiveDate;
use log::{debug, info};

/// Assembles a full [`DashboardReport`] from one snapshot of records.
///
/// Holds no state between calls; it only carries the knobs a dashboard page
/// configures (window length, cost attribution for the ROI ranking).
pub struct ReportBuilder {
    window: MonthWindow,
    cost_attribution: CostAttribution,
}

impl ReportBuilder {
    pub fn new(window: MonthWindow) -> Self {
        Self {
            window,
            cost_attribution: CostAttribution::default(),
        }
    }

    pub fn with_cost_attribution(mut self, attribution: CostAttribution) -> Self {
        self.cost_attribution = attribution;
        self
    }

    /// Returns `None` when both collections are empty, mirroring
    /// [`compute_summary`]'s defined empty state.
    pub fn build(
        &self,
        incomes: &[FinancialRecord],
        expenses: &[FinancialRecord],
        group_defs: &[GroupDefinition],
        as_of: NaiveDate,
    ) -> Option<DashboardReport> {
        info!(
            "Building dashboard report over {} income and {} expense records (window: {} months)",
            incomes.len(),
            expenses.len(),
            self.window.months()
        );

        let summary = compute_summary(incomes, expenses, group_defs, as_of)?;
        let months = bucket_months(incomes, expenses, self.window.months(), as_of);
        let income_by_source = breakdown(incomes, group_defs);
        let expenses_by_category = breakdown(expenses, group_defs);

        // The ROI ranking treats the full expense total as the shared pool
        // unless the caller attributed costs explicitly.
        let roi_ranking = roi_by_group(incomes, summary.total_expenses, &self.cost_attribution);

        debug!(
            "Report covers {} sources and {} categories",
            income_by_source.len(),
            expenses_by_category.len()
        );

        Some(DashboardReport {
            summary,
            months,
            income_by_source,
            expenses_by_category,
            roi_ranking,
        })
    }
}

pub fn build_dashboard_report(
    incomes: &[FinancialRecord],
    expenses: &[FinancialRecord],
    group_defs: &[GroupDefinition],
    window: MonthWindow,
    as_of: NaiveDate,
) -> Option<DashboardReport> {
    ReportBuilder::new(window).build(incomes, expenses, group_defs, as_of)
}
