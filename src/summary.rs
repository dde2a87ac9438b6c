use crate::growth::GrowthReport;
use crate::grouping::{group_sum, top_group};
use crate::schema::{FinancialRecord, GroupDefinition};
use crate::timeseries::sum_in_month;
use crate::utils::months_back;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// The winning grouping key for one side of the ledger, with its label
/// resolved against the known group definitions when available.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopGroup {
    pub key: String,
    pub name: Option<String>,
    pub total: f64,
}

/// The composed result the dashboard and reports page consume. Derived data,
/// valid for a single computation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub profit_margin_percent: f64,
    pub top_income_group: Option<TopGroup>,
    pub top_expense_group: Option<TopGroup>,
    pub growth: GrowthReport,
}

/// Combines totals, top groups and month-over-month growth into one summary.
///
/// Returns `None` when both collections are empty so callers can render an
/// onboarding/empty state instead of treating the condition as a failure.
/// Growth compares the calendar month containing `as_of` against the month
/// before it.
pub fn compute_summary(
    incomes: &[FinancialRecord],
    expenses: &[FinancialRecord],
    group_defs: &[GroupDefinition],
    as_of: NaiveDate,
) -> Option<FinancialSummary> {
    if incomes.is_empty() && expenses.is_empty() {
        return None;
    }

    let total_income: f64 = incomes.iter().map(|r| r.amount).sum();
    let total_expenses: f64 = expenses.iter().map(|r| r.amount).sum();
    let net_profit = total_income - total_expenses;
    let profit_margin_percent = if total_income > 0.0 {
        net_profit / total_income * 100.0
    } else {
        0.0
    };

    let top_income_group = resolve_top(incomes, group_defs);
    let top_expense_group = resolve_top(expenses, group_defs);

    let (current_year, current_month) = (as_of.year(), as_of.month());
    let (prior_year, prior_month) = months_back(current_year, current_month, 1);
    let growth = GrowthReport::between(
        sum_in_month(incomes, current_year, current_month),
        sum_in_month(expenses, current_year, current_month),
        sum_in_month(incomes, prior_year, prior_month),
        sum_in_month(expenses, prior_year, prior_month),
    );

    Some(FinancialSummary {
        total_income,
        total_expenses,
        net_profit,
        profit_margin_percent,
        top_income_group,
        top_expense_group,
        growth,
    })
}

fn resolve_top(records: &[FinancialRecord], group_defs: &[GroupDefinition]) -> Option<TopGroup> {
    let totals = group_sum(records, |r| &r.group_key);
    top_group(&totals).map(|(key, total)| TopGroup {
        key: key.to_string(),
        name: group_defs
            .iter()
            .find(|d| d.id == key)
            .map(|d| d.name.clone()),
        total,
    })
}
