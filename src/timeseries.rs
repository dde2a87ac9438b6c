use crate::error::{ReportError, Result};
use crate::schema::FinancialRecord;
use crate::utils::{first_day_of_month, last_day_of_month, month_label, months_back};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The trailing-month presets the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthWindow {
    One,
    Three,
    Six,
    Twelve,
}

impl MonthWindow {
    pub fn months(self) -> u32 {
        match self {
            MonthWindow::One => 1,
            MonthWindow::Three => 3,
            MonthWindow::Six => 6,
            MonthWindow::Twelve => 12,
        }
    }

    pub fn from_months(months: u32) -> Result<Self> {
        match months {
            1 => Ok(MonthWindow::One),
            3 => Ok(MonthWindow::Three),
            6 => Ok(MonthWindow::Six),
            12 => Ok(MonthWindow::Twelve),
            other => Err(ReportError::InvalidWindow(other)),
        }
    }
}

/// One calendar month of aggregated figures. Derived data, recomputed per
/// call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    /// "MMM/yy", e.g. "Jan/25".
    pub label: String,
    pub income: f64,
    pub expenses: f64,
    pub profit: f64,
    pub margin_percent: f64,
}

/// Partitions records into the `months` trailing calendar months ending at
/// (and including) the month containing `as_of`.
///
/// Always returns exactly `months` buckets, oldest first; months with no
/// records yield zero-valued buckets. Comparisons are date-only and month
/// boundaries are inclusive on both ends. Margin is 0 for months with no
/// income.
pub fn bucket_months(
    incomes: &[FinancialRecord],
    expenses: &[FinancialRecord],
    months: u32,
    as_of: NaiveDate,
) -> Vec<MonthBucket> {
    let mut buckets = Vec::with_capacity(months as usize);

    for back in (0..months).rev() {
        let (year, month) = months_back(as_of.year(), as_of.month(), back);
        let income = sum_in_month(incomes, year, month);
        let expense_total = sum_in_month(expenses, year, month);
        let profit = income - expense_total;
        let margin_percent = if income > 0.0 {
            profit / income * 100.0
        } else {
            0.0
        };

        buckets.push(MonthBucket {
            label: month_label(year, month),
            income,
            expenses: expense_total,
            profit,
            margin_percent,
        });
    }

    buckets
}

/// Sum of amounts dated within the given calendar month, inclusive.
pub fn sum_in_month(records: &[FinancialRecord], year: i32, month: u32) -> f64 {
    let start = first_day_of_month(year, month);
    let end = last_day_of_month(year, month);
    records
        .iter()
        .filter(|r| r.date >= start && r.date <= end)
        .map(|r| r.amount)
        .fold(0.0, |acc, amount| acc + amount)
}
