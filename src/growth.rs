use crate::grouping::{group_order, group_sum};
use crate::schema::FinancialRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Percentage change from `prior` to `current`. A non-positive prior total
/// yields 0 rather than a division by zero or a meaningless sign flip.
pub fn growth_percent(current: f64, prior: f64) -> f64 {
    if prior > 0.0 {
        (current - prior) / prior * 100.0
    } else {
        0.0
    }
}

/// Change in profit between two periods, reported as an absolute amount.
pub fn profit_delta(
    current_income: f64,
    current_expenses: f64,
    prior_income: f64,
    prior_expenses: f64,
) -> f64 {
    (current_income - current_expenses) - (prior_income - prior_expenses)
}

/// Period-over-period deltas for the summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GrowthReport {
    pub income_percent: f64,
    pub expenses_percent: f64,
    pub profit_delta: f64,
}

impl GrowthReport {
    pub fn between(
        current_income: f64,
        current_expenses: f64,
        prior_income: f64,
        prior_expenses: f64,
    ) -> Self {
        Self {
            income_percent: growth_percent(current_income, prior_income),
            expenses_percent: growth_percent(current_expenses, prior_expenses),
            profit_delta: profit_delta(
                current_income,
                current_expenses,
                prior_income,
                prior_expenses,
            ),
        }
    }
}

/// Return on investment for one grouping key. Zero cost yields 0.
pub fn roi(revenue: f64, cost: f64) -> f64 {
    if cost > 0.0 {
        (revenue - cost) / cost * 100.0
    } else {
        0.0
    }
}

/// How shared costs are attributed to income-side keys.
///
/// Most small-business expenses (marketing, software) are not linked to a
/// specific income source, so `EvenSplit` divides the shared pool equally
/// across all known keys. `Explicit` lets the caller supply a real
/// cost-per-key mapping when one exists; keys absent from the map cost 0.
#[derive(Debug, Clone, Default)]
pub enum CostAttribution {
    #[default]
    EvenSplit,
    Explicit(BTreeMap<String, f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRoi {
    pub key: String,
    pub revenue: f64,
    pub cost: f64,
    pub roi_percent: f64,
}

/// ROI per income-side key, sorted descending by ROI. The sort is stable, so
/// ties keep first-appearance key order.
pub fn roi_by_group(
    incomes: &[FinancialRecord],
    shared_costs: f64,
    attribution: &CostAttribution,
) -> Vec<GroupRoi> {
    let revenue = group_sum(incomes, |r| &r.group_key);
    let keys = group_order(incomes, |r| &r.group_key);

    let even_share = if keys.is_empty() {
        0.0
    } else {
        shared_costs / keys.len() as f64
    };

    let mut rows: Vec<GroupRoi> = keys
        .into_iter()
        .map(|key| {
            let rev = revenue.get(&key).copied().unwrap_or(0.0);
            let cost = match attribution {
                CostAttribution::EvenSplit => even_share,
                CostAttribution::Explicit(map) => map.get(&key).copied().unwrap_or(0.0),
            };
            GroupRoi {
                roi_percent: roi(rev, cost),
                key,
                revenue: rev,
                cost,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.roi_percent
            .partial_cmp(&a.roi_percent)
            .unwrap_or(Ordering::Equal)
    });
    rows
}
