use crate::growth::GroupRoi;
use crate::grouping::group_sum;
use crate::schema::{FinancialRecord, GroupDefinition};
use crate::summary::FinancialSummary;
use crate::timeseries::MonthBucket;
use serde::Serialize;

/// One grouping key's share of a collection, labeled for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupBreakdown {
    pub key: String,
    pub name: Option<String>,
    pub display_color: Option<String>,
    pub total: f64,
    pub percent_of_total: f64,
}

/// Everything the dashboard needs from one computation pass: the composed
/// summary, the trailing-month series, per-source and per-category breakdowns
/// and the ROI ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub summary: FinancialSummary,
    pub months: Vec<MonthBucket>,
    pub income_by_source: Vec<GroupBreakdown>,
    pub expenses_by_category: Vec<GroupBreakdown>,
    pub roi_ranking: Vec<GroupRoi>,
}

/// Per-key breakdown of a collection, sorted descending by total, labeled
/// against the known group definitions.
pub fn breakdown(records: &[FinancialRecord], group_defs: &[GroupDefinition]) -> Vec<GroupBreakdown> {
    let totals = group_sum(records, |r| &r.group_key);
    let collection_total: f64 = totals.values().sum();

    let mut rows: Vec<GroupBreakdown> = totals
        .into_iter()
        .map(|(key, total)| {
            let def = group_defs.iter().find(|d| d.id == key);
            GroupBreakdown {
                name: def.map(|d| d.name.clone()),
                display_color: def.map(|d| d.display_color.clone()),
                percent_of_total: if collection_total > 0.0 {
                    total / collection_total * 100.0
                } else {
                    0.0
                },
                key,
                total,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    rows
}

impl DashboardReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Month-by-month figures as CSV, for export without any UI dependency.
    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str("Month,Income,Expenses,Profit,Margin %\n");

        for bucket in &self.months {
            output.push_str(&format!(
                "{},{:.2},{:.2},{:.2},{:.2}\n",
                bucket.label, bucket.income, bucket.expenses, bucket.profit, bucket.margin_percent
            ));
        }

        output
    }

    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Financial Report\n\n");
        output.push_str(&format!(
            "**Total income:** {:.2}  \n**Total expenses:** {:.2}  \n**Net profit:** {:.2} ({:.1}% margin)\n\n",
            self.summary.total_income,
            self.summary.total_expenses,
            self.summary.net_profit,
            self.summary.profit_margin_percent
        ));

        output.push_str("## Monthly\n\n");
        output.push_str("| Month | Income | Expenses | Profit | Margin % |\n");
        output.push_str("|-------|--------|----------|--------|----------|\n");
        for bucket in &self.months {
            output.push_str(&format!(
                "| {} | {:.2} | {:.2} | {:.2} | {:.1} |\n",
                bucket.label, bucket.income, bucket.expenses, bucket.profit, bucket.margin_percent
            ));
        }
        output.push('\n');

        output.push_str("## Income by source\n\n");
        for row in &self.income_by_source {
            output.push_str(&format!(
                "- {}: {:.2} ({:.1}%)\n",
                row.name.as_deref().unwrap_or(&row.key),
                row.total,
                row.percent_of_total
            ));
        }
        output.push('\n');

        output.push_str("## Expenses by category\n\n");
        for row in &self.expenses_by_category {
            output.push_str(&format!(
                "- {}: {:.2} ({:.1}%)\n",
                row.name.as_deref().unwrap_or(&row.key),
                row.total,
                row.percent_of_total
            ));
        }
        output.push('\n');

        output.push_str("## ROI by source\n\n");
        for row in &self.roi_ranking {
            output.push_str(&format!(
                "- {}: {:.1}% (revenue {:.2}, cost {:.2})\n",
                row.key, row.roi_percent, row.revenue, row.cost
            ));
        }
        output.push('\n');

        output
    }
}
