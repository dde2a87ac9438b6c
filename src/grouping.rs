use crate::schema::FinancialRecord;
use std::collections::BTreeMap;

/// Sums record amounts per distinct key.
///
/// The key set of the returned map is exactly the distinct keys present in
/// `records`; keys with no records are not zero-filled. The total value is
/// conserved: the sum of the map values equals the sum of the input amounts.
pub fn group_sum<F>(records: &[FinancialRecord], key_of: F) -> BTreeMap<String, f64>
where
    F: Fn(&FinancialRecord) -> &str,
{
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(key_of(record).to_string()).or_insert(0.0) += record.amount;
    }
    totals
}

/// The key with the largest summed value, or `None` when the map is empty or
/// every sum is zero.
pub fn top_group(totals: &BTreeMap<String, f64>) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (key, &total) in totals {
        if total <= 0.0 {
            continue;
        }
        match best {
            Some((_, current)) if current >= total => {}
            _ => best = Some((key.as_str(), total)),
        }
    }
    best
}

/// Distinct keys in first-appearance order. Used wherever "original key order"
/// matters, such as stable tie-breaking in ROI rankings.
pub fn group_order<F>(records: &[FinancialRecord], key_of: F) -> Vec<String>
where
    F: Fn(&FinancialRecord) -> &str,
{
    let mut keys: Vec<String> = Vec::new();
    for record in records {
        let key = key_of(record);
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}
