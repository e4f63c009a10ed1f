//! Overdue order aggregation
//!
//! Scans the full order collection, classifies each order against a
//! reference time, and sums overdue unit counts per furniture type.

use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use crate::domain::model::Order;
use crate::error::Result;

/// Sum overdue unit counts grouped by furniture type.
///
/// An order counts iff it has no actual delivery date and its planned
/// delivery date lies before `reference`. All items of an overdue order
/// count; orders with no items contribute nothing.
pub fn aggregate_overdue(
    orders: &[Order],
    reference: NaiveDateTime,
) -> Result<BTreeMap<String, u64>> {
    let mut totals = BTreeMap::new();
    for order in orders.iter().filter(|o| o.is_overdue(reference)) {
        for item in &order.items {
            *totals.entry(item.kind.clone()).or_insert(0) += item.units()?;
        }
    }
    Ok(totals)
}

/// Report rows sorted by overdue count descending.
///
/// Equal counts keep the mapping's iteration order (alphabetical by type).
pub fn sorted_rows(totals: &BTreeMap<String, u64>) -> Vec<(String, u64)> {
    let mut rows: Vec<(String, u64)> = totals.iter().map(|(k, v)| (k.clone(), *v)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}
