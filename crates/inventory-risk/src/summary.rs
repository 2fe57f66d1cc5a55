use crate::item::{Criticality, InventoryItem};
use crate::risk::ItemForecast;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventorySummary {
    pub total_items: usize,
    pub needing_reorder: usize,
    pub high_criticality: usize,
}

impl InventorySummary {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        Self {
            total_items: items.len(),
            needing_reorder: items.iter().filter(|i| i.needs_reorder()).count(),
            high_criticality: items
                .iter()
                .filter(|i| i.criticality == Criticality::High)
                .count(),
        }
    }
}

/// Highest next-day demand first; ties keep input order.
pub fn top_by_next_day(forecast: &[ItemForecast], n: usize) -> Vec<ItemForecast> {
    let mut sorted = forecast.to_vec();
    sorted.sort_by(|a, b| b.next_day_demand.cmp(&a.next_day_demand));
    sorted.truncate(n);
    sorted
}
