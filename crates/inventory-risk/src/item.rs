use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Oxygen,
    Equipment,
    Consumable,
    Drug,
    Other,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Criticality {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub criticality: Criticality,
    pub current_stock: u32,
    pub reorder_level: u32,
    /// Missing usage is read as zero: unbounded stock days, no stockout alert.
    #[serde(default)]
    pub avg_daily_usage: Option<f64>,
    #[serde(default)]
    pub shelf_life_days: Option<u32>,
    #[serde(default)]
    pub last_restocked: Option<NaiveDate>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub supplier: String,
    /// Consumption tracks admissions closely (nebulizers, masks), so the item
    /// is flagged when predicted demand spikes.
    #[serde(default)]
    pub demand_sensitive: bool,
}

impl InventoryItem {
    /// Daily usage with missing, negative and non-finite values read as zero.
    pub fn usage(&self) -> f64 {
        self.avg_daily_usage
            .filter(|u| u.is_finite())
            .unwrap_or(0.0)
            .max(0.0)
    }

    pub fn needs_reorder(&self) -> bool {
        self.current_stock <= self.reorder_level
    }

    pub fn days_since_restock(&self, as_of: NaiveDate) -> Option<i64> {
        self.last_restocked.map(|d| (as_of - d).num_days())
    }
}

/// One day of the admissions feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientFlowPoint {
    pub date: NaiveDate,
    pub admissions: u32,
    pub predicted_demand: f64,
}
