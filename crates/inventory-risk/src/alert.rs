use crate::item::InventoryItem;
use crate::risk::{ItemForecast, RiskContext};
use aadhya_core::alert::AlertLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Stockout,
    LowStock,
    Reorder,
    DemandSpike,
    Expiry,
}

impl AlertKind {
    pub const ALL: [AlertKind; 5] = [
        AlertKind::Stockout,
        AlertKind::LowStock,
        AlertKind::Reorder,
        AlertKind::DemandSpike,
        AlertKind::Expiry,
    ];

    pub fn level(self) -> AlertLevel {
        match self {
            AlertKind::Stockout => AlertLevel::Critical,
            AlertKind::LowStock | AlertKind::Expiry => AlertLevel::Warning,
            AlertKind::Reorder => AlertLevel::Action,
            AlertKind::DemandSpike => AlertLevel::Info,
        }
    }

    /// Machine name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Stockout => "stockout",
            AlertKind::LowStock => "low_stock",
            AlertKind::Reorder => "reorder",
            AlertKind::DemandSpike => "demand_spike",
            AlertKind::Expiry => "expiry",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Stockout => "Stockout Risk",
            AlertKind::LowStock => "Low Stock",
            AlertKind::Reorder => "Reorder",
            AlertKind::DemandSpike => "Demand Spike",
            AlertKind::Expiry => "Expiry",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryAlert {
    pub kind: AlertKind,
    pub item_id: u32,
    pub level: AlertLevel,
    pub message: String,
}

impl InventoryAlert {
    fn new(kind: AlertKind, item_id: u32, message: String) -> Self {
        Self {
            kind,
            item_id,
            level: kind.level(),
            message,
        }
    }
}

/// Alerts for one item, in evaluation order: stock cover, reorder point,
/// demand spike, shelf life.
pub fn derive_alerts(
    item: &InventoryItem,
    forecast: &ItemForecast,
    ctx: &RiskContext<'_>,
) -> Vec<InventoryAlert> {
    let mut out = Vec::new();

    let out_of_cover =
        forecast.stock_days_remaining.map_or(false, |d| d < 1) || forecast.risk_hours < 24;
    if out_of_cover {
        out.push(InventoryAlert::new(
            AlertKind::Stockout,
            item.id,
            format!(
                "{} risk of stockout in {} hours",
                item.name,
                forecast.risk_hours.max(1)
            ),
        ));
    } else if let Some(days) = forecast.stock_days_remaining.filter(|d| *d < 3) {
        out.push(InventoryAlert::new(
            AlertKind::LowStock,
            item.id,
            format!("{} low stock, {} days left", item.name, days),
        ));
    }

    if item.needs_reorder() {
        out.push(InventoryAlert::new(
            AlertKind::Reorder,
            item.id,
            format!(
                "Reorder {} (current {} <= reorder {})",
                item.name, item.current_stock, item.reorder_level
            ),
        ));
    }

    if item.demand_sensitive && ctx.demand_surging() {
        out.push(InventoryAlert::new(
            AlertKind::DemandSpike,
            item.id,
            format!(
                "{} demand expected to increase due to poor AQI / rising admissions",
                item.name
            ),
        ));
    }

    if let (Some(shelf), Some(days_since)) = (item.shelf_life_days, item.days_since_restock(ctx.as_of)) {
        if days_since > i64::from(shelf) - ctx.expiry_margin_days {
            out.push(InventoryAlert::new(
                AlertKind::Expiry,
                item.id,
                format!(
                    "{} approaching expiry (restocked {} days ago)",
                    item.name, days_since
                ),
            ));
        }
    }

    out
}
