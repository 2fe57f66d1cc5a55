use crate::alert::{derive_alerts, AlertKind, InventoryAlert};
use crate::item::{InventoryItem, PatientFlowPoint};
use aadhya_core::config::{
    InventoryConfig, DEFAULT_EXPIRY_MARGIN_DAYS, DEFAULT_SPIKE_THRESHOLD, DEFAULT_USAGE_EPSILON,
};
use aadhya_core::jitter::JitterSource;
use aadhya_core::rounding::round_count;
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Everything besides the items themselves that alert rules look at.
#[derive(Debug, Clone)]
pub struct RiskContext<'a> {
    pub as_of: NaiveDate,
    pub patient_flow: &'a [PatientFlowPoint],
    pub spike_threshold: f64,
    pub expiry_margin_days: i64,
    pub usage_epsilon: f64,
}

impl<'a> RiskContext<'a> {
    pub fn new(as_of: NaiveDate, patient_flow: &'a [PatientFlowPoint]) -> Self {
        Self {
            as_of,
            patient_flow,
            spike_threshold: DEFAULT_SPIKE_THRESHOLD,
            expiry_margin_days: DEFAULT_EXPIRY_MARGIN_DAYS,
            usage_epsilon: DEFAULT_USAGE_EPSILON,
        }
    }

    pub fn from_config(
        as_of: NaiveDate,
        patient_flow: &'a [PatientFlowPoint],
        config: &InventoryConfig,
    ) -> Self {
        Self {
            as_of,
            patient_flow,
            spike_threshold: config.spike_threshold,
            expiry_margin_days: config.expiry_margin_days,
            usage_epsilon: config.usage_epsilon,
        }
    }

    /// True when any day in the feed predicts demand above the spike threshold.
    pub fn demand_surging(&self) -> bool {
        self.patient_flow
            .iter()
            .any(|p| p.predicted_demand > self.spike_threshold)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemForecast {
    pub item_id: u32,
    pub item_name: String,
    pub next_day_demand: u64,
    pub three_day_demand: u64,
    /// `None` when the item has no recorded usage.
    pub stock_days_remaining: Option<u64>,
    pub risk_hours: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryRisk {
    pub forecast: Vec<ItemForecast>,
    pub alerts: Vec<InventoryAlert>,
}

impl InventoryRisk {
    pub fn alerts_for(&self, item_id: u32) -> impl Iterator<Item = &InventoryAlert> {
        self.alerts.iter().filter(move |a| a.item_id == item_id)
    }

    pub fn count(&self, kind: AlertKind) -> usize {
        self.alerts.iter().filter(|a| a.kind == kind).count()
    }
}

/// Scales usage by the latest predicted demand relative to `baseline`.
/// An empty feed, or a latest prediction of zero, leaves usage unscaled.
pub fn demand_factor_from_flow(flow: &[PatientFlowPoint], baseline: f64) -> f64 {
    if !(baseline.is_finite() && baseline > 0.0) {
        return 1.0;
    }
    let latest = flow
        .last()
        .map(|p| p.predicted_demand)
        .filter(|d| d.is_finite() && *d != 0.0)
        .unwrap_or(baseline);
    latest / baseline
}

pub fn forecast_item(
    item: &InventoryItem,
    demand_factor: f64,
    ctx: &RiskContext<'_>,
    jitter: &mut dyn JitterSource,
) -> ItemForecast {
    let usage = item.usage();
    let stock = f64::from(item.current_stock);

    let next_day_demand = round_count(usage * demand_factor);
    let three_day_demand = round_count(next_day_demand as f64 * jitter.next_jitter() * 3.0);
    let stock_days_remaining = (usage > 0.0).then(|| (stock / usage).floor() as u64);
    let risk_hours = round_count(stock / usage.max(ctx.usage_epsilon) * 24.0);

    ItemForecast {
        item_id: item.id,
        item_name: item.name.clone(),
        next_day_demand,
        three_day_demand,
        stock_days_remaining,
        risk_hours,
    }
}

/// Demand forecast and alerts for every item, in input order.
pub fn compute_inventory_risk(
    items: &[InventoryItem],
    demand_factor: f64,
    ctx: &RiskContext<'_>,
    jitter: &mut dyn JitterSource,
) -> InventoryRisk {
    let mut risk = InventoryRisk::default();
    for item in items {
        let forecast = forecast_item(item, demand_factor, ctx, jitter);
        let alerts = derive_alerts(item, &forecast, ctx);
        debug!(
            "[inventory] {}: next day {}, stock days {:?}, {} alerts",
            item.name,
            forecast.next_day_demand,
            forecast.stock_days_remaining,
            alerts.len()
        );
        for alert in alerts.iter().filter(|a| a.kind == AlertKind::Stockout) {
            warn!("[inventory] {}: {}", alert.kind.label(), alert.message);
        }
        risk.forecast.push(forecast);
        risk.alerts.extend(alerts);
    }
    risk
}
