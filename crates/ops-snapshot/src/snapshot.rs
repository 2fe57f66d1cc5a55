use crate::source::OpsDataSource;
use aadhya_core::config::OpsConfig;
use aadhya_core::jitter::JitterSource;
use aadhya_core::ConfigError;
use chrono::{NaiveDate, Utc};
use forecast_bands::{
    baseline_from_oxygen_extra, inflow_baseline, BandProfile, ForecastBand, ForecastError,
};
use inventory_risk::{
    compute_inventory_risk, demand_factor_from_flow, suggest_purchase_orders, InventoryRisk,
    InventorySummary, PurchaseOrder, RiskContext,
};
use log::{info, warn};
use resource_estimator::{
    estimate_resources, predict_departments, staffing_plan, BedTotals, DeptPrediction,
    ResourceEstimate, StaffingAction, UnitForecast,
};
use serde::{Deserialize, Serialize};
use surge_scoring::{compute_surge_score, summarize_areas, AreaSummary};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

/// Surge score recomputed from an area's PM2.5 reading and the what-if toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AreaScore {
    pub area_id: String,
    pub reported_score: u8,
    pub pollution_score: u8,
}

/// Everything the admin, inventory and medical-ops views render for one refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpsSnapshot {
    pub date: NaiveDate,
    pub areas: AreaSummary,
    pub area_scores: Vec<AreaScore>,
    pub resources: ResourceEstimate,
    pub beds: BedTotals,
    pub oxygen_extra: u64,
    pub surge_band: ForecastBand,
    pub inflow_band: ForecastBand,
    pub demand_factor: f64,
    pub inventory: InventoryRisk,
    pub inventory_summary: InventorySummary,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub staffing: Vec<StaffingAction>,
    pub departments: Vec<DeptPrediction>,
}

fn or_empty<T>(what: &str, fetched: anyhow::Result<Vec<T>>) -> Vec<T> {
    fetched.unwrap_or_else(|e| {
        warn!("[snapshot] {} unavailable, continuing with none: {:#}", what, e);
        Vec::new()
    })
}

impl OpsSnapshot {
    /// Reads every record from `source` and derives the full set of figures.
    ///
    /// A failing source call degrades to an empty list; only invalid
    /// configuration is an error.
    pub fn collect(
        source: &dyn OpsDataSource,
        config: &OpsConfig,
        as_of: NaiveDate,
        jitter: &mut dyn JitterSource,
    ) -> Result<Self, SnapshotError> {
        config.validate()?;

        let areas = or_empty("areas", source.areas());
        let wards = or_empty("wards", source.wards());
        let items = or_empty("inventory", source.inventory());
        let flow = or_empty("patient flow", source.patient_flow());
        let dept_flow = or_empty("departments", source.departments());

        let area_summary = summarize_areas(&areas);
        let area_scores = areas
            .iter()
            .map(|a| AreaScore {
                area_id: a.id.clone(),
                reported_score: a.score,
                pollution_score: compute_surge_score(
                    a.pm25,
                    config.surge.festival,
                    config.surge.temperature_delta,
                ),
            })
            .collect();

        let resources = estimate_resources(area_summary.expected_patients_per_hour);
        let beds = BedTotals::from_wards(&wards);
        let oxygen_extra = beds.oxygen_extra_from_icu();

        let surge_band = ForecastBand::generate(
            baseline_from_oxygen_extra(oxygen_extra),
            &config.forecast,
            &BandProfile::surge_actions(),
        )?;
        let inflow_band = ForecastBand::generate(
            inflow_baseline(area_summary.expected_patients_per_hour),
            &config.forecast,
            &BandProfile::inflow(),
        )?;

        let demand_factor = demand_factor_from_flow(&flow, config.inventory.flow_baseline);
        let ctx = RiskContext::from_config(as_of, &flow, &config.inventory);
        let inventory = compute_inventory_risk(&items, demand_factor, &ctx, jitter);
        let inventory_summary = InventorySummary::from_items(&items);
        let purchase_orders = suggest_purchase_orders(&items, as_of);

        let units: Vec<UnitForecast> = areas
            .iter()
            .map(|a| UnitForecast {
                unit: a.label.clone(),
                patient_forecast: a.est_per_hr,
            })
            .collect();
        let staffing = staffing_plan(&units);
        let departments = predict_departments(&dept_flow);

        info!(
            "[snapshot] {}: {} areas, {:.0} patients/hr, {} inventory alerts, {} purchase orders",
            as_of,
            areas.len(),
            area_summary.expected_patients_per_hour,
            inventory.alerts.len(),
            purchase_orders.len()
        );

        Ok(Self {
            date: as_of,
            areas: area_summary,
            area_scores,
            resources,
            beds,
            oxygen_extra,
            surge_band,
            inflow_band,
            demand_factor,
            inventory,
            inventory_summary,
            purchase_orders,
            staffing,
            departments,
        })
    }

    /// [`OpsSnapshot::collect`] for today's UTC date, with the jitter source
    /// the configuration names.
    pub fn collect_today(
        source: &dyn OpsDataSource,
        config: &OpsConfig,
    ) -> Result<Self, SnapshotError> {
        let mut jitter = config.inventory.jitter.build()?;
        Self::collect(source, config, Utc::now().date_naive(), jitter.as_mut())
    }
}
