use aadhya_core::rounding::ceil_count;
use log::debug;
use serde::{Deserialize, Serialize};

pub const PATIENTS_PER_NURSE: f64 = 8.0;
/// Nurses already rostered per unit.
pub const BASELINE_NURSES: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitForecast {
    pub unit: String,
    pub patient_forecast: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffingAction {
    pub unit: String,
    pub nurses_needed: u64,
    pub extra_nurses: u64,
    pub reason: String,
}

/// One action per unit whose forecast outgrows the baseline roster.
pub fn staffing_plan(units: &[UnitForecast]) -> Vec<StaffingAction> {
    let plan: Vec<_> = units
        .iter()
        .filter_map(|u| {
            let nurses_needed = ceil_count(u.patient_forecast / PATIENTS_PER_NURSE);
            (nurses_needed > BASELINE_NURSES).then(|| StaffingAction {
                unit: u.unit.clone(),
                nurses_needed,
                extra_nurses: nurses_needed - BASELINE_NURSES,
                reason: format!(
                    "Forecast {:.0} patients, need {} nurses",
                    u.patient_forecast, nurses_needed
                ),
            })
        })
        .collect();
    debug!("[staffing] {} of {} units need extra nurses", plan.len(), units.len());
    plan
}
