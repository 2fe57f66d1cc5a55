use aadhya_core::rounding::ceil_count;
use serde::{Deserialize, Serialize};

/// Patients per hour the hospital absorbs without extra provisioning.
pub const BASELINE_PATIENTS_PER_HOUR: f64 = 30.0;

// Extra patients per hour covered by one unit of each resource.
const PATIENTS_PER_OXYGEN_CYLINDER: f64 = 10.0;
const PATIENTS_PER_NEBULIZER_KIT: f64 = 8.0;
const PATIENTS_PER_IV_BAG: f64 = 6.0;
const PATIENTS_PER_STAFF: f64 = 12.0;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceEstimate {
    pub oxygen_extra: u64,
    pub nebulizer_kits: u64,
    pub iv_fluids: u64,
    pub staff_extra: u64,
}

impl ResourceEstimate {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Provisioning needed above baseline for an expected hourly inflow.
pub fn estimate_resources(expected_patients_per_hour: f64) -> ResourceEstimate {
    let extra = (expected_patients_per_hour - BASELINE_PATIENTS_PER_HOUR).max(0.0);
    ResourceEstimate {
        oxygen_extra: ceil_count(extra / PATIENTS_PER_OXYGEN_CYLINDER),
        nebulizer_kits: ceil_count(extra / PATIENTS_PER_NEBULIZER_KIT),
        iv_fluids: ceil_count(extra / PATIENTS_PER_IV_BAG),
        staff_extra: ceil_count(extra / PATIENTS_PER_STAFF),
    }
}
