use aadhya_core::rounding::{ceil_count, round_count};
use serde::{Deserialize, Serialize};

const ICU_PATIENTS_PER_EXTRA_CYLINDER: f64 = 6.0;
const OXYGEN_LITRES_PER_OCCUPIED_BED: f64 = 4.7;
const VENTILATOR_SHARE_OF_ICU: f64 = 0.35;
const VENTILATOR_SPREAD_MAX: f64 = 2.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WardOccupancy {
    pub ward_name: String,
    pub total_beds: u32,
    pub occupied_beds: u32,
    #[serde(default)]
    pub icu_beds: u32,
    #[serde(default)]
    pub occupied_icu_beds: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BedTotals {
    pub total: u64,
    pub occupied: u64,
    pub icu: u64,
    pub occupied_icu: u64,
}

impl BedTotals {
    pub fn from_wards(wards: &[WardOccupancy]) -> Self {
        wards.iter().fold(Self::default(), |acc, w| Self {
            total: acc.total + u64::from(w.total_beds),
            occupied: acc.occupied + u64::from(w.occupied_beds),
            icu: acc.icu + u64::from(w.icu_beds),
            occupied_icu: acc.occupied_icu + u64::from(w.occupied_icu_beds),
        })
    }

    /// Extra oxygen cylinders implied by current ICU load.
    pub fn oxygen_extra_from_icu(&self) -> u64 {
        ceil_count(self.occupied_icu as f64 / ICU_PATIENTS_PER_EXTRA_CYLINDER)
    }

    pub fn oxygen_litres_per_day(&self) -> u64 {
        ceil_count(self.occupied as f64 * OXYGEN_LITRES_PER_OCCUPIED_BED)
    }

    /// `spread` widens the estimate for admissions in flight; clamped to `[0, 2]`.
    pub fn ventilator_need(&self, spread: f64) -> u64 {
        let spread = if spread.is_finite() {
            spread.clamp(0.0, VENTILATOR_SPREAD_MAX)
        } else {
            0.0
        };
        ceil_count(self.occupied_icu as f64 * VENTILATOR_SHARE_OF_ICU + spread)
    }

    /// Daily ICU occupancy projection, never above ICU capacity.
    pub fn icu_forecast(&self, days: usize) -> Vec<u64> {
        let base = if self.occupied_icu == 0 { 2 } else { self.occupied_icu };
        let cap = self.icu.max(1);
        (0..days)
            .map(|i| {
                let i = i as f64;
                let projected = base as f64 + (i / 2.0).sin() * 1.2 + i * 0.4;
                round_count(projected).min(cap)
            })
            .collect()
    }
}
