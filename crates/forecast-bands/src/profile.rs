use aadhya_core::rounding::round_half_up;
use serde::Serialize;

/// Shape of the synthetic demand curve.
///
/// Each bucket's median is `base * (0.55 + amplitude * cos(i * 0.9))`, floored
/// at `p50_floor`; the outer quantiles are fixed ratios of the median. The
/// ratios are kept at `p10_ratio <= 1 <= p90_ratio` so every bucket stays
/// ordered. Profiles only come from the constructors below; they can be
/// serialized for display but not read back.
///
/// A scaled profile rounds `baseline * variability_multiplier` into its base;
/// an unscaled one uses the baseline as given.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct BandProfile {
    amplitude: f64,
    p50_floor: u64,
    p10_ratio: f64,
    p90_ratio: f64,
    min_base: f64,
    scaled_base: bool,
}

pub(crate) const CURVE_CENTRE: f64 = 0.55;
pub(crate) const CURVE_FREQUENCY: f64 = 0.9;

impl BandProfile {
    /// Resource-driven surge panel. This is the default profile.
    pub fn surge_actions() -> Self {
        Self {
            amplitude: 0.12,
            p50_floor: 1,
            p10_ratio: 0.6,
            p90_ratio: 1.45,
            min_base: 6.0,
            scaled_base: true,
        }
    }

    /// Patient-inflow panel: wider swing, higher floor, slightly lower P10.
    /// The expected inflow feeds the curve directly, unaffected by the
    /// variability multiplier.
    pub fn inflow() -> Self {
        Self {
            amplitude: 0.18,
            p50_floor: 2,
            p10_ratio: 0.58,
            p90_ratio: 1.45,
            min_base: 0.0,
            scaled_base: false,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn p50_floor(&self) -> u64 {
        self.p50_floor
    }

    pub fn p10_ratio(&self) -> f64 {
        self.p10_ratio
    }

    pub fn p90_ratio(&self) -> f64 {
        self.p90_ratio
    }

    pub fn min_base(&self) -> f64 {
        self.min_base
    }

    pub fn scaled_base(&self) -> bool {
        self.scaled_base
    }

    /// Curve base for `baseline`, clamped to `[min_base, ceiling]`.
    pub(crate) fn base(&self, baseline: f64, multiplier: f64, ceiling: f64) -> f64 {
        let raw = if self.scaled_base {
            round_half_up(baseline * multiplier)
        } else {
            baseline
        };
        raw.max(self.min_base).min(ceiling)
    }
}

impl Default for BandProfile {
    fn default() -> Self {
        Self::surge_actions()
    }
}

/// Surge-panel baseline: six units of demand per extra oxygen cylinder,
/// assuming six cylinders when none are estimated.
pub fn baseline_from_oxygen_extra(oxygen_extra: u64) -> f64 {
    let cylinders = if oxygen_extra == 0 { 6 } else { oxygen_extra };
    cylinders as f64 * 6.0
}

/// Inflow-panel baseline; 40 patients/hr stands in for a missing or zero figure.
pub fn inflow_baseline(expected_patients: f64) -> f64 {
    if expected_patients == 0.0 || expected_patients.is_nan() {
        40.0
    } else {
        expected_patients
    }
}
