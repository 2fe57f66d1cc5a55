use aadhya_core::rounding::round_half_up;
use serde::{Deserialize, Serialize};

/// Substituted when an area has no PM2.5 reading.
pub const PM25_DEFAULT: f64 = 50.0;
pub const FESTIVAL_BONUS: f64 = 10.0;
pub const HEAT_BONUS: f64 = 8.0;
/// Temperature rise (°C over seasonal norm) that triggers the heat bonus.
pub const HEAT_DELTA_MIN: f64 = 5.0;

/// Highest band first; the first band the reading reaches wins.
const PM25_BANDS: [(f64, f64); 4] = [(300.0, 50.0), (200.0, 35.0), (150.0, 20.0), (100.0, 10.0)];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PollutionReading {
    pub pm25: Option<f64>,
    #[serde(default)]
    pub festival_flag: bool,
    #[serde(default)]
    pub temperature_delta: f64,
}

impl PollutionReading {
    pub fn surge_score(&self) -> u8 {
        compute_surge_score(self.pm25, self.festival_flag, self.temperature_delta)
    }
}

pub fn pm25_band_contribution(pm25: f64) -> f64 {
    PM25_BANDS
        .iter()
        .find(|(floor, _)| pm25 >= *floor)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

/// Admission-surge risk in `[0, 100]` from air quality and context flags.
pub fn compute_surge_score(pm25: Option<f64>, festival: bool, temp_delta: f64) -> u8 {
    let mut score = pm25_band_contribution(pm25.unwrap_or(PM25_DEFAULT));
    if festival {
        score += FESTIVAL_BONUS;
    }
    if temp_delta >= HEAT_DELTA_MIN {
        score += HEAT_BONUS;
    }
    round_half_up(score).clamp(0.0, 100.0) as u8
}
