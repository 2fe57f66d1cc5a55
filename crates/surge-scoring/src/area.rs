use aadhya_core::rounding::round_half_up;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Stable,
    Improving,
}

/// Colour bucket the map and tiles use for an area score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            RiskTier::High
        } else if score > 40 {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaReading {
    pub id: String,
    pub label: String,
    pub pm25: Option<f64>,
    pub est_per_hr: f64,
    pub score: u8,
    pub trend: Trend,
}

impl AreaReading {
    pub fn tier(&self) -> RiskTier {
        RiskTier::from_score(self.score)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AreaSummary {
    pub expected_patients_per_hour: f64,
    pub avg_surge_score: u8,
    pub high_risk_areas: Vec<String>,
    pub trending: Vec<String>,
}

pub fn summarize_areas(areas: &[AreaReading]) -> AreaSummary {
    if areas.is_empty() {
        return AreaSummary::default();
    }
    let expected_patients_per_hour: f64 = areas.iter().map(|a| a.est_per_hr.max(0.0)).sum();
    let score_sum: f64 = areas.iter().map(|a| f64::from(a.score)).sum();
    let avg_surge_score = round_half_up(score_sum / areas.len() as f64).clamp(0.0, 100.0) as u8;

    let high_risk_areas = areas
        .iter()
        .filter(|a| a.tier() == RiskTier::High)
        .map(|a| a.id.clone())
        .collect();
    let trending = areas
        .iter()
        .filter(|a| a.trend == Trend::Rising)
        .map(|a| a.label.clone())
        .collect();

    debug!(
        "[areas] {} areas, {:.1} patients/hr expected, avg surge {}",
        areas.len(),
        expected_patients_per_hour,
        avg_surge_score
    );

    AreaSummary {
        expected_patients_per_hour,
        avg_surge_score,
        high_risk_areas,
        trending,
    }
}
