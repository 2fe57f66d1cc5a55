#![cfg(test)]

use crate::area::{summarize_areas, AreaReading, RiskTier, Trend};
use crate::score::{compute_surge_score, pm25_band_contribution, PollutionReading};
use rand::Rng;

fn area(id: &str, est_per_hr: f64, score: u8, trend: Trend) -> AreaReading {
    AreaReading {
        id: id.into(),
        label: id.to_uppercase(),
        pm25: None,
        est_per_hr,
        score,
        trend,
    }
}

#[test]
fn pm25_bands_are_exclusive() {
    assert_eq!(compute_surge_score(Some(329.3), false, 0.0), 50);
    assert_eq!(compute_surge_score(Some(299.2), false, 0.0), 35);
    assert_eq!(compute_surge_score(Some(150.0), false, 0.0), 20);
    assert_eq!(compute_surge_score(Some(119.3), false, 0.0), 10);
    assert_eq!(compute_surge_score(Some(97.2), false, 0.0), 0);
}

#[test]
fn missing_pm25_uses_default_baseline() {
    assert_eq!(compute_surge_score(None, false, 0.0), 0);
    assert_eq!(compute_surge_score(None, true, 6.0), 18);
    let reading = PollutionReading {
        pm25: Some(250.0),
        festival_flag: true,
        temperature_delta: 5.0,
    };
    assert_eq!(reading.surge_score(), 53);
}

#[test]
fn score_is_bounded_and_monotone() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let pm: f64 = rng.gen_range(-50.0..600.0);
        let delta: f64 = rng.gen_range(-10.0..15.0);
        let base = compute_surge_score(Some(pm), false, delta);
        assert!(base <= 100);
        assert!(compute_surge_score(Some(pm), true, delta) >= base);
        assert!(compute_surge_score(Some(pm + 60.0), false, delta) >= base);
        assert!(compute_surge_score(Some(pm), false, delta.max(5.0)) >= base);
        if pm < 100.0 {
            assert_eq!(pm25_band_contribution(pm), 0.0);
        }
        if pm >= 300.0 {
            assert_eq!(pm25_band_contribution(pm), 50.0);
        }
    }
}

#[test]
fn reading_round_trips_through_json() {
    let reading: PollutionReading = serde_json::from_str(r#"{ "pm25": null }"#).unwrap();
    assert_eq!(reading.pm25, None);
    assert!(!reading.festival_flag);
    let json = serde_json::to_string(&reading).unwrap();
    assert_eq!(serde_json::from_str::<PollutionReading>(&json).unwrap(), reading);
}

#[test]
fn area_summary_aggregates() {
    let areas = vec![
        area("mumbai", 58.0, 94, Trend::Rising),
        area("thane", 57.0, 89, Trend::Rising),
        area("bandra", 38.0, 26, Trend::Stable),
        area("vashi", 37.0, 23, Trend::Stable),
        area("kalyan", 36.0, 19, Trend::Improving),
    ];
    let summary = summarize_areas(&areas);
    assert_eq!(summary.expected_patients_per_hour, 226.0);
    // (94 + 89 + 26 + 23 + 19) / 5 = 50.2
    assert_eq!(summary.avg_surge_score, 50);
    assert_eq!(summary.high_risk_areas, vec!["mumbai", "thane"]);
    assert_eq!(summary.trending, vec!["MUMBAI", "THANE"]);
}

#[test]
fn empty_areas_summarize_to_zero() {
    let summary = summarize_areas(&[]);
    assert_eq!(summary.avg_surge_score, 0);
    assert!(summary.high_risk_areas.is_empty());
}

#[test]
fn risk_tiers_split_at_40_and_70() {
    assert_eq!(RiskTier::from_score(70), RiskTier::Moderate);
    assert_eq!(RiskTier::from_score(71), RiskTier::High);
    assert_eq!(RiskTier::from_score(40), RiskTier::Low);
    assert_eq!(RiskTier::from_score(41), RiskTier::Moderate);
}
