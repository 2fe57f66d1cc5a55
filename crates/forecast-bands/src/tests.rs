#![cfg(test)]

use crate::band::{generate_forecast_band, BandBucket, ForecastBand};
use crate::error::ForecastError;
use crate::profile::{baseline_from_oxygen_extra, inflow_baseline, BandProfile};
use aadhya_core::{ConfigError, ForecastConfig};
use rand::Rng;

#[test]
fn reference_band_for_six_cylinders() {
    let band = generate_forecast_band(baseline_from_oxygen_extra(6), 6, 1.0).unwrap();
    assert_eq!(band.p50(), vec![24, 22, 19, 16, 16, 19]);
    assert_eq!(band.p10(), vec![14, 13, 11, 10, 10, 11]);
    assert_eq!(band.p90(), vec![35, 32, 28, 23, 23, 28]);
    assert_eq!(band.total_p50, 116);
    assert_eq!(band.total_p90, 169);
    assert_eq!(band.variability_pct, 46);
    assert_eq!(band.peak_bucket_index, Some(0));
}

#[test]
fn multiplier_scales_the_base() {
    // round(12 * 1.5) = 18
    let band = generate_forecast_band(12.0, 6, 1.5).unwrap();
    assert_eq!(band.p50(), vec![12, 11, 9, 8, 8, 9]);
    assert_eq!(band.total_p90, 83);
}

#[test]
fn negative_baseline_is_floored_to_minimum_base() {
    let band = generate_forecast_band(-10.0, 6, 1.0).unwrap();
    assert_eq!(band.p50(), vec![4, 4, 3, 3, 3, 3]);
    assert!(band.is_ordered());
    assert_eq!(band.variability_pct, 40);
}

#[test]
fn zero_buckets_give_an_empty_band() {
    let band = generate_forecast_band(100.0, 0, 1.0).unwrap();
    assert!(band.is_empty());
    assert_eq!(band.total_p50, 0);
    assert_eq!(band.total_p90, 0);
    assert_eq!(band.variability_pct, 0);
    assert_eq!(band.peak_bucket_index, None);
}

#[test]
fn invalid_config_fails_fast() {
    assert!(matches!(
        generate_forecast_band(100.0, -1, 1.0),
        Err(ForecastError::InvalidConfig(ConfigError::InvalidBucketCount(-1)))
    ));
    assert!(matches!(
        generate_forecast_band(100.0, 169, 1.0),
        Err(ForecastError::InvalidConfig(ConfigError::TooManyBuckets { count: 169, .. }))
    ));
    assert!(matches!(
        generate_forecast_band(100.0, 6, f64::INFINITY),
        Err(ForecastError::InvalidConfig(ConfigError::NonFiniteMultiplier(_)))
    ));
}

#[test]
fn bands_are_always_ordered() {
    let mut rng = rand::thread_rng();
    for _ in 0..300 {
        let baseline: f64 = rng.gen_range(-100.0..5000.0);
        let buckets: i64 = rng.gen_range(0..48);
        let multiplier: f64 = rng.gen_range(0.0..3.0);
        let band = generate_forecast_band(baseline, buckets, multiplier).unwrap();

        assert_eq!(band.len(), buckets as usize);
        assert!(band.is_ordered());
        assert!(band.total_p50 <= band.total_p90);
        assert!(band.buckets.iter().all(|b| b.p50 >= 1));

        let p50 = band.p50();
        if let Some(peak) = band.peak_bucket_index {
            let max = *p50.iter().max().unwrap();
            assert_eq!(p50[peak], max);
            assert!(p50[..peak].iter().all(|v| *v < max));
        }
    }
}

#[test]
fn peak_takes_first_of_equal_maxima() {
    let bucket = |p50| BandBucket {
        p10: 0,
        p50,
        p90: p50,
    };
    let band = ForecastBand::from_buckets(vec![bucket(3), bucket(7), bucket(7), bucket(2)]);
    assert_eq!(band.peak_bucket_index, Some(1));
}

#[test]
fn inflow_profile_matches_panel() {
    let config = ForecastConfig::default();
    let band = ForecastBand::generate(inflow_baseline(0.0), &config, &BandProfile::inflow()).unwrap();
    assert_eq!(band.p50(), vec![29, 26, 20, 15, 16, 20]);
    assert_eq!(band.p10(), vec![17, 15, 12, 9, 9, 12]);
    assert_eq!(band.total_p50, 126);
    assert_eq!(band.total_p90, 183);
    assert!(band.buckets.iter().all(|b| b.p50 >= 2));
}

#[test]
fn inflow_base_is_neither_rounded_nor_scaled() {
    // 37.5 * 0.73 = 27.375; rounding the base first would give 28
    let expected = vec![27, 25, 19, 15, 15, 19];
    for multiplier in [1.0, 1.5, 0.2] {
        let config = ForecastConfig {
            bucket_count: 6,
            variability_multiplier: multiplier,
        };
        let band = ForecastBand::generate(37.5, &config, &BandProfile::inflow()).unwrap();
        assert_eq!(band.p50(), expected);
        assert_eq!(band.p10(), vec![16, 14, 11, 9, 9, 11]);
        assert_eq!(band.total_p50, 120);
        assert_eq!(band.total_p90, 175);
    }
    assert!(!BandProfile::inflow().scaled_base());
    assert!(BandProfile::surge_actions().scaled_base());
}

#[test]
fn profile_serializes_for_display() {
    let json = serde_json::to_value(BandProfile::inflow()).unwrap();
    assert_eq!(json["p90_ratio"], 1.45);
    assert_eq!(json["scaled_base"], false);
}

#[test]
fn generation_is_idempotent() {
    let a = generate_forecast_band(77.0, 8, 1.2).unwrap();
    let b = generate_forecast_band(77.0, 8, 1.2).unwrap();
    assert_eq!(a, b);
}

#[test]
fn band_survives_json_transport() {
    let band = generate_forecast_band(100.0, 6, 1.0).unwrap();
    let json = serde_json::to_string(&band).unwrap();
    let back: ForecastBand = serde_json::from_str(&json).unwrap();
    assert_eq!(back, band);
    assert!(back.is_ordered());
    assert_eq!(back.p50(), vec![67, 62, 52, 44, 44, 52]);
}

#[test]
fn oxygen_baseline_defaults_to_six_cylinders() {
    assert_eq!(baseline_from_oxygen_extra(0), 36.0);
    assert_eq!(baseline_from_oxygen_extra(2), 12.0);
    assert_eq!(inflow_baseline(f64::NAN), 40.0);
    assert_eq!(inflow_baseline(226.0), 226.0);
}
