use crate::error::ForecastError;
use crate::profile::{BandProfile, CURVE_CENTRE, CURVE_FREQUENCY};
use aadhya_core::config::ForecastConfig;
use aadhya_core::rounding::round_count;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Bases above this would let bucket totals overflow `u64`.
const BASE_CEILING: f64 = 1e12;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BandBucket {
    pub p10: u64,
    pub p50: u64,
    pub p90: u64,
}

impl BandBucket {
    pub fn is_ordered(&self) -> bool {
        self.p10 <= self.p50 && self.p50 <= self.p90
    }
}

/// Low/median/high demand per upcoming bucket plus the panel analytics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastBand {
    pub buckets: Vec<BandBucket>,
    pub total_p50: u64,
    pub total_p90: u64,
    pub variability_pct: u64,
    pub peak_bucket_index: Option<usize>,
}

impl ForecastBand {
    /// Builds a band from configuration, validating it first.
    pub fn generate(
        baseline: f64,
        config: &ForecastConfig,
        profile: &BandProfile,
    ) -> Result<Self, ForecastError> {
        let bucket_count = config.validate().map_err(|e| {
            warn!("[forecast] rejected config {:?}: {}", config, e);
            e
        })?;
        Ok(Self::sample(
            baseline,
            bucket_count,
            config.variability_multiplier,
            profile,
        ))
    }

    fn sample(baseline: f64, bucket_count: usize, multiplier: f64, profile: &BandProfile) -> Self {
        let base = profile.base(baseline, multiplier, BASE_CEILING);
        let buckets: Vec<BandBucket> = (0..bucket_count)
            .map(|i| {
                let wave = CURVE_CENTRE + profile.amplitude() * (i as f64 * CURVE_FREQUENCY).cos();
                let p50 = round_count(base * wave).max(profile.p50_floor());
                BandBucket {
                    p10: round_count(p50 as f64 * profile.p10_ratio()),
                    p50,
                    p90: round_count(p50 as f64 * profile.p90_ratio()),
                }
            })
            .collect();
        Self::from_buckets(buckets)
    }

    /// Derives totals, variability and the peak from ready-made buckets.
    pub fn from_buckets(buckets: Vec<BandBucket>) -> Self {
        let total_p50: u64 = buckets.iter().map(|b| b.p50).sum();
        let total_p90: u64 = buckets.iter().map(|b| b.p90).sum();
        let variability_pct = if total_p50 == 0 {
            0
        } else {
            let spread = total_p90.saturating_sub(total_p50) as f64;
            round_count(spread / total_p50 as f64 * 100.0)
        };

        let mut peak_bucket_index = None;
        let mut peak = 0;
        for (i, b) in buckets.iter().enumerate() {
            if peak_bucket_index.is_none() || b.p50 > peak {
                peak = b.p50;
                peak_bucket_index = Some(i);
            }
        }

        debug!(
            "[forecast] {} buckets, p50 total {}, p90 total {}, variability {}%",
            buckets.len(),
            total_p50,
            total_p90,
            variability_pct
        );

        Self {
            buckets,
            total_p50,
            total_p90,
            variability_pct,
            peak_bucket_index,
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn p10(&self) -> Vec<u64> {
        self.buckets.iter().map(|b| b.p10).collect()
    }

    pub fn p50(&self) -> Vec<u64> {
        self.buckets.iter().map(|b| b.p50).collect()
    }

    pub fn p90(&self) -> Vec<u64> {
        self.buckets.iter().map(|b| b.p90).collect()
    }

    pub fn is_ordered(&self) -> bool {
        self.buckets.iter().all(BandBucket::is_ordered)
    }
}

/// Surge-panel band over `bucket_count` hourly buckets.
pub fn generate_forecast_band(
    baseline: f64,
    bucket_count: i64,
    variability_multiplier: f64,
) -> Result<ForecastBand, ForecastError> {
    let config = ForecastConfig {
        bucket_count,
        variability_multiplier,
    };
    ForecastBand::generate(baseline, &config, &BandProfile::surge_actions())
}
