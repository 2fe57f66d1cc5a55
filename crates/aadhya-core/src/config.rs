use crate::error::ConfigError;
use crate::jitter::{FixedJitter, JitterSource, SeededJitter};
use log::warn;
use serde::{Deserialize, Serialize};

/// Default number of forecast buckets (one per upcoming hour).
pub const DEFAULT_BUCKET_COUNT: i64 = 6;
/// Upper bound on forecast buckets: one per hour for a week.
pub const MAX_BUCKET_COUNT: i64 = 168;
/// Predicted patient demand above which demand-sensitive items spike.
pub const DEFAULT_SPIKE_THRESHOLD: f64 = 70.0;
/// Predicted demand treated as "normal load" when deriving a demand factor.
pub const DEFAULT_FLOW_BASELINE: f64 = 60.0;
/// Days before the end of shelf life at which an expiry alert fires.
pub const DEFAULT_EXPIRY_MARGIN_DAYS: i64 = 30;
/// Substituted for zero usage when converting stock into hours of cover.
pub const DEFAULT_USAGE_EPSILON: f64 = 0.00001;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ForecastConfig {
    pub bucket_count: i64,
    pub variability_multiplier: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            variability_multiplier: 1.0,
        }
    }
}

impl ForecastConfig {
    /// Checks the knobs and returns the bucket count as a length.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        if self.bucket_count < 0 {
            return Err(ConfigError::InvalidBucketCount(self.bucket_count));
        }
        if self.bucket_count > MAX_BUCKET_COUNT {
            return Err(ConfigError::TooManyBuckets {
                count: self.bucket_count,
                max: MAX_BUCKET_COUNT,
            });
        }
        if !self.variability_multiplier.is_finite() {
            return Err(ConfigError::NonFiniteMultiplier(self.variability_multiplier));
        }
        usize::try_from(self.bucket_count)
            .map_err(|_| ConfigError::InvalidBucketCount(self.bucket_count))
    }
}

/// Where the three-day demand inflation factor comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum JitterConfig {
    Fixed(f64),
    Seeded(u64),
    Entropy,
}

impl Default for JitterConfig {
    fn default() -> Self {
        JitterConfig::Entropy
    }
}

impl JitterConfig {
    pub fn build(&self) -> Result<Box<dyn JitterSource>, ConfigError> {
        Ok(match *self {
            JitterConfig::Fixed(v) => Box::new(FixedJitter::new(v)?),
            JitterConfig::Seeded(seed) => Box::new(SeededJitter::from_seed_u64(seed)),
            JitterConfig::Entropy => Box::new(SeededJitter::from_entropy()),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InventoryConfig {
    pub spike_threshold: f64,
    pub flow_baseline: f64,
    pub expiry_margin_days: i64,
    pub usage_epsilon: f64,
    pub jitter: JitterConfig,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            spike_threshold: DEFAULT_SPIKE_THRESHOLD,
            flow_baseline: DEFAULT_FLOW_BASELINE,
            expiry_margin_days: DEFAULT_EXPIRY_MARGIN_DAYS,
            usage_epsilon: DEFAULT_USAGE_EPSILON,
            jitter: JitterConfig::default(),
        }
    }
}

impl InventoryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("flow_baseline", self.flow_baseline),
            ("usage_epsilon", self.usage_epsilon),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if let JitterConfig::Fixed(v) = self.jitter {
            FixedJitter::new(v)?;
        }
        Ok(())
    }
}

/// What-if toggles applied to every area's pollution reading.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurgeConfig {
    pub festival: bool,
    pub temperature_delta: f64,
}

/// Top-level knobs for a dashboard refresh.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OpsConfig {
    pub surge: SurgeConfig,
    pub forecast: ForecastConfig,
    pub inventory: InventoryConfig,
}

impl OpsConfig {
    /// Parses a JSON document; absent fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: OpsConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checked = self
            .forecast
            .validate()
            .map(|_| ())
            .and_then(|_| self.inventory.validate());
        if let Err(ref e) = checked {
            warn!("[config] rejected: {}", e);
        }
        checked
    }
}
