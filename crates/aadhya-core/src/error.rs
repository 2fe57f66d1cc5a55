use thiserror::Error;

/// Rejections raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bucket count must be non-negative, got {0}")]
    InvalidBucketCount(i64),
    #[error("bucket count {count} exceeds the maximum of {max}")]
    TooManyBuckets { count: i64, max: i64 },
    #[error("variability multiplier must be finite, got {0}")]
    NonFiniteMultiplier(f64),
    #[error("jitter {0} outside [1.0, 1.18)")]
    JitterOutOfRange(f64),
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
