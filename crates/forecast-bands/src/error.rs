use aadhya_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("invalid forecast configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
