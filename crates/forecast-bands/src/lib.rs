pub mod band;
pub mod error;
pub mod profile;
mod tests;

pub use band::{generate_forecast_band, BandBucket, ForecastBand};
pub use error::ForecastError;
pub use profile::{baseline_from_oxygen_extra, inflow_baseline, BandProfile};
