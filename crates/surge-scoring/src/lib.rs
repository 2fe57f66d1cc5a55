pub mod area;
pub mod score;
mod tests;

pub use area::{summarize_areas, AreaReading, AreaSummary, RiskTier, Trend};
pub use score::{compute_surge_score, pm25_band_contribution, PollutionReading};
