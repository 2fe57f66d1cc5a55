pub mod escalation;
pub mod metrics;
mod tests;

pub use escalation::flag_if_escalating;
pub use metrics::OpsMetrics;
