use aadhya_core::rounding::round_half_up;
use log::debug;
use serde::{Deserialize, Serialize};

/// Patients seen recently and predicted for the next four hours in one department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeptFlow {
    pub dept: String,
    pub recent: u32,
    pub predicted_next4h: u32,
}

/// How hard a department's load is about to climb, by absolute patient delta.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeptLevel {
    Stable,
    Watch,
    High,
    Critical,
}

impl DeptLevel {
    pub fn from_delta(delta: i64) -> Self {
        if delta > 25 {
            DeptLevel::Critical
        } else if delta > 12 {
            DeptLevel::High
        } else if delta > 5 {
            DeptLevel::Watch
        } else {
            DeptLevel::Stable
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeptLevel::Stable => "stable",
            DeptLevel::Watch => "watch",
            DeptLevel::High => "high",
            DeptLevel::Critical => "critical",
        }
    }

    pub fn suggestion(self) -> &'static str {
        match self {
            DeptLevel::Critical => "Add 2 nurses (4pm-10pm)",
            DeptLevel::High => "Increase 1 doctor coverage",
            DeptLevel::Watch => "Monitor trend closely",
            DeptLevel::Stable => "No immediate action",
        }
    }

    /// Levels that warrant an automated staffing change rather than monitoring.
    pub fn is_actionable(self) -> bool {
        matches!(self, DeptLevel::High | DeptLevel::Critical)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeptPrediction {
    pub dept: String,
    pub recent: u32,
    pub predicted_next4h: u32,
    pub delta: i64,
    /// Change relative to `recent`, which counts as at least one patient.
    pub delta_pct: i64,
    pub level: DeptLevel,
}

impl DeptPrediction {
    pub fn from_flow(flow: &DeptFlow) -> Self {
        let delta = i64::from(flow.predicted_next4h) - i64::from(flow.recent);
        let denominator = f64::from(flow.recent.max(1));
        let delta_pct = round_half_up(delta as f64 / denominator * 100.0) as i64;
        Self {
            dept: flow.dept.clone(),
            recent: flow.recent,
            predicted_next4h: flow.predicted_next4h,
            delta,
            delta_pct,
            level: DeptLevel::from_delta(delta),
        }
    }
}

pub fn predict_departments(flows: &[DeptFlow]) -> Vec<DeptPrediction> {
    let out: Vec<_> = flows.iter().map(DeptPrediction::from_flow).collect();
    debug!(
        "[departments] {} of {} departments need action",
        out.iter().filter(|p| p.level.is_actionable()).count(),
        out.len()
    );
    out
}
