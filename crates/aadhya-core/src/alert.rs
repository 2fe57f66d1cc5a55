use serde::{Deserialize, Serialize};

/// Urgency attached to anything the dashboard surfaces as an alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Info,
    Action,
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Action => "action",
            AlertLevel::Warning => "warning",
            AlertLevel::Critical => "critical",
        }
    }
}
