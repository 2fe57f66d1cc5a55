use crate::OpsMetrics;
use aadhya_core::alert::AlertLevel;
use log::warn;
use ops_snapshot::OpsSnapshot;

fn critical_alerts(snap: &OpsSnapshot) -> usize {
    snap.inventory
        .alerts
        .iter()
        .filter(|a| a.level == AlertLevel::Critical)
        .count()
}

/// Records `after` and reports whether it is worse than `before`: more
/// critical inventory alerts or a higher average surge score.
pub fn flag_if_escalating(metrics: &OpsMetrics, before: &OpsSnapshot, after: &OpsSnapshot) -> bool {
    metrics.observe_snapshot(after);
    let critical_before = critical_alerts(before);
    let critical_after = critical_alerts(after);
    let escalating = critical_after > critical_before
        || after.areas.avg_surge_score > before.areas.avg_surge_score;
    if escalating {
        warn!(
            "[escalation] critical alerts {} -> {}, avg surge {} -> {}",
            critical_before,
            critical_after,
            before.areas.avg_surge_score,
            after.areas.avg_surge_score
        );
    }
    escalating
}
