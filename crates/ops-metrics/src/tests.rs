#![cfg(test)]

use crate::escalation::flag_if_escalating;
use crate::metrics::OpsMetrics;
use aadhya_core::{FixedJitter, OpsConfig};
use chrono::NaiveDate;
use ops_snapshot::{FixtureSource, OpsSnapshot};

fn snapshot_of(source: &FixtureSource) -> OpsSnapshot {
    let as_of = NaiveDate::from_ymd_opt(2025, 11, 28).unwrap();
    OpsSnapshot::collect(source, &OpsConfig::default(), as_of, &mut FixedJitter::neutral()).unwrap()
}

#[test]
fn snapshot_populates_gauges() {
    let metrics = OpsMetrics::new().unwrap();
    let snap = snapshot_of(&FixtureSource::dashboard().unwrap());
    metrics.observe_snapshot(&snap);

    assert_eq!(metrics.area_surge_score.with_label_values(&["mumbai"]).get(), 50.0);
    assert_eq!(metrics.expected_patients_per_hour.get(), 226.0);
    assert_eq!(metrics.resource_extra.with_label_values(&["oxygen"]).get(), 20.0);
    assert_eq!(
        metrics
            .forecast_band_total
            .with_label_values(&["surge", "p50"])
            .get(),
        37.0
    );
    assert_eq!(metrics.inventory_alerts.with_label_values(&["reorder", "action"]).get(), 1.0);
    assert_eq!(metrics.inventory_alerts.with_label_values(&["stockout", "critical"]).get(), 0.0);
    assert_eq!(
        metrics
            .inventory_stock_days
            .with_label_values(&["Nebulizer kits"])
            .get(),
        12.0
    );

    assert_eq!(
        metrics
            .department_delta
            .with_label_values(&["Emergency", "high"])
            .get(),
        23.0
    );
    assert_eq!(
        metrics
            .department_delta
            .with_label_values(&["Cardiology", "watch"])
            .get(),
        6.0
    );

    let text = metrics.render().unwrap();
    assert!(text.contains("aadhya_area_surge_score"));
    assert!(text.contains("aadhya_forecast_variability_pct"));
    assert!(text.contains(r#"aadhya_inventory_alerts{kind="demand_spike",level="info"} 1"#));
}

#[test]
fn registries_are_independent() {
    let a = OpsMetrics::new().unwrap();
    let b = OpsMetrics::new().unwrap();
    a.expected_patients_per_hour.set(5.0);
    assert_eq!(b.expected_patients_per_hour.get(), 0.0);
    assert!(!a.registry().gather().is_empty());
}

#[test]
fn stockout_counts_as_escalation() {
    let metrics = OpsMetrics::new().unwrap();
    let source = FixtureSource::dashboard().unwrap();
    let before = snapshot_of(&source);

    let mut drained = source.clone();
    drained.inventory[0].current_stock = 2;
    let after = snapshot_of(&drained);

    assert!(flag_if_escalating(&metrics, &before, &after));
    assert_eq!(metrics.inventory_alerts.with_label_values(&["stockout", "critical"]).get(), 1.0);
    assert!(!flag_if_escalating(&metrics, &after, &before));
    assert!(!flag_if_escalating(&metrics, &before, &before));
}
