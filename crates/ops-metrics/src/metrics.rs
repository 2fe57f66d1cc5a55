use inventory_risk::AlertKind;
use ops_snapshot::OpsSnapshot;
use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};

pub struct OpsMetrics {
    registry: Registry,
    pub area_surge_score: GaugeVec,
    pub expected_patients_per_hour: Gauge,
    pub resource_extra: GaugeVec,
    pub forecast_band_total: GaugeVec,
    pub forecast_variability_pct: GaugeVec,
    pub inventory_alerts: GaugeVec,
    pub inventory_stock_days: GaugeVec,
    pub department_delta: GaugeVec,
}

impl OpsMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let area_surge_score = GaugeVec::new(
            Opts::new("aadhya_area_surge_score", "Pollution-driven surge score per area"),
            &["area"],
        )?;
        let expected_patients_per_hour = Gauge::new(
            "aadhya_expected_patients_per_hour",
            "Expected patient inflow across all areas",
        )?;
        let resource_extra = GaugeVec::new(
            Opts::new("aadhya_resource_extra", "Provisioning needed above baseline"),
            &["resource"],
        )?;
        let forecast_band_total = GaugeVec::new(
            Opts::new("aadhya_forecast_band_total", "Summed forecast band quantile"),
            &["band", "quantile"],
        )?;
        let forecast_variability_pct = GaugeVec::new(
            Opts::new("aadhya_forecast_variability_pct", "P90 over P50 spread in percent"),
            &["band"],
        )?;
        let inventory_alerts = GaugeVec::new(
            Opts::new("aadhya_inventory_alerts", "Open inventory alerts by kind"),
            &["kind", "level"],
        )?;
        let inventory_stock_days = GaugeVec::new(
            Opts::new("aadhya_inventory_stock_days", "Whole days of stock at current usage"),
            &["item"],
        )?;
        let department_delta = GaugeVec::new(
            Opts::new(
                "aadhya_department_delta",
                "Predicted four-hour change in patients per department",
            ),
            &["dept", "level"],
        )?;

        registry.register(Box::new(area_surge_score.clone()))?;
        registry.register(Box::new(expected_patients_per_hour.clone()))?;
        registry.register(Box::new(resource_extra.clone()))?;
        registry.register(Box::new(forecast_band_total.clone()))?;
        registry.register(Box::new(forecast_variability_pct.clone()))?;
        registry.register(Box::new(inventory_alerts.clone()))?;
        registry.register(Box::new(inventory_stock_days.clone()))?;
        registry.register(Box::new(department_delta.clone()))?;

        Ok(Self {
            registry,
            area_surge_score,
            expected_patients_per_hour,
            resource_extra,
            forecast_band_total,
            forecast_variability_pct,
            inventory_alerts,
            inventory_stock_days,
            department_delta,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn observe_snapshot(&self, snap: &OpsSnapshot) {
        for score in &snap.area_scores {
            self.area_surge_score
                .with_label_values(&[score.area_id.as_str()])
                .set(f64::from(score.pollution_score));
        }
        self.expected_patients_per_hour
            .set(snap.areas.expected_patients_per_hour);

        let r = &snap.resources;
        for (resource, value) in [
            ("oxygen", r.oxygen_extra),
            ("nebulizer_kits", r.nebulizer_kits),
            ("iv_fluids", r.iv_fluids),
            ("staff", r.staff_extra),
        ] {
            self.resource_extra
                .with_label_values(&[resource])
                .set(value as f64);
        }

        for (band, data) in [("surge", &snap.surge_band), ("inflow", &snap.inflow_band)] {
            self.forecast_band_total
                .with_label_values(&[band, "p50"])
                .set(data.total_p50 as f64);
            self.forecast_band_total
                .with_label_values(&[band, "p90"])
                .set(data.total_p90 as f64);
            self.forecast_variability_pct
                .with_label_values(&[band])
                .set(data.variability_pct as f64);
        }

        for kind in AlertKind::ALL {
            self.inventory_alerts
                .with_label_values(&[kind.as_str(), kind.level().as_str()])
                .set(snap.inventory.count(kind) as f64);
        }

        self.inventory_stock_days.reset();
        for f in &snap.inventory.forecast {
            if let Some(days) = f.stock_days_remaining {
                self.inventory_stock_days
                    .with_label_values(&[f.item_name.as_str()])
                    .set(days as f64);
            }
        }

        self.department_delta.reset();
        for d in &snap.departments {
            self.department_delta
                .with_label_values(&[d.dept.as_str(), d.level.as_str()])
                .set(d.delta as f64);
        }
    }

    /// Text exposition of everything registered here.
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
