use crate::source::OpsDataSource;
use anyhow::Context;
use inventory_risk::{InventoryItem, PatientFlowPoint};
use resource_estimator::{DeptFlow, WardOccupancy};
use serde::{Deserialize, Serialize};
use surge_scoring::AreaReading;

const DASHBOARD_FIXTURE: &str = include_str!("../fixtures/dashboard.json");

/// In-memory records, either the bundled dashboard fixture or any JSON
/// document of the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FixtureSource {
    pub areas: Vec<AreaReading>,
    pub wards: Vec<WardOccupancy>,
    pub inventory: Vec<InventoryItem>,
    pub patient_flow: Vec<PatientFlowPoint>,
    pub departments: Vec<DeptFlow>,
}

impl FixtureSource {
    pub fn dashboard() -> anyhow::Result<Self> {
        Self::from_json_str(DASHBOARD_FIXTURE).context("bundled dashboard fixture")
    }

    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parse fixture document")
    }
}

impl OpsDataSource for FixtureSource {
    fn areas(&self) -> anyhow::Result<Vec<AreaReading>> {
        Ok(self.areas.clone())
    }

    fn wards(&self) -> anyhow::Result<Vec<WardOccupancy>> {
        Ok(self.wards.clone())
    }

    fn inventory(&self) -> anyhow::Result<Vec<InventoryItem>> {
        Ok(self.inventory.clone())
    }

    fn patient_flow(&self) -> anyhow::Result<Vec<PatientFlowPoint>> {
        Ok(self.patient_flow.clone())
    }

    fn departments(&self) -> anyhow::Result<Vec<DeptFlow>> {
        Ok(self.departments.clone())
    }
}
