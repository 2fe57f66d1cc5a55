use inventory_risk::{InventoryItem, PatientFlowPoint};
use resource_estimator::{DeptFlow, WardOccupancy};
use surge_scoring::AreaReading;

/// Where a dashboard refresh reads its raw operational records from.
///
/// Implementations may hit a remote endpoint; a failed call is reported as an
/// error and the snapshot builder carries on with an empty list.
pub trait OpsDataSource {
    fn areas(&self) -> anyhow::Result<Vec<AreaReading>>;
    fn wards(&self) -> anyhow::Result<Vec<WardOccupancy>>;
    fn inventory(&self) -> anyhow::Result<Vec<InventoryItem>>;
    fn patient_flow(&self) -> anyhow::Result<Vec<PatientFlowPoint>>;
    fn departments(&self) -> anyhow::Result<Vec<DeptFlow>>;
}
