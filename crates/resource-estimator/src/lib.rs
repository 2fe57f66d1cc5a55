pub mod beds;
pub mod department;
pub mod estimate;
pub mod staffing;

pub use beds::{BedTotals, WardOccupancy};
pub use department::{predict_departments, DeptFlow, DeptLevel, DeptPrediction};
pub use estimate::{estimate_resources, ResourceEstimate, BASELINE_PATIENTS_PER_HOUR};
pub use staffing::{staffing_plan, StaffingAction, UnitForecast};
