pub mod fixtures;
pub mod snapshot;
pub mod source;

pub use fixtures::FixtureSource;
pub use snapshot::{AreaScore, OpsSnapshot, SnapshotError};
pub use source::OpsDataSource;
