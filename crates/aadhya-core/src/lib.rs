pub mod alert;
pub mod config;
pub mod error;
pub mod jitter;
pub mod rounding;

pub use alert::*;
pub use config::*;
pub use error::*;
pub use jitter::*;
pub use rounding::*;
