//! Pipeline module - the analytics transformation engine

pub mod categories;
pub mod clean;
pub mod cohorts;
pub mod error;
pub mod loader;
pub mod outliers;
pub mod segments;
pub mod timeseries;

pub use categories::*;
pub use clean::*;
pub use cohorts::*;
pub use error::*;
pub use loader::*;
pub use outliers::*;
pub use segments::*;
pub use timeseries::*;
