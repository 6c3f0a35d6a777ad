//! Bandwidth calculation core: option sets, input layer, arithmetic and result formatting

pub mod compute;
pub mod constants;
pub mod error;
pub mod input;
pub mod summary;
pub mod units;

pub use compute::{compute, compute_breakdown, Breakdown, CalculationResult};
pub use error::{CalculatorError, Result};
pub use input::{CalculationInput, CalculationRequest};
pub use summary::{CalculationReport, SummaryLine};
pub use units::{BandwidthUnit, ImageSizeUnit, ThroughputScope, ThroughputTimeUnit};
