//! Closed option sets for the calculator inputs
//!
//! Every option set parses strictly: the canonical label (case-insensitive) or
//! its hyphen/underscore spelling is accepted, anything else is an
//! [`CalculatorError::UnrecognizedUnit`]. Values serialize as their canonical
//! label and deserialize through the same parser.

use crate::calculator::constants::*;
use crate::calculator::error::CalculatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercases and replaces `-`/`_` with spaces so `per-hour`, `PER_HOUR` and
/// `per hour` compare equal.
fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

fn parse_label<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    label: impl Fn(T) -> &'static str,
) -> Result<T, CalculatorError> {
    let wanted = normalize(value);
    all.iter()
        .copied()
        .find(|&candidate| normalize(label(candidate)) == wanted)
        .ok_or_else(|| CalculatorError::UnrecognizedUnit {
            kind,
            value: value.to_string(),
            expected: all
                .iter()
                .map(|&candidate| label(candidate))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Unit the size of one image is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ImageSizeUnit {
    #[serde(rename = "KB")]
    Kb,
    #[serde(rename = "MB")]
    Mb,
    #[serde(rename = "GB")]
    Gb,
    #[serde(rename = "TB")]
    Tb,
}

impl ImageSizeUnit {
    pub const ALL: [ImageSizeUnit; 4] = [Self::Kb, Self::Mb, Self::Gb, Self::Tb];

    pub fn label(self) -> &'static str {
        match self {
            Self::Kb => "KB",
            Self::Mb => "MB",
            Self::Gb => "GB",
            Self::Tb => "TB",
        }
    }

    /// Converts a size expressed in this unit to megabytes
    pub fn to_megabytes(self, size: f64) -> f64 {
        match self {
            Self::Kb => size / BINARY_UNIT_STEP,
            Self::Mb => size,
            Self::Gb => size * BINARY_UNIT_STEP,
            Self::Tb => size * BINARY_UNIT_STEP * BINARY_UNIT_STEP,
        }
    }
}

/// Period a throughput figure is counted over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ThroughputTimeUnit {
    #[serde(rename = "per hour")]
    PerHour,
    #[serde(rename = "per month")]
    PerMonth,
    #[serde(rename = "per year")]
    PerYear,
}

impl ThroughputTimeUnit {
    pub const ALL: [ThroughputTimeUnit; 3] = [Self::PerHour, Self::PerMonth, Self::PerYear];

    pub fn label(self) -> &'static str {
        match self {
            Self::PerHour => "per hour",
            Self::PerMonth => "per month",
            Self::PerYear => "per year",
        }
    }

    /// Converts a throughput counted over this period to a 30-day monthly figure
    pub fn to_monthly(self, throughput: f64) -> f64 {
        match self {
            Self::PerHour => throughput * HOURS_PER_DAY * DAYS_PER_MONTH,
            Self::PerMonth => throughput,
            Self::PerYear => throughput / MONTHS_PER_YEAR,
        }
    }
}

/// Whether a throughput figure describes one machine or the whole fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ThroughputScope {
    #[serde(rename = "Per Machine")]
    PerMachine,
    #[serde(rename = "All Machines")]
    AllMachines,
}

impl ThroughputScope {
    pub const ALL: [ThroughputScope; 2] = [Self::PerMachine, Self::AllMachines];

    pub fn label(self) -> &'static str {
        match self {
            Self::PerMachine => "Per Machine",
            Self::AllMachines => "All Machines",
        }
    }
}

/// Unit bandwidth figures are reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum BandwidthUnit {
    #[serde(rename = "Mbps")]
    Mbps,
    #[serde(rename = "Kbps")]
    Kbps,
    #[serde(rename = "Gbps")]
    Gbps,
}

impl BandwidthUnit {
    pub const ALL: [BandwidthUnit; 3] = [Self::Mbps, Self::Kbps, Self::Gbps];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mbps => "Mbps",
            Self::Kbps => "Kbps",
            Self::Gbps => "Gbps",
        }
    }

    /// Converts a rate in megabits per second to this unit
    pub fn from_mbps(self, mbps: f64) -> f64 {
        match self {
            Self::Mbps => mbps,
            Self::Kbps => mbps * DECIMAL_UNIT_STEP,
            Self::Gbps => mbps / DECIMAL_UNIT_STEP,
        }
    }

    /// Converts a rate in this unit back to megabits per second
    pub fn to_mbps(self, value: f64) -> f64 {
        match self {
            Self::Mbps => value,
            Self::Kbps => value / DECIMAL_UNIT_STEP,
            Self::Gbps => value * DECIMAL_UNIT_STEP,
        }
    }
}

impl FromStr for ImageSizeUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("image size unit", s, &Self::ALL, Self::label)
    }
}

impl FromStr for ThroughputTimeUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("throughput time unit", s, &Self::ALL, Self::label)
    }
}

impl FromStr for ThroughputScope {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("throughput type", s, &Self::ALL, Self::label)
    }
}

impl FromStr for BandwidthUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("output unit", s, &Self::ALL, Self::label)
    }
}

impl TryFrom<String> for ImageSizeUnit {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for ThroughputTimeUnit {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for ThroughputScope {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for BandwidthUnit {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ImageSizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ThroughputTimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ThroughputScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for BandwidthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_bandwidth_unit_round_trip(mbps in -1.0e9f64..1.0e9) {
            for unit in BandwidthUnit::ALL {
                let back = unit.to_mbps(unit.from_mbps(mbps));
                prop_assert!((back - mbps).abs() <= mbps.abs() * 1e-12);
            }
        }
    }
}
