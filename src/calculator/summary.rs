use crate::calculator::compute::{compute, CalculationResult};
use crate::calculator::constants::{BAGS_SUFFIX, DISPLAY_PRECISION};
use crate::calculator::input::CalculationInput;
use serde::Serialize;
use std::fmt;

pub const TOTAL_BANDWIDTH_LABEL: &str = "Total bandwidth required";
pub const PER_MACHINE_LABEL: &str = "Bandwidth required per X-ray Machine (Lane)";
pub const REJECTED_BAGS_LABEL: &str = "Total rejected bags";
pub const BAGS_FROM_SITE_LABEL: &str = "Total bags from site";

/// One printable figure of a result, e.g. `Total rejected bags: 10.0000 bags`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: f64,
    pub suffix: &'static str,
}

impl SummaryLine {
    /// Value with the fixed display precision and its suffix
    pub fn formatted_value(&self) -> String {
        format!(
            "{:.prec$} {}",
            self.value,
            self.suffix,
            prec = DISPLAY_PRECISION
        )
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.formatted_value())
    }
}

impl CalculationResult {
    /// The four result lines in display order
    pub fn summary(&self) -> [SummaryLine; 4] {
        let unit = self.output_unit.label();
        [
            SummaryLine {
                label: TOTAL_BANDWIDTH_LABEL,
                value: self.total_bandwidth,
                suffix: unit,
            },
            SummaryLine {
                label: PER_MACHINE_LABEL,
                value: self.bandwidth_per_machine,
                suffix: unit,
            },
            SummaryLine {
                label: REJECTED_BAGS_LABEL,
                value: self.rejected_bags,
                suffix: BAGS_SUFFIX,
            },
            SummaryLine {
                label: BAGS_FROM_SITE_LABEL,
                value: self.total_bags_from_site,
                suffix: BAGS_SUFFIX,
            },
        ]
    }
}

/// A computed scenario together with its printable summary, as returned by
/// the JSON interfaces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationReport {
    pub input: CalculationInput,
    pub result: CalculationResult,
    pub summary: Vec<String>,
}

impl CalculationReport {
    pub fn new(input: CalculationInput) -> Self {
        let result = compute(&input);
        let summary = result.summary().iter().map(ToString::to_string).collect();
        Self {
            input,
            result,
            summary,
        }
    }
}
