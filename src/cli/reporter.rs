use crate::calculator::{CalculationInput, CalculationReport};
use crate::cli::error::Result;
use colored::*;
use tracing::{debug, info};

/// Reporter for printing calculation results
pub struct Reporter;

// Width the labels are padded to so values line up
const LABEL_WIDTH: usize = 46;

impl Reporter {
    /// Renders the scenario and its results as a colored, boxed summary
    pub fn render_text(&self, report: &CalculationReport) -> String {
        let input = &report.input;
        let mut out = String::new();

        out.push_str(&format!("{}\n", "┌─────────────────────────────┐".cyan()));
        out.push_str(&format!("{}\n", "│  Bandwidth Analyzer         │".cyan()));
        out.push_str(&format!("{}\n\n", "└─────────────────────────────┘".cyan()));

        out.push_str("Scenario:\n");
        out.push_str(&Self::render_scenario(input));
        out.push('\n');

        out.push_str(&format!("{}\n", "Results".bold()));
        for line in report.result.summary() {
            let label = format!("{:<width$}", format!("{}:", line.label), width = LABEL_WIDTH);
            out.push_str(&format!("  {} {}\n", label, line.formatted_value().green().bold()));
        }

        out.push('\n');
        out.push_str("  └─ Monthly figures assume a 30-day month\n");
        out
    }

    fn render_scenario(input: &CalculationInput) -> String {
        format!(
            "  Image size:     {} {}\n  Throughput:     {} {} ({})\n  Machines:       {}\n  Rejection rate: {}%\n",
            input.image_size,
            input.image_size_unit,
            input.throughput,
            input.throughput_time_unit,
            input.throughput_type,
            input.num_machines,
            input.rejection_rate,
        )
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// Fails if a figure overflowed, since JSON would turn it into `null`.
    pub fn render_json(&self, report: &CalculationReport) -> Result<String> {
        report.result.ensure_finite()?;
        Ok(serde_json::to_string_pretty(report)?)
    }

    /// Print the complete results summary
    pub fn print_results(&self, report: &CalculationReport, json: bool) -> Result<()> {
        debug!(json = json, "Printing calculation results");

        if json {
            println!("{}", self.render_json(report)?);
        } else {
            print!("{}", self.render_text(report));
        }

        info!(
            total_bandwidth = report.result.total_bandwidth,
            output_unit = %report.result.output_unit,
            "Results reported"
        );
        Ok(())
    }
}
