use crate::calculator::{
    BandwidthUnit, CalculationRequest, ImageSizeUnit, ThroughputScope, ThroughputTimeUnit,
};
use crate::cli::error::{CliError, Result};
use crate::logging::validate_log_options;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "bandwidth")]
#[command(about = "Network bandwidth calculator for imaging throughput scenarios")]
pub struct Config {
    /// Size of one image, in --image-size-unit
    #[arg(long)]
    pub image_size: f64,

    /// Unit of the image size (KB, MB, GB, TB)
    #[arg(long, default_value = "KB")]
    pub image_size_unit: ImageSizeUnit,

    /// Number of images (bags) processed per --time-unit
    #[arg(long)]
    pub throughput: f64,

    /// Period the throughput is counted over (per-hour, per-month, per-year)
    #[arg(long, default_value = "per month")]
    pub time_unit: ThroughputTimeUnit,

    /// Whether the throughput is per machine or for all machines (per-machine, all-machines)
    #[arg(long, default_value = "All Machines")]
    pub scope: ThroughputScope,

    /// Number of X-ray machines (lanes)
    #[arg(long, default_value_t = 1)]
    pub machines: u32,

    /// Percentage of bags rejected (0-100)
    #[arg(long, default_value_t = 0.0)]
    pub rejection_rate: f64,

    /// Unit for bandwidth figures (Mbps, Kbps, Gbps)
    #[arg(long, default_value = "Mbps")]
    pub output_unit: BandwidthUnit,

    /// Output format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub log_format: String,
}

impl Config {
    /// Validates the non-scenario options; the scenario itself is checked
    /// when the request is converted into a calculation input
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        validate_log_options(&self.log_level, &self.log_format).map_err(CliError::Config)?;
        debug!("Configuration validated successfully");
        Ok(())
    }

    /// Scenario described by the command-line flags
    pub fn request(&self) -> CalculationRequest {
        CalculationRequest {
            image_size: self.image_size,
            image_size_unit: self.image_size_unit,
            throughput: self.throughput,
            throughput_time_unit: self.time_unit,
            throughput_type: self.scope,
            num_machines: self.machines,
            rejection_rate: self.rejection_rate,
            output_unit: self.output_unit,
        }
    }

    /// Returns true if results should be printed as JSON
    pub fn is_json_output(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// Returns true if JSON format logging is enabled
    pub fn is_json_logging(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
