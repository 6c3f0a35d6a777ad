use crate::calculator::constants::MAX_REJECTION_RATE;
use crate::calculator::error::{CalculatorError, Result};
use crate::calculator::units::{BandwidthUnit, ImageSizeUnit, ThroughputScope, ThroughputTimeUnit};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::str::FromStr;
use tracing::debug;

/// Scenario as supplied by a caller, before the input layer checks it.
///
/// Missing fields take the defaults of the calculator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationRequest {
    pub image_size: f64,
    pub image_size_unit: ImageSizeUnit,
    pub throughput: f64,
    pub throughput_time_unit: ThroughputTimeUnit,
    pub throughput_type: ThroughputScope,
    pub num_machines: u32,
    pub rejection_rate: f64,
    pub output_unit: BandwidthUnit,
}

impl Default for CalculationRequest {
    fn default() -> Self {
        Self {
            image_size: 0.0,
            image_size_unit: ImageSizeUnit::Kb,
            throughput: 0.0,
            throughput_time_unit: ThroughputTimeUnit::PerMonth,
            throughput_type: ThroughputScope::AllMachines,
            num_machines: 1,
            rejection_rate: 0.0,
            output_unit: BandwidthUnit::Mbps,
        }
    }
}

impl CalculationRequest {
    /// Builds a request from submitted form fields.
    ///
    /// Fields that parse are kept even when another one fails, so the form can
    /// be shown again as the user filled it in. Unknown field names are
    /// ignored and the first parse failure is returned alongside.
    pub fn from_form<'a, I>(fields: I) -> (Self, Option<CalculatorError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = Self::default();
        let mut first_error = None;
        for (name, value) in fields {
            if let Err(e) = request.set_form_field(name, value) {
                first_error.get_or_insert(e);
            }
        }
        (request, first_error)
    }

    fn set_form_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "image_size" => self.image_size = parse_number("image_size", value)?,
            "image_size_unit" => self.image_size_unit = value.parse()?,
            "throughput" => self.throughput = parse_number("throughput", value)?,
            "throughput_time_unit" => self.throughput_time_unit = value.parse()?,
            "throughput_type" => self.throughput_type = value.parse()?,
            "num_machines" => self.num_machines = parse_number("num_machines", value)?,
            "rejection_rate" => self.rejection_rate = parse_number("rejection_rate", value)?,
            "output_unit" => self.output_unit = value.parse()?,
            _ => {}
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CalculatorError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Inputs for a single bandwidth computation.
///
/// The machine count is non-zero by construction. The float fields are not
/// range checked here; use [`CalculationInput::try_from`] on a
/// [`CalculationRequest`] to apply the input layer checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationInput {
    pub image_size: f64,
    pub image_size_unit: ImageSizeUnit,
    pub throughput: f64,
    pub throughput_time_unit: ThroughputTimeUnit,
    pub throughput_type: ThroughputScope,
    pub num_machines: NonZeroU32,
    pub rejection_rate: f64,
    pub output_unit: BandwidthUnit,
}

impl CalculationInput {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        image_size: f64,
        image_size_unit: ImageSizeUnit,
        throughput: f64,
        throughput_time_unit: ThroughputTimeUnit,
        throughput_type: ThroughputScope,
        num_machines: NonZeroU32,
        rejection_rate: f64,
        output_unit: BandwidthUnit,
    ) -> Self {
        Self {
            image_size,
            image_size_unit,
            throughput,
            throughput_time_unit,
            throughput_type,
            num_machines,
            rejection_rate,
            output_unit,
        }
    }

    pub fn machines(&self) -> f64 {
        f64::from(self.num_machines.get())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalculatorError::NotFinite { field })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(CalculatorError::Negative { field, value });
    }
    Ok(())
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    check_finite(field, value)?;
    if value < min || value > max {
        return Err(CalculatorError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl TryFrom<CalculationRequest> for CalculationInput {
    type Error = CalculatorError;

    fn try_from(request: CalculationRequest) -> Result<Self> {
        debug!(?request, "Validating calculation request");

        let num_machines =
            NonZeroU32::new(request.num_machines).ok_or(CalculatorError::InvalidMachineCount)?;
        check_non_negative("image_size", request.image_size)?;
        check_non_negative("throughput", request.throughput)?;
        check_range(
            "rejection_rate",
            request.rejection_rate,
            0.0,
            MAX_REJECTION_RATE,
        )?;

        Ok(Self::new(
            request.image_size,
            request.image_size_unit,
            request.throughput,
            request.throughput_time_unit,
            request.throughput_type,
            num_machines,
            request.rejection_rate,
            request.output_unit,
        ))
    }
}
