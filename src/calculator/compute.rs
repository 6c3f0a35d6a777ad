use crate::calculator::constants::{BITS_PER_BYTE, PERCENT, SECONDS_PER_MONTH};
use crate::calculator::error::{CalculatorError, Result};
use crate::calculator::input::CalculationInput;
use crate::calculator::units::{BandwidthUnit, ThroughputScope};
use serde::Serialize;
use tracing::debug;

/// Figures derived from one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Fleet bandwidth, in `output_unit`
    pub total_bandwidth: f64,
    /// Fleet bandwidth divided evenly across machines, in `output_unit`
    pub bandwidth_per_machine: f64,
    pub rejected_bags: f64,
    pub total_bags_from_site: f64,
    pub output_unit: BandwidthUnit,
}

impl CalculationResult {
    /// Fails with [`CalculatorError::Overflow`] naming the first figure that
    /// is infinite or NaN.
    ///
    /// JSON has no representation for those values, so serializers must
    /// call this before emitting a result.
    pub fn ensure_finite(&self) -> Result<()> {
        let figures = [
            ("total_bandwidth", self.total_bandwidth),
            ("bandwidth_per_machine", self.bandwidth_per_machine),
            ("rejected_bags", self.rejected_bags),
            ("total_bags_from_site", self.total_bags_from_site),
        ];
        match figures.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(figure, _)) => Err(CalculatorError::Overflow { figure }),
            None => Ok(()),
        }
    }
}

/// Intermediate figures of a computation alongside its result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    pub image_size_mb: f64,
    pub monthly_throughput: f64,
    pub total_throughput: f64,
    pub total_data_megabits: f64,
    pub total_bandwidth_mbps: f64,
    pub result: CalculationResult,
}

/// Derives the required bandwidth and bag counts for a scenario.
///
/// Pure arithmetic: no range checks are applied, so out-of-domain values
/// (negative sizes, rejection rates above 100) flow straight through.
pub fn compute(input: &CalculationInput) -> CalculationResult {
    compute_breakdown(input).result
}

/// Same as [`compute`], keeping every intermediate figure.
pub fn compute_breakdown(input: &CalculationInput) -> Breakdown {
    let image_size_mb = input.image_size_unit.to_megabytes(input.image_size);
    let monthly_throughput = input.throughput_time_unit.to_monthly(input.throughput);

    let total_throughput = match input.throughput_type {
        ThroughputScope::PerMachine => monthly_throughput * input.machines(),
        ThroughputScope::AllMachines => monthly_throughput,
    };

    let total_data_megabits = total_throughput * image_size_mb * BITS_PER_BYTE;
    let total_bandwidth_mbps = total_data_megabits / SECONDS_PER_MONTH;

    let total_bandwidth = input.output_unit.from_mbps(total_bandwidth_mbps);
    let bandwidth_per_machine = total_bandwidth / input.machines();

    let rejected_bags = total_throughput * (input.rejection_rate / PERCENT);
    let total_bags_from_site = total_throughput - rejected_bags;

    let breakdown = Breakdown {
        image_size_mb,
        monthly_throughput,
        total_throughput,
        total_data_megabits,
        total_bandwidth_mbps,
        result: CalculationResult {
            total_bandwidth,
            bandwidth_per_machine,
            rejected_bags,
            total_bags_from_site,
            output_unit: input.output_unit,
        },
    };

    debug!(
        image_size_mb = image_size_mb,
        total_throughput = total_throughput,
        total_bandwidth_mbps = total_bandwidth_mbps,
        total_bandwidth = total_bandwidth,
        output_unit = %input.output_unit,
        "Bandwidth calculated"
    );

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::units::{ImageSizeUnit, ThroughputTimeUnit};
    use std::num::NonZeroU32;

    fn machines(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn input(
        image_size: f64,
        image_size_unit: ImageSizeUnit,
        throughput: f64,
        time_unit: ThroughputTimeUnit,
        scope: ThroughputScope,
        num_machines: u32,
    ) -> CalculationInput {
        CalculationInput::new(
            image_size,
            image_size_unit,
            throughput,
            time_unit,
            scope,
            machines(num_machines),
            0.0,
            BandwidthUnit::Mbps,
        )
    }

    #[test]
    fn test_reference_scenario() {
        let input = CalculationInput::new(
            1.0,
            ImageSizeUnit::Mb,
            100.0,
            ThroughputTimeUnit::PerMonth,
            ThroughputScope::AllMachines,
            machines(2),
            10.0,
            BandwidthUnit::Mbps,
        );
        let breakdown = compute_breakdown(&input);

        assert_eq!(breakdown.total_throughput, 100.0);
        assert_eq!(breakdown.total_data_megabits, 800.0);
        assert_eq!(breakdown.total_bandwidth_mbps, 800.0 / 2_592_000.0);

        let result = breakdown.result;
        assert!((result.total_bandwidth - 0.000_308_641_975).abs() < 1e-12);
        assert!((result.bandwidth_per_machine - 0.000_154_320_987).abs() < 1e-12);
        assert_eq!(result.rejected_bags, 10.0);
        assert_eq!(result.total_bags_from_site, 90.0);
        assert_eq!(result.output_unit, BandwidthUnit::Mbps);
    }

    #[test]
    fn test_hourly_throughput_per_machine() {
        let breakdown = compute_breakdown(&input(
            1.0,
            ImageSizeUnit::Mb,
            1.0,
            ThroughputTimeUnit::PerHour,
            ThroughputScope::PerMachine,
            1,
        ));
        assert_eq!(breakdown.monthly_throughput, 720.0);
        assert_eq!(breakdown.total_throughput, 720.0);
    }

    #[test]
    fn test_per_machine_scales_by_fleet() {
        let breakdown = compute_breakdown(&input(
            1.0,
            ImageSizeUnit::Mb,
            1200.0,
            ThroughputTimeUnit::PerYear,
            ThroughputScope::PerMachine,
            3,
        ));
        assert_eq!(breakdown.monthly_throughput, 100.0);
        assert_eq!(breakdown.total_throughput, 300.0);
    }

    #[test]
    fn test_gigabyte_image() {
        let breakdown = compute_breakdown(&input(
            1.0,
            ImageSizeUnit::Gb,
            1.0,
            ThroughputTimeUnit::PerMonth,
            ThroughputScope::AllMachines,
            1,
        ));
        assert_eq!(breakdown.image_size_mb, 1024.0);
    }

    #[test]
    fn test_output_unit_conversion() {
        let mut scenario = input(
            324.0,
            ImageSizeUnit::Mb,
            10_000.0,
            ThroughputTimeUnit::PerMonth,
            ThroughputScope::AllMachines,
            1,
        );
        let mbps = compute(&scenario).total_bandwidth;
        assert_eq!(mbps, 10.0);

        scenario.output_unit = BandwidthUnit::Kbps;
        assert_eq!(compute(&scenario).total_bandwidth, 10_000.0);

        scenario.output_unit = BandwidthUnit::Gbps;
        assert_eq!(compute(&scenario).total_bandwidth, 0.01);
    }

    #[test]
    fn test_out_of_domain_values_propagate() {
        let mut scenario = input(
            -1.0,
            ImageSizeUnit::Mb,
            100.0,
            ThroughputTimeUnit::PerMonth,
            ThroughputScope::AllMachines,
            1,
        );
        scenario.rejection_rate = 150.0;
        let result = compute(&scenario);

        assert!(result.total_bandwidth < 0.0);
        assert_eq!(result.rejected_bags, 150.0);
        assert_eq!(result.total_bags_from_site, -50.0);
    }

    #[test]
    fn test_overflow_is_detected() {
        let scenario = input(
            1e300,
            ImageSizeUnit::Tb,
            1e300,
            ThroughputTimeUnit::PerHour,
            ThroughputScope::AllMachines,
            1,
        );
        let result = compute(&scenario);

        assert!(result.total_bandwidth.is_infinite());
        assert_eq!(
            result.ensure_finite(),
            Err(CalculatorError::Overflow {
                figure: "total_bandwidth"
            })
        );

        let normal = input(
            1.0,
            ImageSizeUnit::Mb,
            100.0,
            ThroughputTimeUnit::PerMonth,
            ThroughputScope::AllMachines,
            2,
        );
        assert!(compute(&normal).ensure_finite().is_ok());
    }

    #[test]
    fn test_compute_is_deterministic() {
        let scenario = input(
            2.5,
            ImageSizeUnit::Tb,
            37.0,
            ThroughputTimeUnit::PerHour,
            ThroughputScope::PerMachine,
            7,
        );
        let first = compute(&scenario);
        let second = compute(&scenario);
        assert_eq!(
            first.total_bandwidth.to_bits(),
            second.total_bandwidth.to_bits()
        );
        assert_eq!(first, second);
    }
}
