//! Conversion factors used by the bandwidth calculation

/// Kilobytes per megabyte (and megabytes per gigabyte, gigabytes per terabyte)
pub const BINARY_UNIT_STEP: f64 = 1024.0;

/// Hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Days in the fixed billing month used for every monthly figure
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Months in a year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Megabits per megabyte
pub const BITS_PER_BYTE: f64 = 8.0;

/// Seconds in a 30-day month (30 * 24 * 60 * 60)
pub const SECONDS_PER_MONTH: f64 = 2_592_000.0;

/// Kbps per Mbps (and Mbps per Gbps)
pub const DECIMAL_UNIT_STEP: f64 = 1000.0;

/// Rejection rates are given as a percentage
pub const PERCENT: f64 = 100.0;

/// Upper bound accepted by the input layer for the rejection rate
pub const MAX_REJECTION_RATE: f64 = 100.0;

/// Decimal places used when results are printed
pub const DISPLAY_PRECISION: usize = 4;

/// Suffix printed after bag counts
pub const BAGS_SUFFIX: &str = "bags";
