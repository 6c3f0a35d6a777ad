use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log levels accepted by the `--log-level` flag
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Log formats accepted by the `--log-format` flag
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Checks a `--log-level` / `--log-format` pair
pub fn validate_log_options(level: &str, format: &str) -> Result<(), String> {
    if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        return Err(format!("log_level must be one of: {}", LOG_LEVELS.join(", ")));
    }
    if !LOG_FORMATS.contains(&format.to_lowercase().as_str()) {
        return Err(format!("log_format must be one of: {}", LOG_FORMATS.join(", ")));
    }
    Ok(())
}

/// Initialize structured logging on stderr
///
/// `RUST_LOG` takes precedence over `level` when set. Examples:
/// - `RUST_LOG=debug` - Debug level and above
/// - `RUST_LOG=bandwidth_analyzer=debug,tower_http=info` - Per-crate levels
pub fn init_logging_with_config(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_lowercase()));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(false),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_line_number(true)
                    .with_file(true),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_log_options() {
        assert!(validate_log_options("info", "text").is_ok());
        assert!(validate_log_options("DEBUG", "json").is_ok());
        assert!(validate_log_options("verbose", "text").is_err());
        assert!(validate_log_options("info", "xml").is_err());
    }
}
