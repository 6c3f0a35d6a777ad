//! Command-line front end for the bandwidth calculator

pub mod config;
pub mod error;
pub mod reporter;

pub use config::Config;
pub use error::{CliError, Result};
pub use reporter::Reporter;
