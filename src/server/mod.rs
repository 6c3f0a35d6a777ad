//! Server module for the calculator web front end

pub mod config;
pub mod error;
pub mod monitor;
pub mod page;
pub mod web;

pub use config::ServerConfig;
pub use error::ApiError;
pub use monitor::{ServerCounters, ServerMonitor, ServerStats};
pub use web::{build_router, start_server, AppState};
