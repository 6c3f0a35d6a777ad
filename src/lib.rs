//! Bandwidth Analyzer - network bandwidth calculator for imaging throughput scenarios
//!
//! This library converts an imaging scenario (image size, throughput, fleet size,
//! rejection rate) into the network bandwidth it requires, and exposes the
//! calculation through a command-line tool and an HTTP server.

pub mod calculator;
pub mod cli;
pub mod logging;
pub mod server;
