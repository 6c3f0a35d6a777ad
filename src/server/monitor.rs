//! Server request statistics

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Monitor for tracking calculator requests with minimal overhead.
///
/// Uses atomic counters for lock-free updates from concurrent handlers.
#[derive(Debug, Clone)]
pub struct ServerMonitor {
    pages_served: Arc<AtomicU64>,
    calculations: Arc<AtomicU64>,
    rejected_inputs: Arc<AtomicU64>,
    start_time: Instant,
}

impl Default for ServerMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerMonitor {
    pub fn new() -> Self {
        Self {
            pages_served: Arc::new(AtomicU64::new(0)),
            calculations: Arc::new(AtomicU64::new(0)),
            rejected_inputs: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    /// Get counters for use in request handlers.
    pub fn counters(&self) -> ServerCounters {
        ServerCounters {
            pages_served: Arc::clone(&self.pages_served),
            calculations: Arc::clone(&self.calculations),
            rejected_inputs: Arc::clone(&self.rejected_inputs),
        }
    }

    /// Snapshot of the current statistics.
    pub fn stats(&self) -> ServerStats {
        ServerStats {
            pages_served: self.pages_served.load(Ordering::Relaxed),
            calculations: self.calculations.load(Ordering::Relaxed),
            rejected_inputs: self.rejected_inputs.load(Ordering::Relaxed),
            uptime_secs: self.start_time.elapsed().as_secs(),
        }
    }

    /// Logs the final statistics, typically on shutdown.
    pub fn log_summary(&self) {
        let stats = self.stats();
        info!(
            pages_served = stats.pages_served,
            calculations = stats.calculations,
            rejected_inputs = stats.rejected_inputs,
            uptime_secs = stats.uptime_secs,
            "Server statistics"
        );
    }
}

/// Lightweight counters shared with request handlers.
///
/// `Relaxed` ordering is enough: the counters are independent and only read
/// for reporting.
#[derive(Debug, Clone)]
pub struct ServerCounters {
    pages_served: Arc<AtomicU64>,
    calculations: Arc<AtomicU64>,
    rejected_inputs: Arc<AtomicU64>,
}

impl ServerCounters {
    #[inline]
    pub fn increment_pages(&self) {
        self.pages_served.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn increment_calculations(&self) {
        self.calculations.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn increment_rejected(&self) {
        self.rejected_inputs.fetch_add(1, Ordering::Relaxed);
    }
}

/// Server statistics as exposed on `/api/v1/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerStats {
    pub pages_served: u64,
    pub calculations: u64,
    pub rejected_inputs: u64,
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_starts_at_zero() {
        let stats = ServerMonitor::new().stats();
        assert_eq!(stats.pages_served, 0);
        assert_eq!(stats.calculations, 0);
        assert_eq!(stats.rejected_inputs, 0);
    }

    #[test]
    fn test_counters() {
        let monitor = ServerMonitor::new();
        let counters = monitor.counters();

        counters.increment_pages();
        counters.increment_calculations();
        counters.increment_calculations();
        counters.increment_rejected();

        let stats = monitor.stats();
        assert_eq!(stats.pages_served, 1);
        assert_eq!(stats.calculations, 2);
        assert_eq!(stats.rejected_inputs, 1);
    }

    #[test]
    fn test_counters_shared_across_threads() {
        let monitor = ServerMonitor::new();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counters = monitor.counters();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        counters.increment_calculations();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(monitor.stats().calculations, 4000);
    }
}
