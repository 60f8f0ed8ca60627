//! Telemetry module
//!
//! Logging and counters

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{increment_counter, CounterMetric};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(
        &config.log_level,
        LogFormat::from_json_flag(config.json_logs),
    )
}
