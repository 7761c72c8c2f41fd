//! Metrics sampling and the refresh loop.
//!
//! - [`provider`]: the OS metrics source (`sysinfo`-backed in production)
//! - [`sampler`]: one [`Sample`](aqua_core::Sample) per call, with the
//!   synthetic temperature fallback
//! - [`history`]: the fixed-size rolling window and its averages
//! - [`monitor`]: one refresh cycle, pushing results into the display sinks
//! - [`detail`]: on-demand CPU / memory / disk / temperature reports

pub mod cpufreq;
pub mod detail;
pub mod history;
pub mod monitor;
pub mod provider;
pub mod sampler;

#[cfg(test)]
pub(crate) mod fake;

pub use history::{HistoryBuffer, DEFAULT_CAPACITY};
pub use monitor::{Monitor, Phase, TickReport};
pub use provider::{MetricsProvider, SysinfoProvider};
