//! Sample data model for the memory overview.

use serde::{Deserialize, Serialize};

/// One timestamped memory usage sample with the backtrace recorded for it.
///
/// Samples come straight out of the profiler's JSON dump; this crate only
/// reads them. Producers attach extra bookkeeping fields (`id` among
/// them), which deserialization ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySample {
    /// Sample time, milliseconds since the Unix epoch.
    pub x: u64,
    /// Memory usage at that time, in megabytes.
    pub y: f64,
    /// Backtrace frames for the sample, in recorded order.
    pub bt: Vec<String>,
}
