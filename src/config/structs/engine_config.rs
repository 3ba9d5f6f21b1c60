use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Size of the worker pool; `0` means the default of 4.
    pub workers: usize,
    /// Maximum number of packets waiting for a worker; `0` means 10,000.
    pub queue_capacity: usize,
    /// Latency of the reference processing step.
    pub process_latency_ms: u64,
    /// Deadline for a single processing step; `0` disables it.
    pub process_timeout_ms: u64
}
