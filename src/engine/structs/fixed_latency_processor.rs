use std::time::Duration;

/// Stand-in processing step: waits a fixed time and succeeds.
#[derive(Debug, Clone, Copy)]
pub struct FixedLatencyProcessor {
    pub latency: Duration,
}
