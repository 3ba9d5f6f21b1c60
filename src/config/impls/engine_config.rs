use crate::config::structs::engine_config::EngineConfig;
use crate::engine::engine::{DEFAULT_PROCESS_LATENCY_MS, DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKERS};

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            workers: DEFAULT_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            process_latency_ms: DEFAULT_PROCESS_LATENCY_MS,
            process_timeout_ms: 0
        }
    }
}
