//! Engine data structures.

/// The lifecycle controller owning queue, pool and telemetry sink.
pub mod engine;

/// Reference processing step with a fixed latency.
pub mod fixed_latency_processor;

/// The bounded FIFO between ingress and workers.
pub mod intake_queue;

/// A single datagram owned by the engine.
pub mod packet;

/// One member of the worker pool.
pub mod worker;
