//! Engine statistics and telemetry.
//!
//! Every counter the engine exposes lives in [`StatsAtomics`], a set of atomic
//! integers updated through the [`TelemetrySink`] trait. The engine never talks
//! to a process-wide registry; the sink is handed to it at construction, so
//! several engines can run side by side in one process (and in one test).
//!
//! # Counters
//!
//! - **accepted**: packets admitted into the intake queue
//! - **dropped**: packets shed because the queue was full
//! - **rejected**: packets offered after the engine started stopping
//! - **processed**: packets a worker finished successfully
//! - **failed**: packets whose processing step returned an error or timed out
//! - **bytes_processed**: payload bytes of processed packets
//! - **workers_active**: gauge of workers currently inside their loop
//!
//! # Monitoring Integration
//!
//! - JSON format via `/stats`
//! - Prometheus format via `/metrics`
//!
//! [`StatsAtomics`]: structs::stats_atomics::StatsAtomics
//! [`TelemetrySink`]: traits::telemetry_sink::TelemetrySink

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;

/// The sink trait the engine reports through.
pub mod traits;
