//! The ingestion-and-dispatch engine.
//!
//! Packets handed over by an ingress adapter are admitted into a bounded
//! [`IntakeQueue`] and drained by a fixed pool of workers, each of which runs
//! a [`PacketProcessor`] on one packet at a time.
//!
//! # Backpressure
//!
//! Admission never blocks. When the queue is full the newest packet is dropped,
//! a warning is logged and [`EnqueueOutcome::Dropped`] is returned. The queue
//! never grows past the capacity it was built with.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --start()--> Running --cancel / stop()--> Draining --workers exited--> Terminated
//! ```
//!
//! - `start()` spawns the workers on the current tokio runtime and returns
//!   immediately. A second call is rejected.
//! - `stop()` raises the engine's own stop signal and waits until every worker
//!   has left its loop. Concurrent and repeated calls wait on the same
//!   condition, and a cancelled call can simply be retried. A worker busy with
//!   a packet finishes it first.
//!
//! # Example
//!
//! ```rust,ignore
//! use aegis_netengine::engine::structs::engine::Engine;
//!
//! let engine = Engine::new(&config.engine, processor, stats.clone());
//! engine.start(shutdown_rx)?;
//! engine.enqueue(Packet::from_slice(&buffer[..size]));
//! engine.stop().await;
//! ```
//!
//! [`IntakeQueue`]: structs::intake_queue::IntakeQueue
//! [`PacketProcessor`]: traits::packet_processor::PacketProcessor
//! [`EnqueueOutcome::Dropped`]: enums::enqueue_outcome::EnqueueOutcome::Dropped

/// Engine enumerations (state, enqueue outcome, errors).
pub mod enums;

/// Implementation blocks for the engine components.
pub mod impls;

/// Engine data structures.
pub mod structs;

/// The processing step contract.
pub mod traits;

/// Engine defaults and shared helpers.
#[allow(clippy::module_inception)]
pub mod engine;
