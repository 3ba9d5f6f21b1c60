//! # aegis-netengine
//!
//! A bounded ingestion-and-dispatch engine for UDP datagrams.
//!
//! ## Overview
//!
//! Datagrams read from a UDP socket are copied into [`Packet`]s and offered to a
//! fixed-capacity intake queue. A fixed pool of workers drains the queue and
//! runs a pluggable processing step on every packet. When intake outruns
//! processing the newest packets are dropped, so memory stays bounded and the
//! socket reader never stalls.
//!
//! ## Features
//!
//! - **Bounded Intake**: lock-free fixed-capacity queue, drop-on-full backpressure
//! - **Worker Pool**: N tokio workers with cooperative cancellation
//! - **Deterministic Shutdown**: `stop()` is idempotent and returns only after
//!   every in-flight packet has been finished
//! - **Telemetry**: counters injected through a sink trait, exported as
//!   Prometheus text and JSON by a small actix-web service
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use aegis_netengine::config::structs::engine_config::EngineConfig;
//! use aegis_netengine::engine::structs::engine::Engine;
//! use aegis_netengine::engine::structs::fixed_latency_processor::FixedLatencyProcessor;
//! use aegis_netengine::stats::structs::stats_atomics::StatsAtomics;
//!
//! let stats = Arc::new(StatsAtomics::new());
//! let engine = Engine::new(&EngineConfig::default(), Arc::new(FixedLatencyProcessor::default()), stats.clone());
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! engine.start(shutdown_rx)?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, address parsing and boot errors
//! - [`config`] - Configuration management and TOML parsing
//! - [`engine`] - Intake queue, worker pool and lifecycle controller
//! - [`http`] - Health, metrics and stats endpoints
//! - [`stats`] - Atomic counters and the telemetry sink trait
//! - [`structs`] - CLI argument parsing
//! - [`udp`] - UDP ingress adapter
//!
//! [`Packet`]: engine::structs::packet::Packet

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
pub mod config;

/// The ingestion-and-dispatch engine.
///
/// Owns the bounded intake queue and the worker pool, and implements the
/// start/enqueue/stop lifecycle.
pub mod engine;

/// Health and metrics HTTP service.
pub mod http;

/// Statistics tracking and telemetry.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// UDP ingress adapter.
pub mod udp;
