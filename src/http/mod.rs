//! HTTP telemetry endpoints.
//!
//! A small actix-web service next to the engine:
//!
//! - `GET /health`: `200 ok` once the process is serving
//! - `GET /metrics`: Prometheus text exposition of the engine counters
//! - `GET /stats`: the same counters as a JSON snapshot
//!
//! Everything else answers `404` with a JSON body.

/// HTTP service data structures.
pub mod structs;

/// Server construction, routes and handlers.
#[allow(clippy::module_inception)]
pub mod http;
