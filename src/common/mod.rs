//! Common utilities and shared functionality.
//!
//! - Logging setup (`fern` + `log`)
//! - Bind address parsing
//! - `CustomError`, the message-only error used during boot

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
