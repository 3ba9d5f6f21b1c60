//! Configuration management module.
//!
//! Loads, validates and writes the `config.toml` that drives the binary.
//!
//! # Configuration Structure
//!
//! - **log_level** / **log_console_interval**: logging verbosity and the period
//!   of the console statistics line
//! - **shutdown_timeout**: seconds the supervisor waits for the engine to drain
//! - **engine**: worker count, queue capacity, processing latency and deadline
//! - **udp_server**: ingress listener settings
//! - **http_server**: health and metrics listener settings
//! - **sentry_config**: error reporting
//!
//! Command-line flags (`--listen`, `--http`, `--workers`) override the file.
//!
//! # Example
//!
//! ```rust,ignore
//! use aegis_netengine::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
