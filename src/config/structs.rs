//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Worker pool and intake queue settings.
pub mod engine_config;

/// Health and metrics HTTP server configuration.
pub mod http_server_config;

/// Sentry error reporting configuration.
pub mod sentry_config;

/// UDP ingress listener configuration.
pub mod udp_server_config;
