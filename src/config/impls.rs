pub mod configuration;
pub mod configuration_error;
pub mod engine_config;
