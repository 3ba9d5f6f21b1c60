use serde::{Deserialize, Serialize};
use crate::config::structs::engine_config::EngineConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::udp_server_config::UdpServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub shutdown_timeout: u64,
    pub engine: EngineConfig,
    pub udp_server: UdpServerConfig,
    pub http_server: HttpServerConfig,
    pub sentry_config: SentryConfig
}
