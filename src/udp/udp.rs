use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::config::structs::udp_server_config::UdpServerConfig;
use crate::engine::structs::engine::Engine;
use crate::udp::structs::udp_server::UdpServer;

/// Largest payload a single UDP datagram can carry.
pub const MAX_DATAGRAM_SIZE: usize = 65_535;

#[tracing::instrument(level = "debug", skip(engine, rx))]
pub async fn udp_service(addr: SocketAddr, config: &UdpServerConfig, engine: Arc<Engine>, rx: watch::Receiver<bool>) -> std::io::Result<JoinHandle<()>>
{
    let udp_server = UdpServer::new(engine, addr, config.receive_buffer_size, config.reuse_address)?;
    info!("[UDP] Starting a server listener on {}", udp_server.local_addr()?);
    Ok(tokio::spawn(async move {
        udp_server.start(rx).await;
    }))
}
