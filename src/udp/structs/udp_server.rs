use std::sync::Arc;
use tokio::net::UdpSocket;
use crate::engine::structs::engine::Engine;

pub struct UdpServer {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) engine: Arc<Engine>,
}
