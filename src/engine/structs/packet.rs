use std::net::SocketAddr;
use std::sync::Arc;

/// One datagram, owned by the engine from admission until a worker is done.
///
/// The payload is a private copy; it never aliases the receive buffer of the
/// transport it came from.
#[derive(Debug, Clone)]
pub struct Packet {
    pub data: Arc<[u8]>,
    pub remote_addr: Option<SocketAddr>,
}
