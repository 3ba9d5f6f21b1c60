use std::net::SocketAddr;
use std::sync::Arc;
use crate::engine::structs::packet::Packet;

impl Packet {
    /// Copies `data` into a fresh allocation.
    pub fn from_slice(data: &[u8]) -> Packet {
        Packet {
            data: Arc::from(data),
            remote_addr: None,
        }
    }

    pub fn from_datagram(data: &[u8], remote_addr: SocketAddr) -> Packet {
        Packet {
            data: Arc::from(data),
            remote_addr: Some(remote_addr),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
