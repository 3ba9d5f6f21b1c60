use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use log::{debug, error, info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::sync::watch;
use crate::engine::structs::engine::Engine;
use crate::engine::structs::packet::Packet;
use crate::udp::structs::udp_server::UdpServer;
use crate::udp::udp::MAX_DATAGRAM_SIZE;

impl UdpServer {
    #[tracing::instrument(level = "debug", skip(engine))]
    pub fn new(engine: Arc<Engine>, bind_address: SocketAddr, recv_buffer_size: usize, reuse_address: bool) -> tokio::io::Result<UdpServer>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

        if recv_buffer_size > 0 && let Err(error) = socket.set_recv_buffer_size(recv_buffer_size) {
            warn!("[UDP] Unable to set receive buffer to {recv_buffer_size} bytes: {error}");
        }
        socket.set_reuse_address(reuse_address)?;
        socket.bind(&bind_address.into())?;
        socket.set_nonblocking(true)?;

        let std_socket: std::net::UdpSocket = socket.into();
        let tokio_socket = UdpSocket::from_std(std_socket)?;

        let sock_ref = socket2::SockRef::from(&tokio_socket);
        let actual_recv = sock_ref.recv_buffer_size().unwrap_or(0);
        info!("[UDP] Socket created with a receive buffer of {actual_recv} bytes");

        Ok(UdpServer {
            socket: Arc::new(tokio_socket),
            engine,
        })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.socket.local_addr()
    }

    /// Reads datagrams until `rx` is raised.
    pub async fn start(&self, mut rx: watch::Receiver<bool>)
    {
        let mut data = vec![0u8; MAX_DATAGRAM_SIZE];
        let mut packet_count = 0u64;
        let mut last_stats = Instant::now();

        loop {
            tokio::select! {
                biased;
                _ = async { let _ = rx.wait_for(|shutdown| *shutdown).await; } => {
                    break;
                }
                result = self.socket.recv_from(&mut data) => {
                    match result {
                        Ok((valid_bytes, remote_addr)) => {
                            packet_count += 1;
                            if packet_count.is_multiple_of(10_000) {
                                let elapsed = last_stats.elapsed();
                                debug!("[UDP] Received 10k packets in {:?} ({:.1} pps)", elapsed, 10_000.0 / elapsed.as_secs_f64());
                                last_stats = Instant::now();
                            }

                            debug!("[UDP] Received {valid_bytes} bytes from {remote_addr}");
                            let _ = self.engine.enqueue(Packet::from_datagram(&data[..valid_bytes], remote_addr));
                        }
                        Err(e) => {
                            if *rx.borrow() {
                                break;
                            }
                            match e.kind() {
                                std::io::ErrorKind::WouldBlock => {
                                    tokio::task::yield_now().await;
                                }
                                _ => {
                                    sentry::capture_error(&e);
                                    error!("[UDP] recv_from error: {e}");
                                }
                            }
                        }
                    }
                }
            }
        }

        match self.local_addr() {
            Ok(addr) => info!("[UDP] Stopping server listener on {addr}..."),
            Err(_) => info!("[UDP] Stopping server listener...")
        }
    }
}
