//! UDP ingress adapter.
//!
//! Binds a datagram socket, reads one datagram at a time into a reusable
//! buffer and hands a private copy of every payload to the engine. Reading never
//! waits on the engine: admission is non-blocking and a full queue sheds the
//! packet on the engine side.
//!
//! # Socket Setup
//!
//! The socket is created with `socket2` so the receive buffer and
//! `SO_REUSEADDR` can be tuned before binding, then converted into a
//! `tokio::net::UdpSocket`.
//!
//! # Shutdown
//!
//! The receive loop watches the same `watch` channel the supervisor uses to
//! cancel the workers. A read error while that channel is raised ends the loop;
//! any other read error is logged and reading continues.

/// Implementation blocks for the UDP server.
pub mod impls;

/// UDP server data structures.
pub mod structs;

/// Service entry point and protocol constants.
#[allow(clippy::module_inception)]
pub mod udp;
