use async_trait::async_trait;
use crate::engine::enums::process_error::ProcessError;
use crate::engine::structs::packet::Packet;

/// The per-packet processing step run by every worker.
///
/// Implementations must not call back into `Engine::enqueue` and must not block
/// the executor thread. A worker runs one call to completion before it looks at
/// the queue or the cancellation signal again, so the latency of `process` is
/// what bounds both throughput and shutdown time.
#[async_trait]
pub trait PacketProcessor: Send + Sync {
    async fn process(&self, packet: &Packet) -> Result<(), ProcessError>;
}
