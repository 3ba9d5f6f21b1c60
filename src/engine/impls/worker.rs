use log::{debug, warn};
use crate::engine::engine::cancelled;
use crate::engine::enums::process_error::ProcessError;
use crate::engine::structs::packet::Packet;
use crate::engine::structs::worker::Worker;
use crate::stats::enums::stats_event::StatsEvent;

impl Worker {
    pub async fn run(mut self)
    {
        debug!("[WORKER] Worker {} started", self.id);
        self.telemetry.update_stats(StatsEvent::WorkersActive, 1);
        loop {
            tokio::select! {
                biased;
                _ = cancelled(&mut self.cancel, &mut self.stopped) => {
                    debug!("[WORKER] Worker {} received cancellation, exiting", self.id);
                    break;
                }
                packet = self.queue.take() => {
                    self.handle(packet).await;
                }
            }
        }
        self.telemetry.update_stats(StatsEvent::WorkersActive, -1);
    }

    async fn handle(&self, packet: Packet)
    {
        let size = packet.len();
        let result = match self.process_timeout {
            Some(deadline) => tokio::time::timeout(deadline, self.processor.process(&packet))
                .await
                .unwrap_or(Err(ProcessError::Timeout(deadline))),
            None => self.processor.process(&packet).await,
        };

        match result {
            Ok(()) => {
                self.telemetry.update_stats(StatsEvent::BytesProcessed, size as i64);
                self.telemetry.update_stats(StatsEvent::PacketsProcessed, 1);
                debug!("[WORKER] Worker {} processed packet of {size} bytes", self.id);
            }
            Err(error) => {
                self.telemetry.update_stats(StatsEvent::PacketsFailed, 1);
                sentry::capture_error(&error);
                match packet.remote_addr {
                    Some(remote_addr) => warn!("[WORKER] Worker {} failed packet of {size} bytes from {remote_addr}: {error}", self.id),
                    None => warn!("[WORKER] Worker {} failed packet of {size} bytes: {error}", self.id),
                }
            }
        }
    }
}
