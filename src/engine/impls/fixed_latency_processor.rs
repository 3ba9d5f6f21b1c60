use std::time::Duration;
use async_trait::async_trait;
use crate::engine::engine::DEFAULT_PROCESS_LATENCY_MS;
use crate::engine::enums::process_error::ProcessError;
use crate::engine::structs::fixed_latency_processor::FixedLatencyProcessor;
use crate::engine::structs::packet::Packet;
use crate::engine::traits::packet_processor::PacketProcessor;

impl FixedLatencyProcessor {
    pub fn new(latency: Duration) -> FixedLatencyProcessor {
        FixedLatencyProcessor { latency }
    }
}

impl Default for FixedLatencyProcessor {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_PROCESS_LATENCY_MS))
    }
}

#[async_trait]
impl PacketProcessor for FixedLatencyProcessor {
    async fn process(&self, _packet: &Packet) -> Result<(), ProcessError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(())
    }
}
