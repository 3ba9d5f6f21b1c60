use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use crate::engine::structs::intake_queue::IntakeQueue;
use crate::engine::traits::packet_processor::PacketProcessor;
use crate::stats::traits::telemetry_sink::TelemetrySink;

pub struct Worker {
    pub(crate) id: usize,
    pub(crate) queue: Arc<IntakeQueue>,
    pub(crate) processor: Arc<dyn PacketProcessor>,
    pub(crate) telemetry: Arc<dyn TelemetrySink>,
    pub(crate) process_timeout: Option<Duration>,
    pub(crate) cancel: watch::Receiver<bool>,
    pub(crate) stopped: watch::Receiver<bool>,
}
