use std::sync::Arc;
use std::sync::atomic::AtomicU8;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::engine::structs::intake_queue::IntakeQueue;
use crate::engine::traits::packet_processor::PacketProcessor;
use crate::stats::traits::telemetry_sink::TelemetrySink;

pub struct Engine {
    pub(crate) workers: usize,
    pub(crate) process_timeout: Option<Duration>,
    pub(crate) queue: Arc<IntakeQueue>,
    pub(crate) processor: Arc<dyn PacketProcessor>,
    pub(crate) telemetry: Arc<dyn TelemetrySink>,
    pub(crate) state: AtomicU8,
    pub(crate) stopped: watch::Sender<bool>,
    pub(crate) handles: Mutex<Vec<JoinHandle<()>>>,
}
