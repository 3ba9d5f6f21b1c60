#![allow(dead_code)]
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{watch, Semaphore};
use aegis_netengine::config::structs::configuration::Configuration;
use aegis_netengine::config::structs::engine_config::EngineConfig;
use aegis_netengine::engine::enums::process_error::ProcessError;
use aegis_netengine::engine::structs::engine::Engine;
use aegis_netengine::engine::structs::packet::Packet;
use aegis_netengine::engine::traits::packet_processor::PacketProcessor;
use aegis_netengine::stats::structs::stats_atomics::StatsAtomics;

pub type TestEngine = Arc<Engine>;
pub type TestStats = Arc<StatsAtomics>;

/// Counts invocations and remembers every payload it saw.
#[derive(Default)]
pub struct RecordingProcessor {
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<Vec<u8>>>,
    pub latency: Duration,
}

impl RecordingProcessor {
    pub fn with_latency(latency: Duration) -> RecordingProcessor {
        RecordingProcessor {
            latency,
            ..Default::default()
        }
    }
}

#[async_trait]
impl PacketProcessor for RecordingProcessor {
    async fn process(&self, packet: &Packet) -> Result<(), ProcessError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.seen.lock().push(packet.as_bytes().to_vec());
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Holds every packet until a permit is released through `gate`.
pub struct GatedProcessor {
    pub gate: Semaphore,
    pub entered: AtomicUsize,
}

impl GatedProcessor {
    pub fn new() -> GatedProcessor {
        GatedProcessor {
            gate: Semaphore::new(0),
            entered: AtomicUsize::new(0),
        }
    }

    pub fn release(&self, permits: usize) {
        self.gate.add_permits(permits);
    }
}

#[async_trait]
impl PacketProcessor for GatedProcessor {
    async fn process(&self, _packet: &Packet) -> Result<(), ProcessError> {
        self.entered.fetch_add(1, Ordering::SeqCst);
        match self.gate.acquire().await {
            Ok(permit) => {
                permit.forget();
                Ok(())
            }
            Err(_) => Err(ProcessError::Failed(String::from("gate closed"))),
        }
    }
}

/// Fails every packet whose first byte is zero.
pub struct PickyProcessor;

#[async_trait]
impl PacketProcessor for PickyProcessor {
    async fn process(&self, packet: &Packet) -> Result<(), ProcessError> {
        match packet.as_bytes().first() {
            Some(0) | None => Err(ProcessError::Failed(String::from("zero marker"))),
            Some(_) => Ok(()),
        }
    }
}

pub fn engine_config(workers: usize, queue_capacity: usize) -> EngineConfig {
    EngineConfig {
        workers,
        queue_capacity,
        process_latency_ms: 0,
        process_timeout_ms: 0,
    }
}

pub fn create_test_engine(workers: usize, queue_capacity: usize, processor: Arc<dyn PacketProcessor>) -> (TestEngine, TestStats) {
    let stats = Arc::new(StatsAtomics::new());
    let engine = Engine::new(&engine_config(workers, queue_capacity), processor, stats.clone());
    (Arc::new(engine), stats)
}

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.udp_server.bind_address = String::from("127.0.0.1:0");
    config.http_server.bind_address = String::from("127.0.0.1:0");
    config.engine = engine_config(2, 64);
    config
}

pub fn cancel_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Polls `condition` every 10ms for up to two seconds.
pub async fn wait_until<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
