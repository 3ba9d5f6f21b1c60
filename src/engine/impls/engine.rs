use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;
use futures_util::future::join_all;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use crate::config::structs::engine_config::EngineConfig;
use crate::engine::engine::DEFAULT_WORKERS;
use crate::engine::enums::engine_error::EngineError;
use crate::engine::enums::engine_state::EngineState;
use crate::engine::enums::enqueue_outcome::EnqueueOutcome;
use crate::engine::structs::engine::Engine;
use crate::engine::structs::intake_queue::IntakeQueue;
use crate::engine::structs::packet::Packet;
use crate::engine::structs::worker::Worker;
use crate::engine::traits::packet_processor::PacketProcessor;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::traits::telemetry_sink::TelemetrySink;

impl Engine {
    /// Builds an idle engine. Zero workers or a zero queue capacity fall back to
    /// the defaults.
    pub fn new(config: &EngineConfig, processor: Arc<dyn PacketProcessor>, telemetry: Arc<dyn TelemetrySink>) -> Engine
    {
        let workers = if config.workers == 0 { DEFAULT_WORKERS } else { config.workers };
        let process_timeout = match config.process_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };
        let (stopped, _) = watch::channel(false);

        Engine {
            workers,
            process_timeout,
            queue: Arc::new(IntakeQueue::new(config.queue_capacity)),
            processor,
            telemetry,
            state: AtomicU8::new(EngineState::Idle as u8),
            stopped,
            handles: Mutex::new(Vec::with_capacity(workers)),
        }
    }

    /// Spawns the worker pool on the current tokio runtime.
    ///
    /// Workers exit when `cancel` turns `true` or when [`Engine::stop`] is
    /// called, whichever comes first. Only valid from [`EngineState::Idle`].
    pub fn start(&self, cancel: watch::Receiver<bool>) -> Result<(), EngineError>
    {
        let mut handles = self.handles.lock();

        if let Err(current) = self.state.compare_exchange(
            EngineState::Idle as u8,
            EngineState::Running as u8,
            Ordering::SeqCst,
            Ordering::SeqCst
        ) {
            let state = EngineState::from(current);
            warn!("[ENGINE] Start requested while {state}, ignoring");
            return Err(EngineError::AlreadyStarted(state));
        }

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(error) => {
                self.state.store(EngineState::Idle as u8, Ordering::SeqCst);
                error!("[ENGINE] Unable to start workers: {error}");
                return Err(EngineError::RuntimeUnavailable(error));
            }
        };

        for id in 0..self.workers {
            let worker = Worker {
                id,
                queue: self.queue.clone(),
                processor: self.processor.clone(),
                telemetry: self.telemetry.clone(),
                process_timeout: self.process_timeout,
                cancel: cancel.clone(),
                stopped: self.stopped.subscribe(),
            };
            handles.push(runtime.spawn(worker.run()));
        }

        info!("[ENGINE] Engine started with {} workers and a queue capacity of {}", self.workers, self.queue.capacity());
        Ok(())
    }

    /// Offers a packet to the intake queue without ever blocking.
    pub fn enqueue(&self, packet: Packet) -> EnqueueOutcome
    {
        if self.is_stopping() {
            self.telemetry.update_stats(StatsEvent::PacketsRejected, 1);
            debug!("[ENGINE] Engine is {}, discarding packet of {} bytes", self.state(), packet.len());
            return EnqueueOutcome::Closed;
        }

        match self.queue.offer(packet) {
            Ok(()) => {
                self.telemetry.update_stats(StatsEvent::PacketsAccepted, 1);
                EnqueueOutcome::Accepted
            }
            Err(packet) => {
                self.telemetry.update_stats(StatsEvent::PacketsDropped, 1);
                warn!("[ENGINE] Queue full, dropping packet of {} bytes", packet.len());
                EnqueueOutcome::Dropped
            }
        }
    }

    /// Raises the stop signal and waits for every worker to exit.
    ///
    /// Packets a worker is already processing are finished; packets still
    /// queued are discarded. Once this returns no counter moves anymore.
    ///
    /// Every worker holds a receiver of the stop signal until it leaves its
    /// loop, so the wait ends when the signal has no receivers left. Concurrent
    /// and repeated calls all wait on that same condition, and a call that is
    /// dropped half-way leaves nothing behind for the next one.
    pub async fn stop(&self)
    {
        let previous = EngineState::from(self.state.fetch_max(EngineState::Draining as u8, Ordering::SeqCst));
        self.stopped.send_replace(true);

        // A concurrent start() spawns its workers while holding this lock.
        drop(self.handles.lock());

        if previous < EngineState::Draining {
            info!("[ENGINE] Engine stopping from {previous}: waiting for {} workers", self.stopped.receiver_count());
        }
        self.stopped.closed().await;

        let handles = std::mem::take(&mut *self.handles.lock());
        for result in join_all(handles).await {
            if let Err(error) = result {
                error!("[ENGINE] Worker exited abnormally: {error}");
            }
        }

        if self.state.swap(EngineState::Terminated as u8, Ordering::SeqCst) != EngineState::Terminated as u8 {
            info!("[ENGINE] Engine stopped, {} packets left unprocessed in the queue", self.queue.len());
        }
    }

    pub fn state(&self) -> EngineState
    {
        EngineState::from(self.state.load(Ordering::SeqCst))
    }

    pub fn is_stopping(&self) -> bool
    {
        self.state() >= EngineState::Draining
    }

    pub fn workers(&self) -> usize
    {
        self.workers
    }

    pub fn queue_len(&self) -> usize
    {
        self.queue.len()
    }

    pub fn queue_capacity(&self) -> usize
    {
        self.queue.capacity()
    }
}
