use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stats::traits::telemetry_sink::TelemetrySink;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(chrono::Utc::now().timestamp(), Ordering::SeqCst);
        stats
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            packets_accepted: self.packets_accepted.load(Ordering::SeqCst),
            packets_dropped: self.packets_dropped.load(Ordering::SeqCst),
            packets_rejected: self.packets_rejected.load(Ordering::SeqCst),
            packets_processed: self.packets_processed.load(Ordering::SeqCst),
            packets_failed: self.packets_failed.load(Ordering::SeqCst),
            bytes_processed: self.bytes_processed.load(Ordering::SeqCst),
            workers_active: self.workers_active.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.apply(event, value);
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }

    fn apply(&self, event: StatsEvent, value: i64)
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::PacketsAccepted => &self.packets_accepted,
            StatsEvent::PacketsDropped => &self.packets_dropped,
            StatsEvent::PacketsRejected => &self.packets_rejected,
            StatsEvent::PacketsProcessed => &self.packets_processed,
            StatsEvent::PacketsFailed => &self.packets_failed,
            StatsEvent::BytesProcessed => &self.bytes_processed,
            StatsEvent::WorkersActive => &self.workers_active,
        }
    }
}

impl TelemetrySink for StatsAtomics {
    fn update_stats(&self, event: StatsEvent, value: i64) {
        self.apply(event, value);
    }
}
