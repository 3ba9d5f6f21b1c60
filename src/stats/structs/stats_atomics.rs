use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub packets_accepted: AtomicI64,
    pub packets_dropped: AtomicI64,
    pub packets_rejected: AtomicI64,
    pub packets_processed: AtomicI64,
    pub packets_failed: AtomicI64,
    pub bytes_processed: AtomicI64,
    pub workers_active: AtomicI64,
}
