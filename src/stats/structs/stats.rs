use serde::{Deserialize, Serialize};

/// Point-in-time copy of [`StatsAtomics`](crate::stats::structs::stats_atomics::StatsAtomics).
///
/// Values are read one by one, so a snapshot taken under load is not a
/// consistent cut across counters; each individual counter is still
/// monotonically non-decreasing between snapshots.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub packets_accepted: i64,
    pub packets_dropped: i64,
    pub packets_rejected: i64,
    pub packets_processed: i64,
    pub packets_failed: i64,
    pub bytes_processed: i64,
    pub workers_active: i64,
}
