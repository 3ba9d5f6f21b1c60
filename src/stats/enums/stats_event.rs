//! Statistics event types for tracking engine metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with [`TelemetrySink::update_stats`] to move the matching counter.
/// Counters only ever receive positive values; `WorkersActive` is a gauge and
/// receives `1` / `-1` as workers enter and leave their loop.
///
/// [`TelemetrySink::update_stats`]: crate::stats::traits::telemetry_sink::TelemetrySink::update_stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatsEvent {
    PacketsAccepted,
    PacketsDropped,
    PacketsRejected,
    PacketsProcessed,
    PacketsFailed,
    BytesProcessed,
    WorkersActive,
}
