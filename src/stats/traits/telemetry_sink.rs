use crate::stats::enums::stats_event::StatsEvent;

/// Destination for engine telemetry.
///
/// The engine holds an `Arc<dyn TelemetrySink>` and reports every admission,
/// drop and completion through it. Implementations must be cheap and must not
/// block: `update_stats` is called on the ingress path and from every worker.
pub trait TelemetrySink: Send + Sync {
    fn update_stats(&self, event: StatsEvent, value: i64);
}
