/// What happened to a packet handed to `Engine::enqueue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
    /// Admitted into the intake queue; a worker will process it.
    Accepted,
    /// The queue was at capacity and the packet was shed.
    Dropped,
    /// The engine is stopping or stopped and no longer admits work.
    Closed,
}
