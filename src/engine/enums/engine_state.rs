/// Lifecycle of an [`Engine`](crate::engine::structs::engine::Engine).
///
/// Stored as an `AtomicU8` inside the engine, hence the explicit discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum EngineState {
    Idle = 0,
    Running = 1,
    Draining = 2,
    Terminated = 3,
}
