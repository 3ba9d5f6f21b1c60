use std::time::Duration;
use thiserror::Error;

/// Failure of a single processing step.
///
/// A failed packet is counted as `PacketsFailed`, never as processed.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("processing failed: {0}")]
    Failed(String),

    #[error("processing exceeded its deadline of {0:?}")]
    Timeout(Duration),
}
