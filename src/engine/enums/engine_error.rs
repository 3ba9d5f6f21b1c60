use thiserror::Error;
use crate::engine::enums::engine_state::EngineState;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine cannot be started from state {0}")]
    AlreadyStarted(EngineState),

    #[error("no tokio runtime available to spawn workers: {0}")]
    RuntimeUnavailable(#[from] tokio::runtime::TryCurrentError),
}
