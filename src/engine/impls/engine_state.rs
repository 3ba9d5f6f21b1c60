use std::fmt;
use crate::engine::enums::engine_state::EngineState;

impl From<u8> for EngineState {
    fn from(value: u8) -> Self {
        match value {
            0 => EngineState::Idle,
            1 => EngineState::Running,
            2 => EngineState::Draining,
            _ => EngineState::Terminated,
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Idle => write!(f, "idle"),
            EngineState::Running => write!(f, "running"),
            EngineState::Draining => write!(f, "draining"),
            EngineState::Terminated => write!(f, "terminated"),
        }
    }
}
