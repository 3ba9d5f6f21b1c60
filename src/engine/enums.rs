pub mod engine_error;
pub mod engine_state;
pub mod enqueue_outcome;
pub mod process_error;
