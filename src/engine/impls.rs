pub mod engine;
pub mod engine_state;
pub mod fixed_latency_processor;
pub mod intake_queue;
pub mod packet;
pub mod worker;
