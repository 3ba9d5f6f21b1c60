use crossbeam::queue::ArrayQueue;
use tokio::sync::Notify;
use crate::engine::structs::packet::Packet;

pub struct IntakeQueue {
    pub(crate) payload: ArrayQueue<Packet>,
    pub(crate) available: Notify,
}
