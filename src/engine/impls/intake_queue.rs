use crossbeam::queue::ArrayQueue;
use tokio::sync::Notify;
use crate::engine::engine::DEFAULT_QUEUE_CAPACITY;
use crate::engine::structs::intake_queue::IntakeQueue;
use crate::engine::structs::packet::Packet;

impl IntakeQueue {
    /// A capacity of zero falls back to [`DEFAULT_QUEUE_CAPACITY`].
    pub fn new(capacity: usize) -> IntakeQueue {
        let capacity = if capacity == 0 { DEFAULT_QUEUE_CAPACITY } else { capacity };
        IntakeQueue {
            payload: ArrayQueue::new(capacity),
            available: Notify::new(),
        }
    }

    /// Admits `packet` without blocking, or hands it back if the queue is full.
    pub fn offer(&self, packet: Packet) -> Result<(), Packet> {
        self.payload.push(packet)?;
        self.available.notify_one();
        Ok(())
    }

    pub fn try_take(&self) -> Option<Packet> {
        self.payload.pop()
    }

    /// Waits until a packet is available and takes it, oldest first.
    ///
    /// The packet is only removed from the queue in the poll that returns it,
    /// so dropping this future never loses a packet.
    pub async fn take(&self) -> Packet {
        loop {
            let notified = self.available.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if let Some(packet) = self.payload.pop() {
                return packet;
            }

            notified.await;
        }
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.payload.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.payload.capacity()
    }
}
