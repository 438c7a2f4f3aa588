mod dequeue;
mod message_queue;
mod queue_state;


pub use dequeue::Dequeue;
pub use message_queue::MessageQueue;
