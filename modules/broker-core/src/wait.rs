mod handle;
mod node;
mod wait_queue;

#[cfg(test)]
mod tests;

pub use handle::WaitHandle;
pub use wait_queue::WaitQueue;
