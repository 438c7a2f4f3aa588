use alloc::collections::VecDeque;

use super::handle::WaitHandle;

/// FIFO queue of waiter handles.
///
/// Wake order follows registration order. Only pending waiters are kept: a notified waiter is
/// removed by [`WaitQueue::notify_one`] and a cancelled one by [`WaitQueue::withdraw`].
#[derive(Debug, Default)]
pub struct WaitQueue {
  waiters: VecDeque<WaitHandle>,
}

impl WaitQueue {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { waiters: VecDeque::new() }
  }

  /// Registers a new waiter at the tail and returns its handle.
  pub fn register(&mut self) -> WaitHandle {
    let handle = WaitHandle::new();
    self.waiters.push_back(handle.clone());
    handle
  }

  /// Notifies the oldest pending waiter and removes it from the queue.
  ///
  /// Returns the notified handle so the caller can [`WaitHandle::wake`] it once its own lock is
  /// released, or `None` when nobody is waiting.
  pub fn notify_one(&mut self) -> Option<WaitHandle> {
    while let Some(handle) = self.waiters.pop_front() {
      if handle.notify() {
        return Some(handle);
      }
    }
    None
  }

  /// Cancels `handle` and removes it from the queue.
  ///
  /// Returns `false` when the waiter had already been notified, in which case the caller owns the
  /// notification and must consume a payload or pass it on.
  pub fn withdraw(&mut self, handle: &WaitHandle) -> bool {
    let cancelled = handle.cancel();
    if cancelled {
      self.waiters.retain(|registered| !registered.same_waiter(handle));
    }
    cancelled
  }

  /// Returns the number of pending waiters.
  #[must_use]
  pub fn len(&self) -> usize {
    self.waiters.len()
  }

  /// Returns `true` when nobody is waiting.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.waiters.is_empty()
  }
}
