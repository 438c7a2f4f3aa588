use alloc::collections::VecDeque;

use crate::wait::{WaitHandle, WaitQueue};

/// Payloads and pending waiters of one queue, always mutated together under one lock.
pub(crate) struct QueueState<M> {
  pub(crate) items:   VecDeque<M>,
  pub(crate) waiters: WaitQueue,
}

impl<M> QueueState<M> {
  pub(crate) const fn new() -> Self {
    Self { items: VecDeque::new(), waiters: WaitQueue::new() }
  }

  /// Drops a waiter that will not consume anything.
  ///
  /// A still-pending waiter is simply withdrawn. A waiter that had already been notified owns a
  /// notification; if payloads remain it is passed to the next waiter, whose handle is returned
  /// for waking after the lock is released.
  pub(crate) fn release_waiter(&mut self, waiter: &WaitHandle) -> Option<WaitHandle> {
    if self.waiters.withdraw(waiter) || self.items.is_empty() {
      None
    } else {
      self.waiters.notify_one()
    }
  }
}
