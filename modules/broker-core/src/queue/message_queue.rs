use core::future::Future;

use spin::{Mutex, MutexGuard};

use super::{dequeue::Dequeue, queue_state::QueueState};

/// FIFO payload queue for a single name, with its waiter hand-off coordinator.
///
/// Payloads and waiters share one lock, which is only ever held for the duration of a buffer or
/// waiter-list mutation and never across a suspension.
pub struct MessageQueue<M> {
  state: Mutex<QueueState<M>>,
}

impl<M> MessageQueue<M> {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { state: Mutex::new(QueueState::new()) }
  }

  /// Appends `message` to the tail and notifies the oldest waiter, if any.
  ///
  /// Never blocks. The notified waiter is only told to re-check the queue; it is not handed the
  /// message directly.
  pub fn enqueue(&self, message: M) {
    let notified = {
      let mut state = self.lock_state();
      state.items.push_back(message);
      state.waiters.notify_one()
    };
    if let Some(waiter) = notified {
      waiter.wake();
    }
  }

  /// Pops the head without suspending.
  #[must_use]
  pub fn try_dequeue(&self) -> Option<M> {
    self.lock_state().items.pop_front()
  }

  /// Pops the head, suspending until a payload arrives or `deadline` completes.
  ///
  /// A `None` deadline fails fast: the returned future resolves immediately with whatever
  /// [`MessageQueue::try_dequeue`] would return. Otherwise the future resolves to `None` only
  /// after `deadline` has completed without this consumer having been notified.
  pub fn dequeue<D>(&self, deadline: Option<D>) -> Dequeue<'_, M, D>
  where
    D: Future<Output = ()>, {
    Dequeue::new(self, deadline)
  }

  /// Returns the number of buffered payloads.
  #[must_use]
  pub fn len(&self) -> usize {
    self.lock_state().items.len()
  }

  /// Returns `true` when no payload is buffered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lock_state().items.is_empty()
  }

  /// Returns the number of consumers currently suspended on this queue.
  #[must_use]
  pub fn waiter_count(&self) -> usize {
    self.lock_state().waiters.len()
  }

  pub(super) fn lock_state(&self) -> MutexGuard<'_, QueueState<M>> {
    self.state.lock()
  }
}

impl<M> Default for MessageQueue<M> {
  fn default() -> Self {
    Self::new()
  }
}
