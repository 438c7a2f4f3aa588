use alloc::boxed::Box;
use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::message_queue::MessageQueue;
use crate::wait::WaitHandle;

/// Future returned by [`MessageQueue::dequeue`].
///
/// Resolves to the oldest payload, or to `None` when the deadline elapses first. Dropping the
/// future before completion withdraws its waiter; if the waiter had already been notified the
/// notification is handed to the next waiter instead of being lost.
#[must_use = "futures do nothing unless polled"]
pub struct Dequeue<'a, M, D> {
  queue:    &'a MessageQueue<M>,
  deadline: Option<Pin<Box<D>>>,
  waiter:   Option<WaitHandle>,
}

impl<'a, M, D> Dequeue<'a, M, D>
where
  D: Future<Output = ()>,
{
  pub(super) fn new(queue: &'a MessageQueue<M>, deadline: Option<D>) -> Self {
    Self { queue, deadline: deadline.map(Box::pin), waiter: None }
  }

  /// Claims the head, or makes sure a waiter is parked at the tail.
  fn claim_or_register(&mut self) -> Option<Option<M>> {
    let mut state = self.queue.lock_state();
    if let Some(message) = state.items.pop_front() {
      if let Some(waiter) = self.waiter.take() {
        state.waiters.withdraw(&waiter);
      }
      return Some(Some(message));
    }
    if self.deadline.is_none() {
      return Some(None);
    }
    match &self.waiter {
      | Some(waiter) if waiter.is_pending() => {},
      // first suspension, or notified but the payload was claimed by someone else
      | _ => self.waiter = Some(state.waiters.register()),
    }
    None
  }

  /// Resolves a waiter whose deadline has elapsed.
  fn expire(&mut self) -> Option<M> {
    let waiter = self.waiter.take()?;
    let mut state = self.queue.lock_state();
    if state.waiters.withdraw(&waiter) {
      return None;
    }
    // notified while expiring: the notification counts as fulfilment. An empty buffer means the
    // payload was already claimed, so there is nothing to relay.
    state.items.pop_front()
  }
}

impl<M, D> Unpin for Dequeue<'_, M, D> {}

impl<M, D> Future for Dequeue<'_, M, D>
where
  D: Future<Output = ()>,
{
  type Output = Option<M>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();
    loop {
      if let Some(outcome) = this.claim_or_register() {
        return Poll::Ready(outcome);
      }

      let Some(waiter) = this.waiter.as_mut() else {
        return Poll::Ready(None);
      };
      if Pin::new(waiter).poll(cx).is_ready() {
        continue;
      }

      let Some(deadline) = this.deadline.as_mut() else {
        return Poll::Ready(None);
      };
      return match deadline.as_mut().poll(cx) {
        | Poll::Ready(()) => Poll::Ready(this.expire()),
        | Poll::Pending => Poll::Pending,
      };
    }
  }
}

impl<M, D> Drop for Dequeue<'_, M, D> {
  fn drop(&mut self) {
    let Some(waiter) = self.waiter.take() else {
      return;
    };
    let handoff = self.queue.lock_state().release_waiter(&waiter);
    if let Some(next) = handoff {
      next.wake();
    }
  }
}
