use core::task::Waker;

use portable_atomic::{AtomicU8, Ordering};
use spin::Mutex;

const STATE_PENDING: u8 = 0;
const STATE_NOTIFIED: u8 = 1;
const STATE_CANCELLED: u8 = 2;

/// Internal node representing a single suspended consumer.
///
/// The state moves from pending to exactly one of notified or cancelled and never back.
pub(crate) struct WaitNode {
  state: AtomicU8,
  waker: Mutex<Option<Waker>>,
}

impl WaitNode {
  /// Creates a new pending waiter node.
  pub(crate) const fn new() -> Self {
    Self { state: AtomicU8::new(STATE_PENDING), waker: Mutex::new(None) }
  }

  /// Fires the notification. Returns `false` when the node already left the pending state.
  pub(crate) fn notify(&self) -> bool {
    self.state.compare_exchange(STATE_PENDING, STATE_NOTIFIED, Ordering::AcqRel, Ordering::Acquire).is_ok()
  }

  /// Marks the node as cancelled. Returns `false` when it had already been notified or cancelled.
  pub(crate) fn cancel(&self) -> bool {
    if self.state.compare_exchange(STATE_PENDING, STATE_CANCELLED, Ordering::AcqRel, Ordering::Acquire).is_ok() {
      self.waker.lock().take();
      true
    } else {
      false
    }
  }

  pub(crate) fn is_pending(&self) -> bool {
    self.state.load(Ordering::Acquire) == STATE_PENDING
  }

  pub(crate) fn is_notified(&self) -> bool {
    self.state.load(Ordering::Acquire) == STATE_NOTIFIED
  }

  /// Stores the waker and reports whether the notification has already fired.
  ///
  /// The state is re-read after the waker is published, so a concurrent [`WaitNode::notify`]
  /// either observes the new waker or is observed here.
  pub(crate) fn register_waker(&self, waker: &Waker) -> bool {
    {
      let mut slot = self.waker.lock();
      match slot.as_ref() {
        | Some(current) if current.will_wake(waker) => {},
        | _ => *slot = Some(waker.clone()),
      }
    }
    self.is_notified()
  }

  /// Wakes the task parked on this node, if any.
  pub(crate) fn wake(&self) {
    let waker = self.waker.lock().take();
    if let Some(waker) = waker {
      waker.wake();
    }
  }
}
