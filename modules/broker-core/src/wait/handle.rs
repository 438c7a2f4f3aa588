use core::{
  fmt,
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::node::WaitNode;
use crate::sync::ArcShared;

/// Handle to one registered waiter.
///
/// Awaiting the handle completes once the owning [`WaitQueue`](super::WaitQueue) notifies it.
/// A cancelled handle never completes. Clones refer to the same waiter.
#[derive(Clone)]
pub struct WaitHandle {
  node: ArcShared<WaitNode>,
}

impl WaitHandle {
  pub(crate) fn new() -> Self {
    Self { node: ArcShared::new(WaitNode::new()) }
  }

  /// Returns `true` while the waiter is neither notified nor cancelled.
  #[must_use]
  pub fn is_pending(&self) -> bool {
    self.node.is_pending()
  }

  /// Returns `true` once the waiter has been told that a payload may be available.
  #[must_use]
  pub fn is_notified(&self) -> bool {
    self.node.is_notified()
  }

  /// Returns `true` when both handles refer to the same waiter.
  #[must_use]
  pub fn same_waiter(&self, other: &Self) -> bool {
    ArcShared::ptr_eq(&self.node, &other.node)
  }

  /// Wakes the task awaiting this handle.
  ///
  /// Called after the notification was fired and the queue lock has been released.
  pub fn wake(&self) {
    self.node.wake();
  }

  pub(crate) fn notify(&self) -> bool {
    self.node.notify()
  }

  pub(crate) fn cancel(&self) -> bool {
    self.node.cancel()
  }
}

impl Future for WaitHandle {
  type Output = ();

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    if self.node.register_waker(cx.waker()) {
      Poll::Ready(())
    } else {
      Poll::Pending
    }
  }
}

impl fmt::Debug for WaitHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WaitHandle").field("pending", &self.is_pending()).field("notified", &self.is_notified()).finish()
  }
}
