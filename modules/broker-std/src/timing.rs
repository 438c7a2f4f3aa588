
use std::time::Duration;

use tokio::time::{sleep, Sleep};

/// Converts a long-poll timeout into a Tokio deadline.
///
/// A zero timeout yields `None`, which makes the dequeue fail fast instead of suspending. The
/// deadline is fixed when this is called, so a consumer that has to wait again after losing a
/// payload keeps its original expiry.
#[must_use]
pub fn deadline_after(timeout: Duration) -> Option<Sleep> {
  if timeout.is_zero() {
    None
  } else {
    Some(sleep(timeout))
  }
}
