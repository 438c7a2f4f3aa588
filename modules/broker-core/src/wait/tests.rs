extern crate std;

use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll, Waker},
};
use std::{
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
  },
  task::Wake,
};

use super::{WaitHandle, WaitQueue};

struct CountingWaker(AtomicUsize);

impl Wake for CountingWaker {
  fn wake(self: Arc<Self>) {
    self.0.fetch_add(1, Ordering::SeqCst);
  }
}

fn counting_waker() -> (Arc<CountingWaker>, Waker) {
  let counter = Arc::new(CountingWaker(AtomicUsize::new(0)));
  let waker = Waker::from(counter.clone());
  (counter, waker)
}

fn poll_handle(handle: &mut WaitHandle, waker: &Waker) -> Poll<()> {
  let mut cx = Context::from_waker(waker);
  Pin::new(handle).poll(&mut cx)
}

#[test]
fn notify_one_follows_registration_order() {
  let mut queue = WaitQueue::new();
  let first = queue.register();
  let second = queue.register();
  let third = queue.register();
  assert_eq!(queue.len(), 3);

  let notified = queue.notify_one().expect("first waiter");
  assert!(notified.same_waiter(&first));
  assert!(first.is_notified());
  assert!(second.is_pending());
  assert!(third.is_pending());
  assert_eq!(queue.len(), 2);

  let notified = queue.notify_one().expect("second waiter");
  assert!(notified.same_waiter(&second));
}

#[test]
fn notify_one_on_empty_queue_returns_none() {
  let mut queue = WaitQueue::new();
  assert!(queue.is_empty());
  assert!(queue.notify_one().is_none());
}

#[test]
fn withdrawn_waiter_is_skipped() {
  let mut queue = WaitQueue::new();
  let first = queue.register();
  let second = queue.register();

  assert!(queue.withdraw(&first));
  assert!(!first.is_pending());
  assert_eq!(queue.len(), 1);

  let notified = queue.notify_one().expect("remaining waiter");
  assert!(notified.same_waiter(&second));
  assert!(!first.is_notified());
}

#[test]
fn withdraw_after_notification_reports_ownership() {
  let mut queue = WaitQueue::new();
  let waiter = queue.register();
  let _ = queue.notify_one();

  assert!(!queue.withdraw(&waiter));
  assert!(waiter.is_notified());
}

#[test]
fn handle_completes_after_notification_and_wake() {
  let (counter, waker) = counting_waker();
  let mut queue = WaitQueue::new();
  let mut waiter = queue.register();

  assert_eq!(poll_handle(&mut waiter, &waker), Poll::Pending);

  let notified = queue.notify_one().expect("registered waiter");
  assert_eq!(counter.0.load(Ordering::SeqCst), 0);
  notified.wake();
  assert_eq!(counter.0.load(Ordering::SeqCst), 1);

  assert_eq!(poll_handle(&mut waiter, &waker), Poll::Ready(()));
}

#[test]
fn cancelled_handle_stays_pending() {
  let (counter, waker) = counting_waker();
  let mut queue = WaitQueue::new();
  let mut waiter = queue.register();

  assert_eq!(poll_handle(&mut waiter, &waker), Poll::Pending);
  assert!(queue.withdraw(&waiter));
  assert!(queue.notify_one().is_none());

  assert_eq!(poll_handle(&mut waiter, &waker), Poll::Pending);
  assert_eq!(counter.0.load(Ordering::SeqCst), 0);
}
