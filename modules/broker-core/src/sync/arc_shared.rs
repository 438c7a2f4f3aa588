use alloc::sync::Arc;
use core::{fmt, ops::Deref};


/// Shared ownership wrapper backed by [`alloc::sync::Arc`].
///
/// Handles compare by identity through [`ArcShared::ptr_eq`], which is how waiter handles are
/// located inside a wait queue.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }
}

impl<T: ?Sized> ArcShared<T> {
  /// Returns `true` when both handles point to the same allocation.
  #[must_use]
  pub fn ptr_eq(this: &Self, other: &Self) -> bool {
    Arc::ptr_eq(&this.0, &other.0)
  }

  /// Returns the number of live handles sharing the value.
  #[must_use]
  pub fn strong_count(this: &Self) -> usize {
    Arc::strong_count(&this.0)
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArcShared").finish()
  }
}
