
use dashmap::DashMap;
use pollq_broker_core_rs::{ArcShared, MessageQueue};
use tracing::debug;

/// Concurrent mapping from queue name to its [`MessageQueue`].
///
/// Queues are created lazily by producers and never removed. Lookups take a shard read lock;
/// creation takes the shard write lock, so concurrent first writers of one name all observe the
/// same instance.
pub struct QueueRegistry<M> {
  queues: DashMap<String, ArcShared<MessageQueue<M>>>,
}

impl<M> QueueRegistry<M> {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { queues: DashMap::new() }
  }

  /// Looks up an existing queue without creating it.
  #[must_use]
  pub fn resolve(&self, name: &str) -> Option<ArcShared<MessageQueue<M>>> {
    self.queues.get(name).map(|entry| entry.value().clone())
  }

  /// Returns the queue registered under `name`, creating an empty one if absent.
  #[must_use]
  pub fn resolve_or_create(&self, name: &str) -> ArcShared<MessageQueue<M>> {
    if let Some(queue) = self.resolve(name) {
      return queue;
    }
    self
      .queues
      .entry(name.to_owned())
      .or_insert_with(|| {
        debug!(queue = name, "queue created");
        ArcShared::new(MessageQueue::new())
      })
      .value()
      .clone()
  }

  /// Returns `true` when a queue exists under `name`.
  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.queues.contains_key(name)
  }

  /// Returns the number of queues ever created.
  #[must_use]
  pub fn len(&self) -> usize {
    self.queues.len()
  }

  /// Returns `true` when no queue has been created yet.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.queues.is_empty()
  }
}

impl<M> Default for QueueRegistry<M> {
  fn default() -> Self {
    Self::new()
  }
}
