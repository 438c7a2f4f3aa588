use std::{fmt, time::Duration};

use hyper::Method;
use pollq_broker_core_rs::ArcShared;
use tracing::debug;

use super::{BrokerError, BrokerReply, BrokerRequest, Payload};
use crate::{registry::QueueRegistry, timing::deadline_after};

/// Request handler shared by every connection.
///
/// Cloning is cheap; clones operate on the same [`QueueRegistry`].
#[derive(Clone)]
pub struct BrokerService {
  registry: ArcShared<QueueRegistry<Payload>>,
}

impl BrokerService {
  /// Creates a service backed by a fresh, empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self::with_registry(ArcShared::new(QueueRegistry::new()))
  }

  /// Creates a service backed by an existing registry.
  #[must_use]
  pub const fn with_registry(registry: ArcShared<QueueRegistry<Payload>>) -> Self {
    Self { registry }
  }

  /// Returns the registry this service dispatches onto.
  #[must_use]
  pub fn registry(&self) -> &QueueRegistry<Payload> {
    &self.registry
  }

  /// Parses and executes a request.
  ///
  /// # Errors
  ///
  /// Returns the [`BrokerError`] produced by [`BrokerRequest::parse`] or by the operation itself.
  pub async fn dispatch(&self, method: &Method, path: &str, query: Option<&str>) -> Result<BrokerReply, BrokerError> {
    let request = BrokerRequest::parse(method, path, query).inspect_err(|error| {
      debug!(%method, path, %error, "request rejected");
    })?;
    self.handle(request).await
  }

  /// Executes an already validated request.
  ///
  /// # Errors
  ///
  /// Returns [`BrokerError::NotFound`] when a dequeue finds no payload in time.
  pub async fn handle(&self, request: BrokerRequest) -> Result<BrokerReply, BrokerError> {
    match request {
      | BrokerRequest::Enqueue { queue, value } => {
        self.enqueue(&queue, value);
        Ok(BrokerReply::Enqueued)
      },
      | BrokerRequest::Dequeue { queue, timeout } => self.dequeue(&queue, timeout).await.map(BrokerReply::Delivered),
    }
  }

  /// Appends `value` to `queue`, creating the queue on first use.
  pub fn enqueue(&self, queue: &str, value: Payload) {
    let target = self.registry.resolve_or_create(queue);
    target.enqueue(value);
    debug!(queue, buffered = target.len(), "payload enqueued");
  }

  /// Takes the head of `queue`, waiting up to `timeout` when it is empty.
  ///
  /// Queues are never created by readers.
  ///
  /// # Errors
  ///
  /// Returns [`BrokerError::NotFound`] when the queue does not exist, or when it is empty and
  /// stays empty for the whole `timeout`.
  pub async fn dequeue(&self, queue: &str, timeout: Duration) -> Result<Payload, BrokerError> {
    let Some(target) = self.registry.resolve(queue) else {
      debug!(queue, "dequeue on unknown queue");
      return Err(BrokerError::NotFound);
    };
    match target.dequeue(deadline_after(timeout)).await {
      | Some(payload) => {
        debug!(queue, "payload delivered");
        Ok(payload)
      },
      | None => {
        debug!(queue, timeout_secs = timeout.as_secs(), "no payload within timeout");
        Err(BrokerError::NotFound)
      },
    }
  }
}

impl Default for BrokerService {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for BrokerService {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BrokerService").field("queues", &self.registry.len()).finish()
  }
}
