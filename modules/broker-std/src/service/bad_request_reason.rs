/// Which part of a request failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BadRequestReason {
  /// The path does not name a queue.
  #[error("queue name is missing")]
  MissingQueueName,
  /// The percent-decoded queue name is not valid UTF-8.
  #[error("queue name is not valid UTF-8")]
  InvalidQueueName,
  /// An enqueue carried no `v` parameter, or an empty one.
  #[error("payload parameter `v` is missing or empty")]
  MissingValue,
  /// The `timeout` parameter is not a non-negative integer.
  #[error("timeout must be a non-negative integer number of seconds")]
  InvalidTimeout,
}
