use super::Payload;

/// Successful outcome of a broker request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokerReply {
  /// The payload was appended to its queue.
  Enqueued,
  /// A payload was taken from the head of the queue.
  Delivered(Payload),
}

impl BrokerReply {
  /// Consumes the reply and returns the response body.
  #[must_use]
  pub fn into_body(self) -> Payload {
    match self {
      | Self::Enqueued => Payload::new(),
      | Self::Delivered(payload) => payload,
    }
  }
}
