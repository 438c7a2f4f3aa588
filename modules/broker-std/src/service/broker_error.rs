use hyper::StatusCode;

use super::BadRequestReason;

/// Terminal outcome of a request that did not succeed.
///
/// A read on a queue that was never written and a read that found nothing within its wait window
/// are both [`BrokerError::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BrokerError {
  /// Malformed or missing input, detected before any queue is touched.
  #[error("bad request: {0}")]
  BadRequest(#[from] BadRequestReason),
  /// No payload was available within the requested wait window.
  #[error("no payload available")]
  NotFound,
  /// The request method is not supported.
  #[error("method not implemented")]
  Unimplemented,
}

impl BrokerError {
  /// Returns the HTTP status reported for this error.
  #[must_use]
  pub const fn status(&self) -> StatusCode {
    match self {
      | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
      | Self::NotFound => StatusCode::NOT_FOUND,
      | Self::Unimplemented => StatusCode::NOT_IMPLEMENTED,
    }
  }
}
