use std::{io, net::SocketAddr};

/// Errors that stop the HTTP listener.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
  /// The listening socket could not be bound.
  #[error("failed to bind {addr}: {source}")]
  Bind {
    /// Address that was requested.
    addr:   SocketAddr,
    /// Underlying socket error.
    source: io::Error,
  },
  /// The bound address could not be queried.
  #[error("failed to read local address: {0}")]
  LocalAddr(#[source] io::Error),
}
