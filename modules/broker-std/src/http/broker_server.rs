use std::{convert::Infallible, future::Future, net::SocketAddr};

use bytes::Bytes;
use http_body_util::Full;
use hyper::{body::Incoming, server::conn::http1, service::service_fn, Method, Request, Response, Uri};
use tokio::{
  net::{TcpListener, TcpStream},
  sync::watch,
  task::JoinSet,
};
use tracing::{debug, info, warn};

use super::{ServerError, TokioIo};
use crate::{
  config::BrokerConfig,
  service::{BrokerError, BrokerReply, BrokerService},
};

/// HTTP/1.1 front end of a [`BrokerService`].
///
/// Each accepted connection runs on its own task; requests on a connection are served in order.
#[derive(Debug)]
pub struct BrokerServer {
  listener: TcpListener,
  service:  BrokerService,
}

impl BrokerServer {
  /// Binds the listening socket described by `config`.
  ///
  /// # Errors
  ///
  /// Returns [`ServerError::Bind`] when the address cannot be bound.
  pub async fn bind(config: &BrokerConfig, service: BrokerService) -> Result<Self, ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await.map_err(|source| ServerError::Bind { addr, source })?;
    Ok(Self { listener, service })
  }

  /// Returns the address the server is listening on.
  ///
  /// # Errors
  ///
  /// Returns [`ServerError::LocalAddr`] when the socket cannot report its address.
  pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
    self.listener.local_addr().map_err(ServerError::LocalAddr)
  }

  /// Serves connections until the process is stopped.
  ///
  /// # Errors
  ///
  /// Currently never fails once bound; the signature leaves room for fatal listener errors.
  pub async fn serve(self) -> Result<(), ServerError> {
    self.serve_with_shutdown(std::future::pending()).await
  }

  /// Serves connections until `shutdown` completes, then drains open connections.
  ///
  /// Draining lets every in-flight request, including long-polls, finish before the connection is
  /// closed; idle keep-alive connections are closed right away.
  ///
  /// # Errors
  ///
  /// Currently never fails once bound; accept errors are logged and the loop keeps going.
  pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<(), ServerError>
  where
    F: Future<Output = ()>, {
    let (stop_tx, stop_rx) = watch::channel(false);
    let mut connections = JoinSet::new();
    tokio::pin!(shutdown);

    loop {
      tokio::select! {
        () = &mut shutdown => {
          info!(open = connections.len(), "shutdown requested, draining connections");
          break;
        },
        accepted = self.listener.accept() => match accepted {
          | Ok((stream, peer)) => {
            connections.spawn(serve_connection(stream, peer, self.service.clone(), stop_rx.clone()));
          },
          | Err(error) => warn!(%error, "failed to accept connection"),
        },
        Some(joined) = connections.join_next(), if !connections.is_empty() => {
          if let Err(error) = joined {
            warn!(%error, "connection task failed");
          }
        },
      }
    }

    let _ = stop_tx.send(true);
    while let Some(joined) = connections.join_next().await {
      if let Err(error) = joined {
        warn!(%error, "connection task failed during shutdown");
      }
    }
    info!("server stopped");
    Ok(())
  }
}

pub(super) async fn serve_connection(
  stream: TcpStream,
  peer: SocketAddr,
  service: BrokerService,
  mut stop: watch::Receiver<bool>,
) {
  debug!(%peer, "connection accepted");
  let handler = service_fn(move |request: Request<Incoming>| {
    let service = service.clone();
    async move {
      let (parts, _) = request.into_parts();
      Ok::<_, Infallible>(respond(&service, &parts.method, &parts.uri).await)
    }
  });
  let connection = http1::Builder::new().serve_connection(TokioIo::new(stream), handler);
  tokio::pin!(connection);

  tokio::select! {
    result = connection.as_mut() => {
      if let Err(error) = result {
        debug!(%peer, %error, "connection closed with error");
      }
    },
    () = async { let _ = stop.wait_for(|stopped| *stopped).await; } => {
      connection.as_mut().graceful_shutdown();
      if let Err(error) = connection.as_mut().await {
        debug!(%peer, %error, "connection closed with error while draining");
      }
    },
  }
  debug!(%peer, "connection closed");
}

pub(super) async fn respond(service: &BrokerService, method: &Method, uri: &Uri) -> Response<Full<Bytes>> {
  into_response(service.dispatch(method, uri.path(), uri.query()).await)
}

pub(super) fn into_response(outcome: Result<BrokerReply, BrokerError>) -> Response<Full<Bytes>> {
  let (status, body) = match outcome {
    | Ok(reply) => (hyper::StatusCode::OK, Bytes::from(reply.into_body())),
    | Err(error) => (error.status(), Bytes::new()),
  };
  let mut response = Response::new(Full::new(body));
  *response.status_mut() = status;
  response
}
