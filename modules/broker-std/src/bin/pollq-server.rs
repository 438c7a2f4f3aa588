//! Long-poll queue broker server.

use std::process::ExitCode;

use pollq_broker_std_rs::{config::USAGE, logging::init_tracing, BrokerConfig, BrokerServer, BrokerService, ConfigError};
use tracing::{error, info, warn};

async fn shutdown_signal() {
  if let Err(error) = tokio::signal::ctrl_c().await {
    warn!(%error, "failed to listen for ctrl-c; shutdown signal disabled");
    std::future::pending::<()>().await;
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  let config = match BrokerConfig::from_args(std::env::args().skip(1)) {
    | Ok(config) => config,
    | Err(ConfigError::HelpRequested) => {
      eprintln!("{USAGE}");
      return ExitCode::SUCCESS;
    },
    | Err(error) => {
      eprintln!("{error}\n\n{USAGE}");
      return ExitCode::from(2);
    },
  };
  init_tracing();

  let server = match BrokerServer::bind(&config, BrokerService::new()).await {
    | Ok(server) => server,
    | Err(error) => {
      error!(%error, "failed to start");
      return ExitCode::FAILURE;
    },
  };
  match server.local_addr() {
    | Ok(addr) => info!(%addr, "pollq listening"),
    | Err(error) => warn!(%error, "listening on unknown address"),
  }

  match server.serve_with_shutdown(shutdown_signal()).await {
    | Ok(()) => ExitCode::SUCCESS,
    | Err(error) => {
      error!(%error, "server failed");
      ExitCode::FAILURE
    },
  }
}
