use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::ConfigError;

/// Port the server listens on when `--port` is not given.
pub const DEFAULT_PORT: u16 = 8080;
/// Address the server binds when `--host` is not given.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Command-line help text.
pub const USAGE: &str = "usage: pollq-server [--host <ip>] [--port <port>]

  --host <ip>      address to bind (default 0.0.0.0)
  --port <port>    port to listen on (default 8080)
  -h, --help       print this help

Log filtering follows RUST_LOG (default `info`).";

/// Listening configuration of the broker process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokerConfig {
  host: IpAddr,
  port: u16,
}

impl BrokerConfig {
  /// Creates the default configuration, `0.0.0.0:8080`.
  #[must_use]
  pub const fn new() -> Self {
    Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
  }

  /// Returns a copy listening on `host`.
  #[must_use]
  pub const fn with_host(mut self, host: IpAddr) -> Self {
    self.host = host;
    self
  }

  /// Returns a copy listening on `port`. Port `0` lets the OS pick one.
  #[must_use]
  pub const fn with_port(mut self, port: u16) -> Self {
    self.port = port;
    self
  }

  /// Returns the configured host.
  #[must_use]
  pub const fn host(&self) -> IpAddr {
    self.host
  }

  /// Returns the configured port.
  #[must_use]
  pub const fn port(&self) -> u16 {
    self.port
  }

  /// Returns the socket address to bind.
  #[must_use]
  pub const fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }

  /// Reads the configuration from command-line arguments, program name excluded.
  ///
  /// Flags take one or two leading dashes and accept their value either as the next argument or
  /// after `=`, so `-port 9000`, `--port 9000` and `--port=9000` are equivalent.
  ///
  /// # Errors
  ///
  /// Returns a [`ConfigError`] for unknown flags, missing or malformed values, positional
  /// arguments, and for `-h`/`--help`.
  pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>, {
    let mut config = Self::new();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
      let (flag, inline) = match arg.split_once('=') {
        | Some((flag, value)) => (flag.to_owned(), Some(value.to_owned())),
        | None => (arg, None),
      };
      let Some(name) = flag.strip_prefix("--").or_else(|| flag.strip_prefix('-')) else {
        return Err(ConfigError::UnexpectedArgument(flag));
      };

      match name {
        | "h" | "help" => return Err(ConfigError::HelpRequested),
        | "port" => {
          let value = inline.or_else(|| args.next()).ok_or_else(|| ConfigError::MissingValue(flag.clone()))?;
          config.port = value.trim().parse().map_err(|_| ConfigError::InvalidPort(value))?;
        },
        | "host" => {
          let value = inline.or_else(|| args.next()).ok_or_else(|| ConfigError::MissingValue(flag.clone()))?;
          config.host = value.trim().parse().map_err(|_| ConfigError::InvalidHost(value))?;
        },
        | _ => return Err(ConfigError::UnknownFlag(flag)),
      }
    }

    Ok(config)
  }
}

impl Default for BrokerConfig {
  fn default() -> Self {
    Self::new()
  }
}
