/// Errors raised while reading the command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
  /// `-h`/`--help` was given.
  #[error("help requested")]
  HelpRequested,
  /// A positional argument was given; the server takes flags only.
  #[error("unexpected argument `{0}`")]
  UnexpectedArgument(String),
  /// The flag is not recognised.
  #[error("unknown flag `{0}`")]
  UnknownFlag(String),
  /// The flag requires a value but none followed it.
  #[error("flag `{0}` requires a value")]
  MissingValue(String),
  /// The port is not an integer in `0..=65535`.
  #[error("invalid port `{0}`")]
  InvalidPort(String),
  /// The host is not an IPv4 or IPv6 address.
  #[error("invalid host address `{0}`")]
  InvalidHost(String),
}
