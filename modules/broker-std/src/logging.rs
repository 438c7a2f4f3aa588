use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global `fmt` subscriber, filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already installed, so tests may call it repeatedly.
pub fn init_tracing() {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
  let _ = tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).try_init();
}
