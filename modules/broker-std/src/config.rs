mod broker_config;
mod config_error;


pub use broker_config::{BrokerConfig, DEFAULT_HOST, DEFAULT_PORT, USAGE};
pub use config_error::ConfigError;
