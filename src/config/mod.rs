//! Configuration: endpoint location, form defaults, logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, FormConfig, LoggingConfig};
