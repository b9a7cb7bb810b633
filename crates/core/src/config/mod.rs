//! Configuration loading: optional TOML file plus environment overlay.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{LoggingConfig, ProviderConfig, ResolvedConfig};
