//! Configuration: types with defaults, file loading, validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SourceConfig, UiConfig};
