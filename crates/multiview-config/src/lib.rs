//! Multiview configuration system.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults so partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ChatConfig, LogLevel, LoggingConfig, MultiviewConfig, SessionConfig, YouTubeConfig,
};

use multiview_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<MultiviewConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit override path. Unlike [`load_config`],
/// a missing file is an error rather than a reason to create one.
pub fn load_config_from(path: &Path) -> Result<MultiviewConfig, ConfigError> {
    toml_loader::load_from_path(path)
}
