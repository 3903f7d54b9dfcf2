//! Where the config file lives, and seeding it on first run.

use multiview_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "multiview";
const CONFIG_FILE: &str = "config.toml";

/// `<config dir>/multiview/config.toml` for the current platform.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let seed = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, default_config_toml())
    };
    seed().map_err(|e| {
        ConfigError::ParseError(format!("cannot seed config at {}: {e}", path.display()))
    })?;

    info!(path = %path.display(), "created default config");
    Ok(())
}
