//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive scoped to the workspace crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "multiview=debug",
            LogLevel::Info => "multiview=info",
            LogLevel::Warn => "multiview=warn",
            LogLevel::Error => "multiview=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
