//! Session and player configuration types.

use multiview_common::ChatFallback;
use serde::{Deserialize, Serialize};

/// Limits for the page session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum simultaneously mounted stream embeds (valid range: 1-16).
    pub max_streams: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_streams: 16 }
    }
}

/// YouTube iframe messaging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YouTubeConfig {
    /// Target origin passed with every posted command.
    pub target_origin: String,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            target_origin: "https://www.youtube.com".into(),
        }
    }
}

/// Unified chat panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatConfig {
    pub fallback: ChatFallback,
}
