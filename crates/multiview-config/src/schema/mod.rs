//! Configuration schema types for Multiview.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod session;
mod system;

pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Multiview.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MultiviewConfig {
    pub session: SessionConfig,
    pub youtube: YouTubeConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
