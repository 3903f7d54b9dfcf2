//! YouTube iframe adapter.
//!
//! The iframe player has no synchronous API from the embedding page. Commands
//! are serialized in the iframe API's message format and posted to the
//! iframe's content window. Nothing acknowledges them, so delivery is
//! at-most-once and the player may diverge from the coordinator's state.

use std::rc::Rc;

use serde::Serialize;
use tracing::trace;

use multiview_common::{AdapterError, MuteCommand, Platform};

/// Default origin for the iframe's content window.
pub const YOUTUBE_ORIGIN: &str = "https://www.youtube.com";

/// Cross-document message sink for one iframe.
pub trait MessageTarget {
    /// `contentWindow.postMessage(message, targetOrigin)`.
    fn post_message(&self, message: &str, target_origin: &str) -> Result<(), String>;
}

/// A command in the iframe API's wire format:
/// `{"event":"command","func":"mute","args":[]}`.
#[derive(Debug, Clone, Serialize)]
pub struct IframeCommand {
    pub event: &'static str,
    pub func: &'static str,
    pub args: Vec<serde_json::Value>,
}

impl IframeCommand {
    pub fn for_mute(command: MuteCommand) -> Self {
        let func = match command {
            MuteCommand::Mute => "mute",
            MuteCommand::Unmute => "unMute",
        };
        Self {
            event: "command",
            func,
            args: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Fire-and-forget commands over `postMessage`.
pub struct YouTubeAdapter {
    target: Rc<dyn MessageTarget>,
    origin: String,
}

impl YouTubeAdapter {
    pub fn new(target: Rc<dyn MessageTarget>, origin: impl Into<String>) -> Self {
        Self {
            target,
            origin: origin.into(),
        }
    }

    fn post(&self, command: MuteCommand) -> Result<(), AdapterError> {
        let failed = |reason: String| AdapterError::Command {
            platform: Platform::YouTube,
            command,
            reason,
        };
        let message = IframeCommand::for_mute(command)
            .to_json()
            .map_err(|e| failed(e.to_string()))?;
        trace!(origin = %self.origin, %message, "posting iframe command");
        self.target
            .post_message(&message, &self.origin)
            .map_err(failed)
    }
}

impl super::PlayerAdapter for YouTubeAdapter {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    fn mute(&self) -> Result<(), AdapterError> {
        self.post(MuteCommand::Mute)
    }

    fn unmute(&self) -> Result<(), AdapterError> {
        self.post(MuteCommand::Unmute)
    }
}
