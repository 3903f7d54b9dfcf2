//! Stand-in native handles for a headless session.
//!
//! They log what a real embed would receive instead of driving a browser.

use tracing::info;

use multiview_audio::{MessageTarget, ScriptablePlayer};
use multiview_common::SlotId;

/// Plays the part of the Twitch embed's player object.
pub struct ConsolePlayer {
    slot: SlotId,
}

impl ConsolePlayer {
    pub fn new(slot: SlotId) -> Self {
        Self { slot }
    }
}

impl ScriptablePlayer for ConsolePlayer {
    fn set_muted(&self, muted: bool) -> Result<(), String> {
        info!(slot = %self.slot, muted, "twitch setMuted");
        Ok(())
    }
}

/// Plays the part of a YouTube iframe's content window.
pub struct ConsoleWindow {
    slot: SlotId,
}

impl ConsoleWindow {
    pub fn new(slot: SlotId) -> Self {
        Self { slot }
    }
}

impl MessageTarget for ConsoleWindow {
    fn post_message(&self, message: &str, target_origin: &str) -> Result<(), String> {
        info!(slot = %self.slot, %message, origin = %target_origin, "youtube postMessage");
        Ok(())
    }
}
