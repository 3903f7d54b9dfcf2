//! Twitch embed adapter.

use std::rc::Rc;

use multiview_common::{AdapterError, MuteCommand, Platform};

/// The Twitch embed's scriptable player object.
pub trait ScriptablePlayer {
    /// Native `setMuted(bool)`; the error carries whatever the SDK threw.
    fn set_muted(&self, muted: bool) -> Result<(), String>;
}

/// Calls the player's `setMuted` directly. Immediate and reliable.
pub struct TwitchAdapter {
    player: Rc<dyn ScriptablePlayer>,
}

impl TwitchAdapter {
    pub fn new(player: Rc<dyn ScriptablePlayer>) -> Self {
        Self { player }
    }

    fn send(&self, muted: bool) -> Result<(), AdapterError> {
        self.player
            .set_muted(muted)
            .map_err(|reason| AdapterError::Command {
                platform: Platform::Twitch,
                command: MuteCommand::for_state(muted),
                reason,
            })
    }
}

impl super::PlayerAdapter for TwitchAdapter {
    fn platform(&self) -> Platform {
        Platform::Twitch
    }

    fn mute(&self) -> Result<(), AdapterError> {
        self.send(true)
    }

    fn unmute(&self) -> Result<(), AdapterError> {
        self.send(false)
    }
}
