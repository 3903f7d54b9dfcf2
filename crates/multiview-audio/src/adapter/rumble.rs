//! Rumble embed adapter.
//!
//! Rumble's iframe exposes no script-level audio control. Commands succeed
//! without touching the player; mute state and exclusivity are still tracked
//! by the coordinator so the UI stays consistent, but no audio is actually
//! suppressed.

use tracing::debug;

use multiview_common::{AdapterError, Platform};

pub struct RumbleAdapter;

impl super::PlayerAdapter for RumbleAdapter {
    fn platform(&self) -> Platform {
        Platform::Rumble
    }

    fn mute(&self) -> Result<(), AdapterError> {
        debug!("rumble embed has no audio control; mute is bookkeeping only");
        Ok(())
    }

    fn unmute(&self) -> Result<(), AdapterError> {
        debug!("rumble embed has no audio control; unmute is bookkeeping only");
        Ok(())
    }
}
