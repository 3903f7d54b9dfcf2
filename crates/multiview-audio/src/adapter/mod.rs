//! Player adapters.
//!
//! Each platform exposes a different audio control surface. An adapter
//! wraps one embed's native handle and presents the uniform
//! [`PlayerAdapter`] interface; the coordinator never sees SDK types.

use std::fmt;
use std::rc::Rc;

use multiview_common::{AdapterError, Platform};

mod rumble;
mod twitch;
mod youtube;

pub use rumble::RumbleAdapter;
pub use twitch::{ScriptablePlayer, TwitchAdapter};
pub use youtube::{IframeCommand, MessageTarget, YouTubeAdapter, YOUTUBE_ORIGIN};

/// Uniform mute control over one embedded player.
///
/// Commands are best-effort: an `Err` is reported to the caller for
/// logging, but the caller's own state stays authoritative.
pub trait PlayerAdapter {
    fn platform(&self) -> Platform;
    fn mute(&self) -> Result<(), AdapterError>;
    fn unmute(&self) -> Result<(), AdapterError>;

    /// Mirror a mute state onto the player.
    fn apply(&self, muted: bool) -> Result<(), AdapterError> {
        if muted {
            self.mute()
        } else {
            self.unmute()
        }
    }
}

/// Native control surface handed over by an embed's ready event.
#[derive(Clone)]
pub enum PlayerHandle {
    /// Scriptable player object with a synchronous `setMuted`.
    Twitch(Rc<dyn ScriptablePlayer>),
    /// Iframe reachable only through cross-document messages.
    YouTube(Rc<dyn MessageTarget>),
    /// Embed without any script-level audio control.
    Rumble,
    /// The platform SDK has not loaded (or failed to load).
    Unavailable { reason: String },
}

impl PlayerHandle {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Platform whose control surface this handle carries.
    pub fn platform(&self) -> Option<Platform> {
        match self {
            Self::Twitch(_) => Some(Platform::Twitch),
            Self::YouTube(_) => Some(Platform::YouTube),
            Self::Rumble => Some(Platform::Rumble),
            Self::Unavailable { .. } => None,
        }
    }
}

impl fmt::Debug for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Twitch(_) => f.write_str("PlayerHandle::Twitch(..)"),
            Self::YouTube(_) => f.write_str("PlayerHandle::YouTube(..)"),
            Self::Rumble => f.write_str("PlayerHandle::Rumble"),
            Self::Unavailable { reason } => f
                .debug_struct("PlayerHandle::Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

/// Settings applied when building adapters.
#[derive(Debug, Clone)]
pub struct AdapterOptions {
    /// Target origin for YouTube iframe commands.
    pub youtube_origin: String,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            youtube_origin: YOUTUBE_ORIGIN.to_string(),
        }
    }
}

/// Build the adapter for `platform` from an embed's native handle.
///
/// Fails with [`AdapterError::Construction`] when the SDK is unavailable or
/// the handle belongs to a different platform.
pub fn build_adapter(
    platform: Platform,
    handle: PlayerHandle,
    options: &AdapterOptions,
) -> Result<Rc<dyn PlayerAdapter>, AdapterError> {
    match (platform, handle) {
        (Platform::Twitch, PlayerHandle::Twitch(player)) => Ok(Rc::new(TwitchAdapter::new(player))),
        (Platform::YouTube, PlayerHandle::YouTube(target)) => Ok(Rc::new(YouTubeAdapter::new(
            target,
            options.youtube_origin.clone(),
        ))),
        (Platform::Rumble, PlayerHandle::Rumble) => Ok(Rc::new(RumbleAdapter)),
        (platform, PlayerHandle::Unavailable { reason }) => {
            Err(AdapterError::Construction { platform, reason })
        }
        (platform, other) => Err(AdapterError::Construction {
            platform,
            reason: format!(
                "handle is for {}",
                other
                    .platform()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "no platform".into())
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct NullPlayer;

    impl ScriptablePlayer for NullPlayer {
        fn set_muted(&self, _muted: bool) -> Result<(), String> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct Inbox(RefCell<Vec<(String, String)>>);

    impl MessageTarget for Inbox {
        fn post_message(&self, message: &str, target_origin: &str) -> Result<(), String> {
            self.0
                .borrow_mut()
                .push((message.to_string(), target_origin.to_string()));
            Ok(())
        }
    }

    #[test]
    fn builds_matching_adapters() {
        let opts = AdapterOptions::default();
        let twitch = build_adapter(Platform::Twitch, PlayerHandle::Twitch(Rc::new(NullPlayer)), &opts)
            .unwrap();
        assert_eq!(twitch.platform(), Platform::Twitch);

        let yt = build_adapter(
            Platform::YouTube,
            PlayerHandle::YouTube(Rc::new(Inbox::default())),
            &opts,
        )
        .unwrap();
        assert_eq!(yt.platform(), Platform::YouTube);

        let rumble = build_adapter(Platform::Rumble, PlayerHandle::Rumble, &opts).unwrap();
        assert_eq!(rumble.platform(), Platform::Rumble);
    }

    #[test]
    fn unavailable_sdk_is_construction_error() {
        let err = build_adapter(
            Platform::Twitch,
            PlayerHandle::unavailable("Twitch.Player is undefined"),
            &AdapterOptions::default(),
        )
        .err()
        .unwrap();
        assert_eq!(
            err,
            AdapterError::Construction {
                platform: Platform::Twitch,
                reason: "Twitch.Player is undefined".into(),
            }
        );
    }

    #[test]
    fn mismatched_handle_is_construction_error() {
        let err = build_adapter(Platform::YouTube, PlayerHandle::Rumble, &AdapterOptions::default())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            AdapterError::Construction { platform: Platform::YouTube, ref reason } if reason == "handle is for rumble"
        ));
    }

    #[test]
    fn youtube_adapter_uses_configured_origin() {
        let inbox = Rc::new(Inbox::default());
        let opts = AdapterOptions {
            youtube_origin: "https://www.youtube-nocookie.com".into(),
        };
        let adapter = build_adapter(Platform::YouTube, PlayerHandle::YouTube(inbox.clone()), &opts)
            .unwrap();
        adapter.apply(true).unwrap();
        assert_eq!(inbox.0.borrow()[0].1, "https://www.youtube-nocookie.com");
    }

    #[test]
    fn handle_debug_hides_native_object() {
        let handle = PlayerHandle::Twitch(Rc::new(NullPlayer));
        assert_eq!(format!("{handle:?}"), "PlayerHandle::Twitch(..)");
        assert_eq!(PlayerHandle::Rumble.platform(), Some(Platform::Rumble));
        assert_eq!(PlayerHandle::unavailable("x").platform(), None);
    }
}
