use std::fmt;
use std::path::PathBuf;

use crate::types::Platform;

/// Audio command issued to a player adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteCommand {
    Mute,
    Unmute,
}

impl MuteCommand {
    pub fn for_state(muted: bool) -> Self {
        if muted {
            Self::Mute
        } else {
            Self::Unmute
        }
    }
}

impl fmt::Display for MuteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mute => f.write_str("mute"),
            Self::Unmute => f.write_str("unmute"),
        }
    }
}

/// Failures at the player adapter boundary. Neither variant ever reaches
/// callers of the coordinator; both are logged and contained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// The platform SDK was missing or handed over an incompatible handle.
    #[error("cannot build {platform} adapter: {reason}")]
    Construction { platform: Platform, reason: String },

    /// A mute/unmute call threw or was refused by the SDK.
    #[error("{platform} {command} failed: {reason}")]
    Command {
        platform: Platform,
        command: MuteCommand,
        reason: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MultiviewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("script error on line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_error_display() {
        let err = AdapterError::Construction {
            platform: Platform::Twitch,
            reason: "Twitch.Player is not loaded".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot build twitch adapter: Twitch.Player is not loaded"
        );

        let err = AdapterError::Command {
            platform: Platform::YouTube,
            command: MuteCommand::Unmute,
            reason: "contentWindow is null".into(),
        };
        assert_eq!(err.to_string(), "youtube unmute failed: contentWindow is null");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("session.max_streams = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: session.max_streams = 0"
        );
    }

    #[test]
    fn multiview_error_from_config() {
        let err: MultiviewError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, MultiviewError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn multiview_error_from_adapter() {
        let err: MultiviewError = AdapterError::Construction {
            platform: Platform::Rumble,
            reason: "no iframe".into(),
        }
        .into();
        assert!(matches!(err, MultiviewError::Adapter(_)));
    }

    #[test]
    fn script_error_mentions_line() {
        let err = MultiviewError::Script {
            line: 4,
            message: "unknown command 'play'".into(),
        };
        assert_eq!(err.to_string(), "script error on line 4: unknown command 'play'");
    }

    #[test]
    fn mute_command_for_state() {
        assert_eq!(MuteCommand::for_state(true), MuteCommand::Mute);
        assert_eq!(MuteCommand::for_state(false), MuteCommand::Unmute);
        assert_eq!(MuteCommand::Unmute.to_string(), "unmute");
    }
}
