use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Video platform a stream slot embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitch,
    YouTube,
    Rumble,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Twitch, Platform::YouTube, Platform::Rumble];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitch => "twitch",
            Platform::YouTube => "youtube",
            Platform::Rumble => "rumble",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitch" => Ok(Platform::Twitch),
            "youtube" => Ok(Platform::YouTube),
            "rumble" => Ok(Platform::Rumble),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// How the chat panel picks a slot when no stream is audible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatFallback {
    /// Highest known viewer count, else the first slot.
    #[default]
    MostViewers,
    /// Always the first slot in display order.
    FirstSlot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!("Twitch".parse::<Platform>(), Ok(Platform::Twitch));
        assert_eq!(" youtube ".parse::<Platform>(), Ok(Platform::YouTube));
        assert_eq!("RUMBLE".parse::<Platform>(), Ok(Platform::Rumble));
        assert!("kick".parse::<Platform>().is_err());
    }

    #[test]
    fn platform_display_matches_serde() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{platform}\""));
        }
    }

    #[test]
    fn chat_fallback_uses_snake_case() {
        let parsed: ChatFallback = serde_json::from_str("\"first_slot\"").unwrap();
        assert_eq!(parsed, ChatFallback::FirstSlot);
        assert_eq!(ChatFallback::default(), ChatFallback::MostViewers);
    }
}
