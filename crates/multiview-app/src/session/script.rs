//! Session script parsing.
//!
//! One command per line; blank lines and `#` comments are skipped.

use multiview_common::{MultiviewError, Platform, SlotId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// A tile mounts its embed.
    Mount {
        slot: SlotId,
        platform: Platform,
        viewers: Option<u64>,
    },
    /// The embed's ready event fires.
    Ready(SlotId),
    /// The ready event fires but the platform SDK is missing.
    Fail(SlotId),
    /// The embed reloads: its player goes away and becomes ready again.
    Reload(SlotId),
    Unmount(SlotId),
    Mute(SlotId),
    Unmute(SlotId),
    Toggle(SlotId),
    MuteAll,
    Viewers { slot: SlotId, count: u64 },
    State,
}

/// Parse a single line; `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, String> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let slot_arg = |name: &str| -> Result<SlotId, String> {
        args.first()
            .map(|s| SlotId::from(*s))
            .ok_or_else(|| format!("'{name}' needs a slot id"))
    };
    let count_arg = |index: usize| -> Result<Option<u64>, String> {
        args.get(index)
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|_| format!("invalid viewer count '{raw}'"))
            })
            .transpose()
    };

    let command = match verb {
        "mount" => {
            let slot = slot_arg(verb)?;
            let platform = args
                .get(1)
                .ok_or_else(|| "'mount' needs a platform".to_string())?
                .parse::<Platform>()?;
            ScriptCommand::Mount {
                slot,
                platform,
                viewers: count_arg(2)?,
            }
        }
        "ready" => ScriptCommand::Ready(slot_arg(verb)?),
        "fail" => ScriptCommand::Fail(slot_arg(verb)?),
        "reload" => ScriptCommand::Reload(slot_arg(verb)?),
        "unmount" => ScriptCommand::Unmount(slot_arg(verb)?),
        "mute" => ScriptCommand::Mute(slot_arg(verb)?),
        "unmute" => ScriptCommand::Unmute(slot_arg(verb)?),
        "toggle" => ScriptCommand::Toggle(slot_arg(verb)?),
        "mute-all" => ScriptCommand::MuteAll,
        "viewers" => ScriptCommand::Viewers {
            slot: slot_arg(verb)?,
            count: count_arg(1)?.ok_or_else(|| "'viewers' needs a count".to_string())?,
        },
        "state" => ScriptCommand::State,
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(Some(command))
}

/// Parse a whole script, keeping 1-based line numbers.
pub fn parse_script(text: &str) -> Result<Vec<(usize, ScriptCommand)>, MultiviewError> {
    let mut commands = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        match parse_line(line) {
            Ok(Some(command)) => commands.push((line_no, command)),
            Ok(None) => {}
            Err(message) => {
                return Err(MultiviewError::Script {
                    line: line_no,
                    message,
                })
            }
        }
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mount_with_viewers() {
        let cmd = parse_line("mount s1 twitch 1200").unwrap().unwrap();
        assert_eq!(
            cmd,
            ScriptCommand::Mount {
                slot: SlotId::from("s1"),
                platform: Platform::Twitch,
                viewers: Some(1200),
            }
        );
    }

    #[test]
    fn parses_mount_without_viewers() {
        let cmd = parse_line("mount s2 YouTube").unwrap().unwrap();
        assert!(matches!(
            cmd,
            ScriptCommand::Mount {
                platform: Platform::YouTube,
                viewers: None,
                ..
            }
        ));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # just a note").unwrap(), None);
        assert_eq!(
            parse_line("toggle s1  # user clicks the icon").unwrap(),
            Some(ScriptCommand::Toggle(SlotId::from("s1")))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_line("play s1").is_err());
        assert!(parse_line("mount s1").is_err());
        assert!(parse_line("mount s1 kick").is_err());
        assert!(parse_line("viewers s1 lots").is_err());
        assert!(parse_line("ready").is_err());
    }

    #[test]
    fn script_errors_carry_line_numbers() {
        let err = parse_script("mount a twitch\n\nbogus\n").unwrap_err();
        assert!(matches!(err, MultiviewError::Script { line: 3, .. }));
    }

    #[test]
    fn parses_full_script() {
        let script = "\
# two tiles
mount a twitch 10
mount b rumble
ready a
unmute a
mute-all
state
";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 6);
        assert_eq!(commands[0].0, 2);
        assert_eq!(commands[4].1, ScriptCommand::MuteAll);
        assert_eq!(commands[5].1, ScriptCommand::State);
    }
}
