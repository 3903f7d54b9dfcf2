//! Headless page session.
//!
//! Plays the consumers' part: tiles mount and bind to their slot, embeds
//! report ready and reload, the user clicks mute icons, and the chat panel
//! follows the audible stream. Render events from the bindings and the chat
//! panel are written to the output after every command.

mod console;
mod script;

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use tracing::{debug, warn};

use multiview_audio::{
    AdapterOptions, ChatCandidate, ChatFollower, MuteBinding, MuteCoordinator, PlayerHandle,
};
use multiview_common::{Platform, Result, SlotId};
use multiview_config::MultiviewConfig;

use console::{ConsolePlayer, ConsoleWindow};
pub use script::{parse_script, ScriptCommand};

type RenderLog = Rc<RefCell<Vec<String>>>;

struct Tile {
    candidate: ChatCandidate,
    binding: MuteBinding,
}

pub struct Session<W: Write> {
    coordinator: MuteCoordinator,
    follower: ChatFollower,
    tiles: Vec<Tile>,
    max_streams: usize,
    renders: RenderLog,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: &MultiviewConfig, out: W) -> Self {
        let coordinator = MuteCoordinator::with_options(AdapterOptions {
            youtube_origin: config.youtube.target_origin.clone(),
        });
        let follower = ChatFollower::new(&coordinator, Vec::new(), config.chat.fallback);
        let renders: RenderLog = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&renders);
        follower.on_select(move |slot| {
            let line = match slot {
                Some(slot) => format!("chat -> {slot}"),
                None => "chat -> none".to_string(),
            };
            sink.borrow_mut().push(line);
        });
        Self {
            coordinator,
            follower,
            tiles: Vec::new(),
            max_streams: config.session.max_streams as usize,
            renders,
            out,
        }
    }

    pub fn coordinator(&self) -> &MuteCoordinator {
        &self.coordinator
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Replay parsed commands in order.
    pub fn run(&mut self, commands: &[(usize, ScriptCommand)]) -> Result<()> {
        for (line, command) in commands {
            debug!(line, ?command, "executing");
            self.execute(command)?;
        }
        Ok(())
    }

    pub fn execute(&mut self, command: &ScriptCommand) -> Result<()> {
        match command {
            ScriptCommand::Mount {
                slot,
                platform,
                viewers,
            } => self.mount(slot, *platform, *viewers),
            ScriptCommand::Ready(slot) => self.ready(slot),
            ScriptCommand::Fail(slot) => {
                if let Some(platform) = self.platform_of(slot) {
                    self.coordinator.register_player(
                        slot,
                        PlayerHandle::unavailable(format!("{platform} SDK not loaded")),
                        platform,
                    );
                }
            }
            ScriptCommand::Reload(slot) => {
                self.coordinator.unregister_player(slot);
                self.ready(slot);
            }
            ScriptCommand::Unmount(slot) => self.unmount(slot),
            ScriptCommand::Mute(slot) => self.set_muted(slot, true),
            ScriptCommand::Unmute(slot) => self.set_muted(slot, false),
            ScriptCommand::Toggle(slot) => match self.tile(slot) {
                Some(tile) => tile.binding.toggle(),
                None => self.coordinator.toggle_mute(slot),
            },
            ScriptCommand::MuteAll => self.coordinator.mute_all(),
            ScriptCommand::Viewers { slot, count } => {
                if let Some(tile) = self.tiles.iter_mut().find(|t| &t.candidate.slot == slot) {
                    tile.candidate.viewer_count = Some(*count);
                }
                self.follower.set_viewer_count(slot, Some(*count));
            }
            ScriptCommand::State => self.print_state()?,
        }
        self.flush_renders()
    }

    fn mount(&mut self, slot: &SlotId, platform: Platform, viewers: Option<u64>) {
        if self.tile(slot).is_some() {
            warn!(slot = %slot, "slot already mounted");
            return;
        }
        if self.tiles.len() >= self.max_streams {
            warn!(slot = %slot, max = self.max_streams, "stream limit reached, mount rejected");
            return;
        }
        let sink = Rc::clone(&self.renders);
        let label = slot.clone();
        let binding = MuteBinding::with_render(&self.coordinator, slot.clone(), move |muted| {
            sink.borrow_mut().push(format!("tile {label} {}", describe(muted)));
        });
        let mut candidate = ChatCandidate::new(slot.clone(), platform);
        candidate.viewer_count = viewers;
        self.tiles.push(Tile { candidate, binding });
        self.sync_candidates();
    }

    fn unmount(&mut self, slot: &SlotId) {
        self.coordinator.unregister_player(slot);
        let before = self.tiles.len();
        self.tiles.retain(|t| &t.candidate.slot != slot);
        if self.tiles.len() != before {
            self.sync_candidates();
        }
    }

    fn ready(&self, slot: &SlotId) {
        let Some(platform) = self.platform_of(slot) else {
            warn!(slot = %slot, "ready event for a slot that is not mounted");
            return;
        };
        let handle = match platform {
            Platform::Twitch => PlayerHandle::Twitch(Rc::new(ConsolePlayer::new(slot.clone()))),
            Platform::YouTube => PlayerHandle::YouTube(Rc::new(ConsoleWindow::new(slot.clone()))),
            Platform::Rumble => PlayerHandle::Rumble,
        };
        self.coordinator.register_player(slot, handle, platform);
    }

    fn set_muted(&self, slot: &SlotId, muted: bool) {
        match self.tile(slot) {
            Some(tile) => tile.binding.set_muted(muted),
            None => self.coordinator.set_muted(slot, muted),
        }
    }

    fn tile(&self, slot: &SlotId) -> Option<&Tile> {
        self.tiles.iter().find(|t| &t.candidate.slot == slot)
    }

    fn platform_of(&self, slot: &SlotId) -> Option<Platform> {
        self.tile(slot).map(|t| t.candidate.platform)
    }

    fn sync_candidates(&mut self) {
        let candidates = self.tiles.iter().map(|t| t.candidate.clone()).collect();
        self.follower.set_candidates(candidates);
    }

    fn print_state(&mut self) -> Result<()> {
        for tile in &self.tiles {
            let slot = &tile.candidate.slot;
            writeln!(
                self.out,
                "{slot} {} {} {}",
                tile.candidate.platform,
                describe(tile.binding.muted()),
                if self.coordinator.is_registered(slot) {
                    "ready"
                } else {
                    "pending"
                },
            )?;
        }
        match self.follower.selected() {
            Some(slot) => writeln!(self.out, "chat {slot}")?,
            None => writeln!(self.out, "chat none")?,
        }
        Ok(())
    }

    fn flush_renders(&mut self) -> Result<()> {
        let lines: Vec<String> = std::mem::take(&mut *self.renders.borrow_mut());
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

fn describe(muted: bool) -> &'static str {
    if muted {
        "muted"
    } else {
        "unmuted"
    }
}
