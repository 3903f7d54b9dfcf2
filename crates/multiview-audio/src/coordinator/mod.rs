//! Mute coordination across every mounted player.
//!
//! `MuteCoordinator` owns the authoritative mute state per slot and the
//! adapter registry. Unmuting one slot mutes every other slot, so at most
//! one stream is audible at a time. Mute state outlives the adapter: an
//! embed that reloads and registers again gets the state the user last
//! chose rather than the default.
//!
//! Every operation completes its state mutation before any adapter command
//! or subscriber callback runs, and no internal borrow is held while they
//! run. Callbacks may therefore call back into the coordinator, and never
//! observe a half-applied exclusivity cascade.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use multiview_common::{MuteCommand, Platform, SlotId};

use crate::adapter::{build_adapter, AdapterOptions, PlayerAdapter, PlayerHandle};

mod snapshot;
mod state;
mod subscription;


pub use snapshot::MuteSnapshot;
pub use subscription::Subscription;

use state::{CoordinatorState, Effects};

/// Handle to one coordinator instance. Clones share the same state.
///
/// Single-threaded by construction (`!Send`); inject it into every
/// component that needs it.
#[derive(Clone)]
pub struct MuteCoordinator {
    state: Rc<RefCell<CoordinatorState>>,
}

/// Non-owning handle, for callbacks that must not keep the coordinator alive.
#[derive(Clone)]
pub struct WeakCoordinator {
    state: Weak<RefCell<CoordinatorState>>,
}

impl WeakCoordinator {
    pub fn upgrade(&self) -> Option<MuteCoordinator> {
        self.state.upgrade().map(|state| MuteCoordinator { state })
    }
}

impl MuteCoordinator {
    pub fn new() -> Self {
        Self::with_options(AdapterOptions::default())
    }

    pub fn with_options(options: AdapterOptions) -> Self {
        Self {
            state: Rc::new(RefCell::new(CoordinatorState::new(options))),
        }
    }

    pub fn downgrade(&self) -> WeakCoordinator {
        WeakCoordinator {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Build an adapter from an embed's ready handle and register it.
    ///
    /// If the adapter cannot be built (SDK missing, wrong handle) the
    /// registration is skipped and the slot's state is left alone.
    pub fn register_player(&self, slot: impl Into<SlotId>, handle: PlayerHandle, platform: Platform) {
        let slot = slot.into();
        let built = {
            let state = self.state.borrow();
            build_adapter(platform, handle, &state.options)
        };
        match built {
            Ok(adapter) => self.register_adapter(slot, adapter),
            Err(e) => {
                warn!(slot = %slot, platform = %platform, error = %e, "adapter construction failed, registration skipped");
            }
        }
    }

    /// Register an already-built adapter for `slot`, replacing any previous
    /// one, and immediately mirror the slot's current state onto it.
    pub fn register_adapter(&self, slot: impl Into<SlotId>, adapter: Rc<dyn PlayerAdapter>) {
        let slot = slot.into();
        let platform = adapter.platform();
        let mut effects = Effects::default();
        let (muted, replaced) = {
            let mut state = self.state.borrow_mut();
            let replaced = state.adapters.insert(slot.clone(), Rc::clone(&adapter));
            let muted = *state.muted.entry(slot.clone()).or_insert(true);
            // Restore the new adapter before touching anything else.
            effects.commands.push((slot.clone(), adapter, muted));
            if !muted {
                state.silence_others(&slot, &mut effects);
            }
            (muted, replaced)
        };
        debug!(slot = %slot, platform = %platform, muted, replaced = replaced.is_some(), "player registered");
        self.run(effects);
        // The old adapter may own subscriptions; drop it with no borrow held.
        drop(replaced);
    }

    /// Drop the adapter for `slot`. Mute state and subscriptions survive.
    pub fn unregister_player(&self, slot: &SlotId) {
        let removed = self.state.borrow_mut().adapters.remove(slot);
        if let Some(adapter) = removed {
            debug!(slot = %slot, platform = %adapter.platform(), "player unregistered");
        }
    }

    /// Current mute state; `true` for slots never written. Never creates an entry.
    pub fn is_muted(&self, slot: &SlotId) -> bool {
        self.state.borrow().is_muted(slot)
    }

    /// Set the mute state of `slot`.
    ///
    /// Unmuting mutes every other slot first. If `slot` has no adapter yet,
    /// the state is recorded and applied when one registers.
    pub fn set_muted(&self, slot: &SlotId, muted: bool) {
        let mut effects = Effects::default();
        {
            let mut state = self.state.borrow_mut();
            state.write(slot, muted, &mut effects);
            if !muted {
                state.silence_others(slot, &mut effects);
            }
            state.command(slot, muted, &mut effects);
        }
        debug!(slot = %slot, muted, changed = effects.notifications.len(), "mute state set");
        self.run(effects);
    }

    pub fn toggle_mute(&self, slot: &SlotId) {
        let muted = self.is_muted(slot);
        self.set_muted(slot, !muted);
    }

    /// Mute every slot and re-send `mute()` to every registered adapter.
    pub fn mute_all(&self) {
        let mut effects = Effects::default();
        {
            let mut state = self.state.borrow_mut();
            let slots: Vec<SlotId> = state.muted.keys().cloned().collect();
            for slot in &slots {
                state.write(slot, true, &mut effects);
            }
            let registered: Vec<SlotId> = state.adapters.keys().cloned().collect();
            for slot in &registered {
                state.command(slot, true, &mut effects);
            }
        }
        debug!(changed = effects.notifications.len(), "all slots muted");
        self.run(effects);
    }

    /// Subscribe to changes of `slot`'s mute state.
    ///
    /// The callback runs synchronously for every change, including changes
    /// caused by another slot being unmuted. It never runs for other slots.
    pub fn subscribe(&self, slot: impl Into<SlotId>, callback: impl Fn(bool) + 'static) -> Subscription {
        let slot = slot.into();
        let mut state = self.state.borrow_mut();
        let id = state.next_subscriber;
        state.next_subscriber += 1;
        state.muted.entry(slot.clone()).or_insert(true);
        state
            .subscribers
            .entry(slot.clone())
            .or_default()
            .push((id, Rc::new(callback)));
        Subscription {
            state: Rc::downgrade(&self.state),
            slot,
            id,
        }
    }

    /// The single audible slot, if any.
    pub fn unmuted_slot(&self) -> Option<SlotId> {
        self.state
            .borrow()
            .muted
            .iter()
            .find(|(_, muted)| !**muted)
            .map(|(slot, _)| slot.clone())
    }

    pub fn is_registered(&self, slot: &SlotId) -> bool {
        self.state.borrow().adapters.contains_key(slot)
    }

    /// Slots with a registered adapter, sorted.
    pub fn registered_slots(&self) -> Vec<SlotId> {
        let mut slots: Vec<SlotId> = self.state.borrow().adapters.keys().cloned().collect();
        slots.sort();
        slots
    }

    pub fn subscriber_count(&self, slot: &SlotId) -> usize {
        self.state
            .borrow()
            .subscribers
            .get(slot)
            .map_or(0, Vec::len)
    }

    pub fn snapshot(&self) -> MuteSnapshot {
        let state = self.state.borrow();
        let states: BTreeMap<SlotId, bool> = state
            .muted
            .iter()
            .map(|(slot, muted)| (slot.clone(), *muted))
            .collect();
        MuteSnapshot::new(states)
    }

    /// Execute queued adapter commands, then notifications.
    fn run(&self, effects: Effects) {
        for (slot, adapter, muted) in effects.commands {
            if let Err(e) = adapter.apply(muted) {
                warn!(
                    slot = %slot,
                    platform = %adapter.platform(),
                    command = %MuteCommand::for_state(muted),
                    error = %e,
                    "player command failed; keeping coordinator state"
                );
            }
        }

        for (slot, muted) in effects.notifications {
            let callbacks = self.state.borrow().callbacks(&slot);
            for (id, callback) in callbacks {
                {
                    let state = self.state.borrow();
                    // A re-entrant call may already have changed and announced this slot.
                    if state.is_muted(&slot) != muted {
                        break;
                    }
                    // An earlier callback may have unsubscribed this one.
                    if !state.is_subscribed(&slot, id) {
                        continue;
                    }
                }
                callback(muted);
            }
        }
    }
}

impl Default for MuteCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
