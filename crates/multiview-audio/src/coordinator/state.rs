//! Authoritative per-slot state and the effects a mutation produces.

use std::collections::HashMap;
use std::rc::Rc;

use multiview_common::SlotId;

use crate::adapter::{AdapterOptions, PlayerAdapter};

pub(super) type Callback = Rc<dyn Fn(bool)>;

pub(super) struct CoordinatorState {
    /// Mute state per slot; absent means never written (muted).
    pub(super) muted: HashMap<SlotId, bool>,
    /// At most one adapter per slot, present only while the embed is ready.
    pub(super) adapters: HashMap<SlotId, Rc<dyn PlayerAdapter>>,
    pub(super) subscribers: HashMap<SlotId, Vec<(u64, Callback)>>,
    pub(super) next_subscriber: u64,
    pub(super) options: AdapterOptions,
}

/// Adapter commands and notifications queued while the state is borrowed,
/// executed once the borrow is released.
#[derive(Default)]
pub(super) struct Effects {
    pub(super) commands: Vec<(SlotId, Rc<dyn PlayerAdapter>, bool)>,
    pub(super) notifications: Vec<(SlotId, bool)>,
}

impl CoordinatorState {
    pub(super) fn new(options: AdapterOptions) -> Self {
        Self {
            muted: HashMap::new(),
            adapters: HashMap::new(),
            subscribers: HashMap::new(),
            next_subscriber: 0,
            options,
        }
    }

    pub(super) fn is_muted(&self, slot: &SlotId) -> bool {
        self.muted.get(slot).copied().unwrap_or(true)
    }

    /// Write `muted` for `slot`, recording a notification if the value changed.
    pub(super) fn write(&mut self, slot: &SlotId, muted: bool, effects: &mut Effects) {
        let previous = self.muted.insert(slot.clone(), muted).unwrap_or(true);
        if previous != muted {
            effects.notifications.push((slot.clone(), muted));
        }
    }

    /// Queue an adapter command if `slot` has a registered adapter.
    pub(super) fn command(&self, slot: &SlotId, muted: bool, effects: &mut Effects) {
        if let Some(adapter) = self.adapters.get(slot) {
            effects
                .commands
                .push((slot.clone(), Rc::clone(adapter), muted));
        }
    }

    /// Mute every slot other than `keep` that is currently unmuted.
    pub(super) fn silence_others(&mut self, keep: &SlotId, effects: &mut Effects) {
        let audible: Vec<SlotId> = self
            .muted
            .iter()
            .filter(|(slot, muted)| *slot != keep && !**muted)
            .map(|(slot, _)| slot.clone())
            .collect();
        for slot in audible {
            self.write(&slot, true, effects);
            self.command(&slot, true, effects);
        }
    }

    pub(super) fn callbacks(&self, slot: &SlotId) -> Vec<(u64, Callback)> {
        self.subscribers
            .get(slot)
            .map(|subs| subs.iter().map(|(id, cb)| (*id, Rc::clone(cb))).collect())
            .unwrap_or_default()
    }

    pub(super) fn is_subscribed(&self, slot: &SlotId, id: u64) -> bool {
        self.subscribers
            .get(slot)
            .is_some_and(|subs| subs.iter().any(|(sub_id, _)| *sub_id == id))
    }

    pub(super) fn remove_subscriber(&mut self, slot: &SlotId, id: u64) -> Option<Callback> {
        let subs = self.subscribers.get_mut(slot)?;
        let index = subs.iter().position(|(sub_id, _)| *sub_id == id)?;
        let (_, callback) = subs.remove(index);
        if subs.is_empty() {
            self.subscribers.remove(slot);
        }
        Some(callback)
    }
}
