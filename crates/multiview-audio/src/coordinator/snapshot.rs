use std::collections::BTreeMap;

use multiview_common::SlotId;

/// Immutable copy of every slot's mute state at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MuteSnapshot {
    states: BTreeMap<SlotId, bool>,
}

impl MuteSnapshot {
    pub(super) fn new(states: BTreeMap<SlotId, bool>) -> Self {
        Self { states }
    }

    /// Mute state of `slot`; slots never written read as muted.
    pub fn is_muted(&self, slot: &SlotId) -> bool {
        self.states.get(slot).copied().unwrap_or(true)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SlotId, bool)> {
        self.states.iter().map(|(slot, muted)| (slot, *muted))
    }
}
