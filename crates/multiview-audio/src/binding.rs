//! Per-component view of one slot's mute state.
//!
//! A `MuteBinding` is what a stream tile or mobile control holds: the current
//! value plus a toggle. It subscribes on creation and the subscription guard
//! releases it on drop, whichever way the component goes away.
//!
//! The value is read from the coordinator, never cached, so every binding on
//! a slot agrees even while the first of them is still rendering.

use multiview_common::SlotId;

use crate::coordinator::{MuteCoordinator, Subscription};

pub struct MuteBinding {
    coordinator: MuteCoordinator,
    slot: SlotId,
    _subscription: Subscription,
}

impl MuteBinding {
    pub fn new(coordinator: &MuteCoordinator, slot: impl Into<SlotId>) -> Self {
        Self::with_render(coordinator, slot, |_| {})
    }

    /// Like [`MuteBinding::new`], calling `render` after every change of the
    /// slot's state.
    pub fn with_render(
        coordinator: &MuteCoordinator,
        slot: impl Into<SlotId>,
        render: impl Fn(bool) + 'static,
    ) -> Self {
        let slot = slot.into();
        let subscription = coordinator.subscribe(slot.clone(), render);
        Self {
            coordinator: coordinator.clone(),
            slot,
            _subscription: subscription,
        }
    }

    pub fn slot(&self) -> &SlotId {
        &self.slot
    }

    pub fn muted(&self) -> bool {
        self.coordinator.is_muted(&self.slot)
    }

    pub fn toggle(&self) {
        self.coordinator.toggle_mute(&self.slot);
    }

    pub fn set_muted(&self, muted: bool) {
        self.coordinator.set_muted(&self.slot, muted);
    }
}
