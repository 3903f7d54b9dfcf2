use std::cell::RefCell;
use std::rc::Weak;

use multiview_common::SlotId;

use super::state::CoordinatorState;

/// Guard for one subscriber callback. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    pub(super) state: Weak<RefCell<CoordinatorState>>,
    pub(super) slot: SlotId,
    pub(super) id: u64,
}

impl Subscription {
    pub fn slot(&self) -> &SlotId {
        &self.slot
    }

    /// Explicitly remove the callback. Same as dropping the guard.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        // The callback may own other subscriptions; release it outside the borrow.
        let removed = state.borrow_mut().remove_subscriber(&self.slot, self.id);
        drop(removed);
    }
}
