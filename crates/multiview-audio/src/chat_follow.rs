//! Chat-follow selection for the unified chat panel.
//!
//! The panel shows the chat of whichever stream is audible. With every
//! stream muted it falls back deterministically, by viewer count or by
//! display order. Selection itself is a pure function of a
//! [`MuteSnapshot`]; [`ChatFollower`] re-runs it on every notification.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use multiview_common::{ChatFallback, Platform, SlotId};

use crate::coordinator::{MuteCoordinator, MuteSnapshot, Subscription, WeakCoordinator};

/// A mounted stream as the chat panel sees it, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCandidate {
    pub slot: SlotId,
    pub platform: Platform,
    /// Externally supplied live viewer count, when known.
    pub viewer_count: Option<u64>,
}

impl ChatCandidate {
    pub fn new(slot: impl Into<SlotId>, platform: Platform) -> Self {
        Self {
            slot: slot.into(),
            platform,
            viewer_count: None,
        }
    }

    pub fn with_viewers(mut self, viewers: u64) -> Self {
        self.viewer_count = Some(viewers);
        self
    }
}

/// Pick the slot whose chat to display.
///
/// The unmuted candidate always wins. Otherwise `MostViewers` takes the
/// highest known count (earliest on ties) and falls back to the first
/// candidate when no count is known; `FirstSlot` takes the first candidate.
pub fn select_chat_slot(
    candidates: &[ChatCandidate],
    snapshot: &MuteSnapshot,
    fallback: ChatFallback,
) -> Option<SlotId> {
    if let Some(audible) = candidates.iter().find(|c| !snapshot.is_muted(&c.slot)) {
        return Some(audible.slot.clone());
    }
    let first = candidates.first()?;
    let chosen = match fallback {
        ChatFallback::FirstSlot => first,
        ChatFallback::MostViewers => {
            let mut best: Option<(&ChatCandidate, u64)> = None;
            for candidate in candidates {
                if let Some(viewers) = candidate.viewer_count {
                    if best.map_or(true, |(_, top)| viewers > top) {
                        best = Some((candidate, viewers));
                    }
                }
            }
            best.map_or(first, |(candidate, _)| candidate)
        }
    };
    Some(chosen.slot.clone())
}

type SelectHook = Rc<dyn Fn(Option<&SlotId>)>;

struct FollowerState {
    candidates: Vec<ChatCandidate>,
    fallback: ChatFallback,
    selected: Option<SlotId>,
    on_select: Option<SelectHook>,
}

/// Keeps the chat selection current by subscribing to every candidate slot.
pub struct ChatFollower {
    coordinator: MuteCoordinator,
    state: Rc<RefCell<FollowerState>>,
    subscriptions: Vec<Subscription>,
}

impl ChatFollower {
    pub fn new(coordinator: &MuteCoordinator, candidates: Vec<ChatCandidate>, fallback: ChatFallback) -> Self {
        let mut follower = Self {
            coordinator: coordinator.clone(),
            state: Rc::new(RefCell::new(FollowerState {
                candidates: Vec::new(),
                fallback,
                selected: None,
                on_select: None,
            })),
            subscriptions: Vec::new(),
        };
        follower.set_candidates(candidates);
        follower
    }

    /// Call `hook` whenever the selected slot changes.
    pub fn on_select(&self, hook: impl Fn(Option<&SlotId>) + 'static) {
        self.state.borrow_mut().on_select = Some(Rc::new(hook));
    }

    pub fn selected(&self) -> Option<SlotId> {
        self.state.borrow().selected.clone()
    }

    /// Replace the candidate list (streams mounted or removed) and re-select.
    pub fn set_candidates(&mut self, candidates: Vec<ChatCandidate>) {
        self.subscriptions.clear();
        self.state.borrow_mut().candidates = candidates;

        let slots: Vec<SlotId> = self
            .state
            .borrow()
            .candidates
            .iter()
            .map(|c| c.slot.clone())
            .collect();
        for slot in slots {
            let state = Rc::downgrade(&self.state);
            let coordinator = self.coordinator.downgrade();
            self.subscriptions.push(
                self.coordinator
                    .subscribe(slot, move |_| reevaluate(&state, &coordinator)),
            );
        }
        refresh(&self.state, &self.coordinator.snapshot());
    }

    /// Update a candidate's viewer count and re-select.
    pub fn set_viewer_count(&self, slot: &SlotId, viewers: Option<u64>) {
        {
            let mut state = self.state.borrow_mut();
            if let Some(candidate) = state.candidates.iter_mut().find(|c| &c.slot == slot) {
                candidate.viewer_count = viewers;
            }
        }
        refresh(&self.state, &self.coordinator.snapshot());
    }
}

fn reevaluate(state: &Weak<RefCell<FollowerState>>, coordinator: &WeakCoordinator) {
    if let (Some(state), Some(coordinator)) = (state.upgrade(), coordinator.upgrade()) {
        refresh(&state, &coordinator.snapshot());
    }
}

fn refresh(state: &Rc<RefCell<FollowerState>>, snapshot: &MuteSnapshot) {
    let changed = {
        let mut state = state.borrow_mut();
        let next = select_chat_slot(&state.candidates, snapshot, state.fallback);
        if next == state.selected {
            None
        } else {
            state.selected = next.clone();
            Some((next, state.on_select.clone()))
        }
    };
    if let Some((next, hook)) = changed {
        debug!(slot = ?next.as_ref().map(SlotId::as_str), "chat panel following");
        if let Some(hook) = hook {
            hook(next.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str) -> SlotId {
        SlotId::from(id)
    }

    fn lineup() -> Vec<ChatCandidate> {
        vec![
            ChatCandidate::new("a", Platform::Twitch).with_viewers(120),
            ChatCandidate::new("b", Platform::YouTube).with_viewers(900),
            ChatCandidate::new("c", Platform::Rumble),
        ]
    }

    #[test]
    fn unmuted_slot_wins() {
        let coordinator = MuteCoordinator::new();
        coordinator.set_muted(&slot("c"), false);
        let chosen = select_chat_slot(&lineup(), &coordinator.snapshot(), ChatFallback::MostViewers);
        assert_eq!(chosen, Some(slot("c")));
    }

    #[test]
    fn falls_back_to_most_viewers() {
        let snapshot = MuteCoordinator::new().snapshot();
        let chosen = select_chat_slot(&lineup(), &snapshot, ChatFallback::MostViewers);
        assert_eq!(chosen, Some(slot("b")));
    }

    #[test]
    fn viewer_ties_keep_display_order() {
        let candidates = vec![
            ChatCandidate::new("a", Platform::Twitch),
            ChatCandidate::new("b", Platform::Twitch).with_viewers(50),
            ChatCandidate::new("c", Platform::YouTube).with_viewers(50),
        ];
        let chosen = select_chat_slot(&candidates, &MuteSnapshot::default(), ChatFallback::MostViewers);
        assert_eq!(chosen, Some(slot("b")));
    }

    #[test]
    fn no_counts_falls_back_to_first() {
        let candidates = vec![
            ChatCandidate::new("x", Platform::Rumble),
            ChatCandidate::new("y", Platform::Twitch),
        ];
        let chosen = select_chat_slot(&candidates, &MuteSnapshot::default(), ChatFallback::MostViewers);
        assert_eq!(chosen, Some(slot("x")));
    }

    #[test]
    fn first_slot_fallback_ignores_viewers() {
        let chosen = select_chat_slot(&lineup(), &MuteSnapshot::default(), ChatFallback::FirstSlot);
        assert_eq!(chosen, Some(slot("a")));
    }

    #[test]
    fn empty_lineup_selects_nothing() {
        assert_eq!(
            select_chat_slot(&[], &MuteSnapshot::default(), ChatFallback::MostViewers),
            None
        );
    }

    #[test]
    fn follower_tracks_audible_slot() {
        let coordinator = MuteCoordinator::new();
        let follower = ChatFollower::new(&coordinator, lineup(), ChatFallback::MostViewers);
        assert_eq!(follower.selected(), Some(slot("b")));

        coordinator.set_muted(&slot("a"), false);
        assert_eq!(follower.selected(), Some(slot("a")));

        coordinator.set_muted(&slot("c"), false);
        assert_eq!(follower.selected(), Some(slot("c")));

        coordinator.mute_all();
        assert_eq!(follower.selected(), Some(slot("b")));
    }

    #[test]
    fn follower_hook_fires_once_per_change() {
        let coordinator = MuteCoordinator::new();
        let follower = ChatFollower::new(&coordinator, lineup(), ChatFallback::MostViewers);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        follower.on_select(move |slot| sink.borrow_mut().push(slot.cloned()));

        coordinator.set_muted(&slot("a"), false);
        // Cascade touches "a" and "c"; selection changes only once.
        coordinator.set_muted(&slot("c"), false);
        coordinator.set_muted(&slot("c"), true);

        assert_eq!(
            *seen.borrow(),
            vec![Some(slot("a")), Some(slot("c")), Some(slot("b"))]
        );
    }

    #[test]
    fn viewer_updates_reselect() {
        let coordinator = MuteCoordinator::new();
        let follower = ChatFollower::new(&coordinator, lineup(), ChatFallback::MostViewers);
        follower.set_viewer_count(&slot("c"), Some(5_000));
        assert_eq!(follower.selected(), Some(slot("c")));
    }

    #[test]
    fn replacing_candidates_resubscribes() {
        let coordinator = MuteCoordinator::new();
        let mut follower = ChatFollower::new(&coordinator, lineup(), ChatFallback::FirstSlot);
        assert_eq!(coordinator.subscriber_count(&slot("a")), 1);

        follower.set_candidates(vec![ChatCandidate::new("d", Platform::Twitch)]);
        assert_eq!(coordinator.subscriber_count(&slot("a")), 0);
        assert_eq!(follower.selected(), Some(slot("d")));

        coordinator.set_muted(&slot("a"), false);
        assert_eq!(follower.selected(), Some(slot("d")));
    }

    #[test]
    fn dropping_follower_unsubscribes() {
        let coordinator = MuteCoordinator::new();
        let follower = ChatFollower::new(&coordinator, lineup(), ChatFallback::MostViewers);
        drop(follower);
        assert_eq!(coordinator.subscriber_count(&slot("b")), 0);
    }
}
