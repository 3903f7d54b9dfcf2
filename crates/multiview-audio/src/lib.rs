//! Audio coordination across embedded stream players.
//!
//! Provides:
//! - One adapter per platform behind the narrow [`PlayerAdapter`] interface
//! - [`MuteCoordinator`], the authoritative per-slot mute state with the
//!   exclusive-audio policy and a synchronous observer API
//! - [`MuteBinding`], a scoped per-component subscription for UI code
//! - Chat-follow selection for the unified chat panel

pub mod adapter;
pub mod binding;
pub mod chat_follow;
pub mod coordinator;

pub use adapter::{
    build_adapter, AdapterOptions, MessageTarget, PlayerAdapter, PlayerHandle, ScriptablePlayer,
};
pub use binding::MuteBinding;
pub use chat_follow::{select_chat_slot, ChatCandidate, ChatFollower};
pub use coordinator::{MuteCoordinator, MuteSnapshot, Subscription, WeakCoordinator};
