//! Mod-owned runtime state shared by the dispatcher and watches.
//!
//! One [`RuntimeState`] value exists per session. It is created at startup,
//! passed `&mut` into both host callbacks, and never destroyed while the
//! session runs; it simply idles when no action is pending.
use crate::types::{Direction, LocationId};

/// Whether the pending eat was started by the hotkey.
///
/// Only a hotkey-initiated eat re-opens the pause menu when it finishes;
/// eats driven through the host's own menu flow already handle that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EatTrigger {
    #[default]
    Idle,
    Pending,
}

/// Falling-edge detector over the host's "avatar is eating" flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EatingWatch {
    /// Eating flag as observed on the previous tick.
    pub was_eating: bool,
    /// Facing captured when the hotkey eat started. Restored on every
    /// falling edge, matching the host bookkeeping the menu flow performs.
    pub facing_before: Direction,
    pub hotkey_eat: EatTrigger,
}

impl EatingWatch {
    /// Records the start of a hotkey-initiated eat.
    ///
    /// Snapshots the avatar's facing (eating may force a different facing
    /// in the host) and marks the completion follow-up as pending.
    pub fn begin_hotkey_eat(&mut self, facing: Direction) {
        self.facing_before = facing;
        self.hotkey_eat = EatTrigger::Pending;
    }

    /// Clears a pending hotkey eat; returns whether one was pending.
    pub fn finish_hotkey_eat(&mut self) -> bool {
        let was_pending = self.hotkey_eat == EatTrigger::Pending;
        self.hotkey_eat = EatTrigger::Idle;
        was_pending
    }
}

/// Armed/disarmed poll for the horse summoned by a horse flute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorseWatch {
    #[default]
    Disarmed,
    /// Waiting for a horse to reach the avatar's tile. `location` is
    /// where the avatar was last observed; any change disarms.
    Armed { location: LocationId },
}

impl HorseWatch {
    pub fn arm(&mut self, location: LocationId) {
        *self = HorseWatch::Armed { location };
    }

    pub fn disarm(&mut self) {
        *self = HorseWatch::Disarmed;
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, HorseWatch::Armed { .. })
    }
}

/// Flat state object threaded through both host callbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuntimeState {
    pub eating: EatingWatch,
    pub horse: HorseWatch,
}

impl RuntimeState {
    /// Fresh state with all flags cleared and facing neutral.
    pub fn new() -> Self {
        Self::default()
    }
}
