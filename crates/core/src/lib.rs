//! Hotkey quick-use logic for an inventory consume shortcut.
//!
//! `quickuse-core` owns the per-press dispatcher and the per-tick watches
//! that restore host bookkeeping the shortcut bypasses (facing direction
//! and pause state after eating, mounting the horse summoned by a flute).
//! The host world is reached exclusively through the [`env::Host`] boundary
//! traits, so every state machine here is testable against a fake host.
pub mod dispatch;
pub mod env;
pub mod item;
pub mod state;
pub mod types;
pub mod watch;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatch::on_hotkey_pressed;
pub use env::{CharacterSnapshot, Host, ItemSnapshot, WorldActions, WorldView};
pub use item::{ItemClass, WarpTotem, classify};
pub use state::{EatTrigger, EatingWatch, HorseWatch, RuntimeState};
pub use types::{CharacterId, Direction, ItemId, LocationId, MapName, Position};
pub use watch::on_tick;
