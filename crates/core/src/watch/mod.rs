//! Per-tick follow-up trackers.
//!
//! Both watches run synchronously inside the host's tick callback, eating
//! first, then horse arrival. Neither runs before a session is loaded.
pub mod eating;
pub mod horse;

use crate::env::Host;
use crate::state::RuntimeState;

/// Advances both watches by one host tick.
pub fn on_tick<H: Host + ?Sized>(state: &mut RuntimeState, host: &mut H) {
    if !host.world_ready() {
        return;
    }

    eating::observe(state, host);
    horse::observe(state, host);
}
