//! Horse-arrival watch.
//!
//! Armed by the dispatcher when a horse flute is used. Polls every tick
//! until the summoned horse stands on the avatar's exact tile, then
//! triggers the standard mount interaction. Any location change while
//! armed invalidates the watch, even a round trip back to the original
//! location; there is no timeout.
use crate::env::Host;
use crate::state::{HorseWatch, RuntimeState};

/// Runs one armed poll, or nothing while disarmed.
pub(crate) fn observe<H: Host + ?Sized>(state: &mut RuntimeState, host: &mut H) {
    let HorseWatch::Armed { location: expected } = state.horse else {
        return;
    };

    tracing::debug!(%expected, "horse watch armed, checking arrival");

    let here = host.current_location();
    // The baseline is re-recorded every tick, so the comparison is
    // against where the avatar was last tick, not where the flute was
    // used.
    state.horse = HorseWatch::Armed { location: here };

    if here != expected {
        tracing::debug!(%expected, %here, "location changed, horse watch disarmed");
        state.horse.disarm();
        return;
    }

    if !host.avatar_can_move() {
        return;
    }

    // Only the first horse in host iteration order is considered.
    let Some(horse) = host
        .characters_in(here)
        .into_iter()
        .find(|character| character.is_horse)
    else {
        return;
    };

    if horse.tile == host.avatar_tile() {
        tracing::debug!(horse = %horse.id, tile = %horse.tile, "horse arrived, mounting");
        state.horse.disarm();
        host.interact_with(horse.id);
    }
}
