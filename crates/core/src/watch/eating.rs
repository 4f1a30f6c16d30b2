//! Eating-completion watch.
//!
//! The host's native consume flow runs through a menu interaction that
//! also restores facing and leaves the player paused when the menu
//! closes. The hotkey bypasses that menu, so the bookkeeping is
//! replicated here on the falling edge of the eating flag.
use crate::env::Host;
use crate::state::RuntimeState;

/// Diffs the host's eating flag against last tick's observation.
///
/// On a falling edge the avatar's facing is restored; when the eat was
/// hotkey-initiated the pause menu is re-opened as well, unless some
/// other menu is already up.
pub(crate) fn observe<H: Host + ?Sized>(state: &mut RuntimeState, host: &mut H) {
    let was_eating = state.eating.was_eating;
    let now_eating = host.avatar_is_eating();
    state.eating.was_eating = now_eating;

    if !was_eating || now_eating {
        return;
    }

    host.set_avatar_facing(state.eating.facing_before);

    if state.eating.finish_hotkey_eat() && !host.menu_open() {
        host.open_pause_menu();
    }
}
