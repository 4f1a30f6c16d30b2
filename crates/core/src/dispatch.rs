//! Per-press dispatcher for the quick-use hotkey.
//!
//! Classifies the hovered inventory item and performs at most one action.
//! Press debouncing is the host's concern; this module assumes one call
//! per qualifying press.
use crate::env::{Host, ItemSnapshot, WorldActions};
use crate::item::{self, DESCEND_SOUND, ItemClass};
use crate::state::RuntimeState;

/// Handles a qualifying press of the quick-use hotkey.
///
/// No-ops unless the world is ready, an inventory view is open, and an
/// item is hovered. Otherwise exactly one action category's side effects
/// run, selected by [`item::classify`].
pub fn on_hotkey_pressed<H: Host + ?Sized>(state: &mut RuntimeState, host: &mut H) {
    if !host.world_ready() {
        return;
    }

    let Some(item) = host.hovered_inventory_item() else {
        return;
    };

    match item::classify(&item) {
        ItemClass::Edible => eat(state, host, &item),
        ItemClass::Staircase => {
            // A staircase only works from inside a mine.
            if host.location_is_mine(host.current_location()) {
                descend(host, &item);
            }
        }
        ItemClass::WarpTotem(totem) => {
            consume_one(host, &item);
            let (map, position) = totem.destination(host);
            host.warp_avatar(map, position);
        }
        ItemClass::HorseFlute => summon_horse(state, host, &item),
        ItemClass::Unrecognized => {}
    }
}

fn eat<H: Host + ?Sized>(state: &mut RuntimeState, host: &mut H, item: &ItemSnapshot) {
    state.eating.begin_hotkey_eat(host.avatar_facing());

    consume_one(host, item);
    host.eat_item(item.id);
    // Closing the menu resumes real-time simulation; the eating watch
    // re-opens it once the eat finishes.
    host.close_menu();
}

fn descend<H: Host + ?Sized>(host: &mut H, item: &ItemSnapshot) {
    consume_one(host, item);
    host.descend_mine();
    host.play_sound(DESCEND_SOUND);
    host.close_menu();
}

fn summon_horse<H: Host + ?Sized>(state: &mut RuntimeState, host: &mut H, item: &ItemSnapshot) {
    host.close_menu();
    // The flute is not consumed; its use effect spawns the horse on a
    // later tick, so arm the arrival watch for the current location.
    host.use_item(item.id);
    state.horse.arm(host.current_location());
}

/// Takes one item off the stack, removing the item entirely when the
/// stack would reach zero.
fn consume_one<H: WorldActions + ?Sized>(host: &mut H, item: &ItemSnapshot) {
    if item.stack > 1 {
        host.shrink_stack(item.id);
    } else {
        host.remove_item(item.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemSnapshot;
    use crate::state::{EatTrigger, HorseWatch};
    use crate::testing::{FakeHost, HostCall};
    use crate::types::{Direction, ItemId, LocationId, MapName, Position};

    fn edible(stack: u32) -> ItemSnapshot {
        ItemSnapshot::new(ItemId(7), "Parsnip", 10, stack)
    }

    #[test]
    fn ignores_press_when_world_not_ready() {
        let mut state = RuntimeState::new();
        let mut host = FakeHost::new();
        host.ready = false;
        host.hovered = Some(edible(3));

        on_hotkey_pressed(&mut state, &mut host);

        assert!(host.calls.is_empty());
        assert_eq!(state, RuntimeState::new());
    }

    #[test]
    fn ignores_press_when_nothing_hovered() {
        let mut state = RuntimeState::new();
        let mut host = FakeHost::new();

        on_hotkey_pressed(&mut state, &mut host);
        on_hotkey_pressed(&mut state, &mut host);

        assert!(host.calls.is_empty());
        assert_eq!(state, RuntimeState::new());
    }

    #[test]
    fn ignores_unrecognized_item() {
        let mut state = RuntimeState::new();
        let mut host = FakeHost::new();
        host.hovered = Some(ItemSnapshot::new(ItemId(9), "Clay", 0, 5));

        on_hotkey_pressed(&mut state, &mut host);

        assert!(host.calls.is_empty());
        assert_eq!(state, RuntimeState::new());
    }

    #[test]
    fn eat_shrinks_stack_and_arms_completion() {
        let mut state = RuntimeState::new();
        let mut host = FakeHost::new();
        host.facing = Direction::Left;
        host.hovered = Some(edible(3));

        on_hotkey_pressed(&mut state, &mut host);

        assert_eq!(
            host.calls,
            vec![
                HostCall::ShrinkStack(ItemId(7)),
                HostCall::EatItem(ItemId(7)),
                HostCall::CloseMenu,
            ]
        );
        assert_eq!(state.eating.hotkey_eat, EatTrigger::Pending);
        assert_eq!(state.eating.facing_before, Direction::Left);
    }

    #[test]
    fn eat_removes_last_item_of_stack() {
        let mut state = RuntimeState::new();
        let mut host = FakeHost::new();
        host.hovered = Some(edible(1));

        on_hotkey_pressed(&mut state, &mut host);

        assert_eq!(host.calls[0], HostCall::RemoveItem(ItemId(7)));
    }

    #[test]
    fn staircase_descends_only_inside_mine() {
        let mut state = RuntimeState::new();
        let mut host = FakeHost::new();
        host.hovered = Some(ItemSnapshot::new(ItemId(2), "Staircase", 0, 2));

        on_hotkey_pressed(&mut state, &mut host);
        assert!(host.calls.is_empty());

        host.mine_locations.push(host.location);
        on_hotkey_pressed(&mut state, &mut host);

        assert_eq!(
            host.calls,
            vec![
                HostCall::ShrinkStack(ItemId(2)),
                HostCall::DescendMine,
                HostCall::PlaySound(DESCEND_SOUND.into()),
                HostCall::CloseMenu,
            ]
        );
    }

    #[test]
    fn warp_totem_consumes_and_teleports() {
        let mut state = RuntimeState::new();
        let mut host = FakeHost::new();
        host.hovered = Some(ItemSnapshot::new(ItemId(4), "Warp Totem: Desert", 0, 1));

        on_hotkey_pressed(&mut state, &mut host);

        assert_eq!(
            host.calls,
            vec![
                HostCall::RemoveItem(ItemId(4)),
                HostCall::Warp(MapName::Desert, Position::new(35, 43)),
            ]
        );
        // Warping arms nothing.
        assert_eq!(state, RuntimeState::new());
    }

    #[test]
    fn farm_totem_respects_layout() {
        let mut state = RuntimeState::new();
        let mut host = FakeHost::new();
        host.farm_layout = 5;
        host.hovered = Some(ItemSnapshot::new(ItemId(4), "Warp Totem: Farm", 0, 2));

        on_hotkey_pressed(&mut state, &mut host);

        assert_eq!(
            host.calls,
            vec![
                HostCall::ShrinkStack(ItemId(4)),
                HostCall::Warp(MapName::Farm, Position::new(48, 39)),
            ]
        );
    }

    #[test]
    fn horse_flute_arms_watch_without_consuming() {
        let mut state = RuntimeState::new();
        let mut host = FakeHost::new();
        host.location = LocationId(11);
        host.hovered = Some(ItemSnapshot::new(ItemId(5), "Horse Flute", 0, 1));

        on_hotkey_pressed(&mut state, &mut host);

        assert_eq!(
            host.calls,
            vec![HostCall::CloseMenu, HostCall::UseItem(ItemId(5))]
        );
        assert_eq!(
            state.horse,
            HorseWatch::Armed { location: LocationId(11) }
        );
    }
}
