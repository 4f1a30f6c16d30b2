//! Traits describing the host boundary.
//!
//! The host owns rendering, input, the item model, and the world
//! simulation. The core only ever reads world facts through [`WorldView`]
//! and requests side effects through [`WorldActions`]; the [`Host`]
//! aggregate bundles both so the dispatcher and watches can take a single
//! parameter without hard coupling to a concrete host.
use crate::types::{CharacterId, Direction, ItemId, LocationId, MapName, Position};

/// Point-in-time copy of an inventory item's attributes.
///
/// Captured once per press; the host remains the source of truth for the
/// live item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub name: String,
    /// Numeric nutrition attribute; values above zero mark an item edible.
    pub edibility: i32,
    pub stack: u32,
}

impl ItemSnapshot {
    pub fn new(id: ItemId, name: impl Into<String>, edibility: i32, stack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            edibility,
            stack,
        }
    }
}

/// Point-in-time copy of a character present in a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSnapshot {
    pub id: CharacterId,
    pub tile: Position,
    pub is_horse: bool,
}

impl CharacterSnapshot {
    pub fn new(id: CharacterId, tile: Position, is_horse: bool) -> Self {
        Self { id, tile, is_horse }
    }
}

/// Read-only queries against the host world.
pub trait WorldView {
    /// True once a game session is fully loaded. All core logic is gated
    /// on this.
    fn world_ready(&self) -> bool;

    fn current_location(&self) -> LocationId;

    /// Whether the given location is a mine-type location (where a
    /// staircase can be used).
    fn location_is_mine(&self, location: LocationId) -> bool;

    /// Active farm layout id, used to pick the farm warp entry point.
    fn farm_layout(&self) -> i32;

    /// Farm-specific warp entry override, when the active farm map
    /// defines one. Takes precedence over the layout table.
    fn farm_warp_override(&self) -> Option<Position>;

    /// The item currently indicated by cursor focus within an open
    /// inventory view, or `None` when no such view is open or nothing is
    /// hovered.
    fn hovered_inventory_item(&self) -> Option<ItemSnapshot>;

    /// Whether any menu screen is currently open.
    fn menu_open(&self) -> bool;

    fn avatar_facing(&self) -> Direction;

    fn avatar_tile(&self) -> Position;

    fn avatar_can_move(&self) -> bool;

    fn avatar_is_eating(&self) -> bool;

    /// Characters present in the given location, in host iteration order.
    fn characters_in(&self, location: LocationId) -> Vec<CharacterSnapshot>;
}

/// Side effects requested of the host.
///
/// Failures inside these mutators are not caught by the core; they surface
/// through the host's own top-level handling.
pub trait WorldActions {
    /// Reduces the item's stack by one. Only called while the stack holds
    /// more than one.
    fn shrink_stack(&mut self, item: ItemId);

    /// Removes the item from the inventory entirely.
    fn remove_item(&mut self, item: ItemId);

    /// Invokes the host's consume-this-item flow for an edible item.
    fn eat_item(&mut self, item: ItemId);

    /// Invokes the item's own generic use effect.
    fn use_item(&mut self, item: ItemId);

    /// Teleports the avatar, facing unchanged; collision-checked placement
    /// is the host's concern.
    fn warp_avatar(&mut self, map: MapName, position: Position);

    /// Advances the current mine to its next level.
    fn descend_mine(&mut self);

    fn play_sound(&mut self, name: &str);

    fn set_avatar_facing(&mut self, facing: Direction);

    /// Closes whatever menu screen is currently active.
    fn close_menu(&mut self);

    /// Opens the host's default pause/menu screen.
    fn open_pause_menu(&mut self);

    /// Triggers the standard interact action against a character (the
    /// mount trigger, when the character is a horse).
    fn interact_with(&mut self, character: CharacterId);
}

/// Aggregate host boundary consumed by the dispatcher and watches.
pub trait Host: WorldView + WorldActions {}

impl<T: WorldView + WorldActions + ?Sized> Host for T {}
