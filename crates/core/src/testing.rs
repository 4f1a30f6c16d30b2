//! Scriptable fake host shared by the unit tests.
use crate::env::{CharacterSnapshot, ItemSnapshot, WorldActions, WorldView};
use crate::types::{CharacterId, Direction, ItemId, LocationId, MapName, Position};

/// One recorded host mutation, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    ShrinkStack(ItemId),
    RemoveItem(ItemId),
    EatItem(ItemId),
    UseItem(ItemId),
    Warp(MapName, Position),
    DescendMine,
    PlaySound(String),
    SetFacing(Direction),
    CloseMenu,
    OpenPauseMenu,
    InteractWith(CharacterId),
}

/// In-memory host with directly assignable world facts and a mutation log.
pub struct FakeHost {
    pub ready: bool,
    pub location: LocationId,
    pub mine_locations: Vec<LocationId>,
    pub farm_layout: i32,
    pub farm_warp_override: Option<Position>,
    pub hovered: Option<ItemSnapshot>,
    pub menu_open: bool,
    pub facing: Direction,
    pub tile: Position,
    pub can_move: bool,
    pub eating: bool,
    pub characters: Vec<CharacterSnapshot>,
    pub calls: Vec<HostCall>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            ready: true,
            location: LocationId(1),
            mine_locations: Vec::new(),
            farm_layout: 0,
            farm_warp_override: None,
            hovered: None,
            menu_open: false,
            facing: Direction::Up,
            tile: Position::ORIGIN,
            can_move: true,
            eating: false,
            characters: Vec::new(),
            calls: Vec::new(),
        }
    }
}

impl WorldView for FakeHost {
    fn world_ready(&self) -> bool {
        self.ready
    }

    fn current_location(&self) -> LocationId {
        self.location
    }

    fn location_is_mine(&self, location: LocationId) -> bool {
        self.mine_locations.contains(&location)
    }

    fn farm_layout(&self) -> i32 {
        self.farm_layout
    }

    fn farm_warp_override(&self) -> Option<Position> {
        self.farm_warp_override
    }

    fn hovered_inventory_item(&self) -> Option<ItemSnapshot> {
        self.hovered.clone()
    }

    fn menu_open(&self) -> bool {
        self.menu_open
    }

    fn avatar_facing(&self) -> Direction {
        self.facing
    }

    fn avatar_tile(&self) -> Position {
        self.tile
    }

    fn avatar_can_move(&self) -> bool {
        self.can_move
    }

    fn avatar_is_eating(&self) -> bool {
        self.eating
    }

    fn characters_in(&self, location: LocationId) -> Vec<CharacterSnapshot> {
        if location == self.location {
            self.characters.clone()
        } else {
            Vec::new()
        }
    }
}

impl WorldActions for FakeHost {
    fn shrink_stack(&mut self, item: ItemId) {
        self.calls.push(HostCall::ShrinkStack(item));
    }

    fn remove_item(&mut self, item: ItemId) {
        self.calls.push(HostCall::RemoveItem(item));
    }

    fn eat_item(&mut self, item: ItemId) {
        self.calls.push(HostCall::EatItem(item));
    }

    fn use_item(&mut self, item: ItemId) {
        self.calls.push(HostCall::UseItem(item));
    }

    fn warp_avatar(&mut self, map: MapName, position: Position) {
        self.calls.push(HostCall::Warp(map, position));
    }

    fn descend_mine(&mut self) {
        self.calls.push(HostCall::DescendMine);
    }

    fn play_sound(&mut self, name: &str) {
        self.calls.push(HostCall::PlaySound(name.to_owned()));
    }

    fn set_avatar_facing(&mut self, facing: Direction) {
        self.facing = facing;
        self.calls.push(HostCall::SetFacing(facing));
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
        self.calls.push(HostCall::CloseMenu);
    }

    fn open_pause_menu(&mut self) {
        self.menu_open = true;
        self.calls.push(HostCall::OpenPauseMenu);
    }

    fn interact_with(&mut self, character: CharacterId) {
        self.calls.push(HostCall::InteractWith(character));
    }
}
