//! Item classification for the hotkey dispatcher.
//!
//! All name/attribute matching rules live here as one pure function over
//! an [`ItemSnapshot`], so the first-match-wins contract is testable in
//! isolation from host mutators.
use crate::env::{ItemSnapshot, WorldView};
use crate::types::{MapName, Position};

/// Reserved item name for the mine staircase.
pub const STAIRCASE_NAME: &str = "Staircase";

/// Reserved item name for the horse flute.
pub const HORSE_FLUTE_NAME: &str = "Horse Flute";

/// Sound effect played when descending a mine level.
pub const DESCEND_SOUND: &str = "stairsdown";

/// Closed set of action categories the dispatcher can select.
///
/// Exactly one category applies per item; edibility is checked before any
/// name match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemClass {
    /// Edibility above zero; consumable via the host's eat flow.
    Edible,
    /// Mine staircase. Only actionable while inside a mine-type location;
    /// the dispatcher checks that separately.
    Staircase,
    /// One of the five warp totem variants.
    WarpTotem(WarpTotem),
    /// Summons a horse on a later tick when used.
    HorseFlute,
    /// No quick-use action; the press is ignored.
    Unrecognized,
}

/// The five warp totem variants, named by destination region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum WarpTotem {
    Farm,
    Mountains,
    Beach,
    Desert,
    Island,
}

impl WarpTotem {
    /// Resolves the fixed destination map and tile for this totem.
    ///
    /// Only the farm destination depends on world state: a map-provided
    /// entry override wins, then the farm layout table, then the default
    /// entry tile.
    pub fn destination<V: WorldView + ?Sized>(self, view: &V) -> (MapName, Position) {
        match self {
            WarpTotem::Farm => (MapName::Farm, farm_entry(view)),
            WarpTotem::Mountains => (MapName::Mountain, Position::new(31, 20)),
            WarpTotem::Beach => (MapName::Beach, Position::new(20, 4)),
            WarpTotem::Desert => (MapName::Desert, Position::new(35, 43)),
            WarpTotem::Island => (MapName::IslandSouth, Position::new(11, 11)),
        }
    }
}

fn farm_entry<V: WorldView + ?Sized>(view: &V) -> Position {
    if let Some(entry) = view.farm_warp_override() {
        return entry;
    }

    match view.farm_layout() {
        6 => Position::new(82, 29),
        5 => Position::new(48, 39),
        _ => Position::new(48, 7),
    }
}

/// Classifies a hovered item into its action category, first match wins.
pub fn classify(item: &ItemSnapshot) -> ItemClass {
    if item.edibility > 0 {
        return ItemClass::Edible;
    }

    match item.name.as_str() {
        STAIRCASE_NAME => ItemClass::Staircase,
        "Warp Totem: Farm" => ItemClass::WarpTotem(WarpTotem::Farm),
        "Warp Totem: Mountains" => ItemClass::WarpTotem(WarpTotem::Mountains),
        "Warp Totem: Beach" => ItemClass::WarpTotem(WarpTotem::Beach),
        "Warp Totem: Desert" => ItemClass::WarpTotem(WarpTotem::Desert),
        "Warp Totem: Island" => ItemClass::WarpTotem(WarpTotem::Island),
        HORSE_FLUTE_NAME => ItemClass::HorseFlute,
        _ => ItemClass::Unrecognized,
    }
}
