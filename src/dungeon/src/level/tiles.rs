// src/dungeon/src/level/tiles.rs
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Static terrain of a single cell.
///
/// Entities and items are never written into the grid; they live in their
/// own collections layered on top of it.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum TileKind {
    #[default]
    #[strum(serialize = "W")]
    Wall,
    #[strum(serialize = "-")]
    Empty,
    #[strum(serialize = "D")]
    Door,
    #[strum(serialize = "DL")]
    LockedDoor,
}

impl TileKind {
    /// Only walls block; doors are open passages.
    pub fn is_passable(self) -> bool {
        self != TileKind::Wall
    }

    /// 是否阻挡视线
    pub fn blocks_sight(self) -> bool {
        self == TileKind::Wall
    }

    /// Single character used by terminal renderers.
    pub fn glyph(self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Empty => '.',
            TileKind::Door => '+',
            TileKind::LockedDoor => 'X',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_walls_block() {
        for kind in TileKind::iter() {
            assert_eq!(kind.is_passable(), kind != TileKind::Wall);
            assert_eq!(kind.blocks_sight(), !kind.is_passable());
        }
    }

    #[test]
    fn codes_match_tile_classes() {
        assert_eq!(TileKind::Wall.to_string(), "W");
        assert_eq!(TileKind::LockedDoor.to_string(), "DL");
    }
}
