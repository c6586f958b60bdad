//src/items/src/lib.rs
//! Objects lying on the dungeon floor.

use dungeon::Point;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// 物品类别
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ItemKind {
    /// Permanently raises the hero's attack
    #[strum(serialize = "SW")]
    Sword,
    /// Restores some health
    #[strum(serialize = "HP")]
    Potion,
    /// Dropped by the last enemy of a level; opens the locked door
    #[strum(serialize = "K")]
    Key,
    /// Level exit. Stays on the floor until the hero arrives with a key
    #[strum(serialize = "DL")]
    LockedDoor,
}

impl ItemKind {
    /// Single character used by terminal renderers.
    pub fn glyph(self) -> char {
        match self {
            ItemKind::Sword => '/',
            ItemKind::Potion => '!',
            ItemKind::Key => 'k',
            ItemKind::LockedDoor => 'X',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Sword => "sword",
            ItemKind::Potion => "potion",
            ItemKind::Key => "key",
            ItemKind::LockedDoor => "locked door",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub x: i32,
    pub y: i32,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(kind: ItemKind, (x, y): Point) -> Self {
        Self { x, y, kind }
    }

    pub fn position(&self) -> Point {
        (self.x, self.y)
    }

    pub fn is_at(&self, (x, y): Point) -> bool {
        self.x == x && self.y == y
    }
}
