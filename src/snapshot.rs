//! Read-only view of the game handed to renderers after every intent.

use combat::EntityKind;
use dungeon::TileKind;
use error::GameResult;
use items::ItemKind;
use serde::{Deserialize, Serialize};

use crate::game::GameState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    pub x: i32,
    pub y: i32,
    pub kind: EntityKind,
    pub alive: bool,
    pub hp: i32,
    pub max_hp: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub x: i32,
    pub y: i32,
    pub kind: ItemKind,
}

/// HUD fields derived from the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStats {
    pub hp: i32,
    pub max_hp: i32,
    /// Attack including sword bonuses
    pub attack: i32,
    pub swords: u32,
    pub has_key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: i32,
    pub height: i32,
    /// Terrain rows, top first
    pub tiles: Vec<Vec<TileKind>>,
    /// Hero first, then enemies in collection order (dead ones included)
    pub entities: Vec<EntityView>,
    pub items: Vec<ItemView>,
    pub level: u32,
    pub state: GameState,
    pub hero: Option<HeroStats>,
}

impl Snapshot {
    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn living_entity_at(&self, x: i32, y: i32) -> Option<&EntityView> {
        self.entities
            .iter()
            .find(|e| e.alive && e.x == x && e.y == y)
    }

    /// The item drawn on a cell: the most recently placed one wins.
    pub fn item_at(&self, x: i32, y: i32) -> Option<&ItemView> {
        self.items.iter().rev().find(|i| i.x == x && i.y == y)
    }

    /// One character per cell: living entities over items over terrain.
    pub fn glyph_rows(&self) -> Vec<String> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, tile)| self.glyph_at(x as i32, y as i32, *tile))
                    .collect()
            })
            .collect()
    }

    fn glyph_at(&self, x: i32, y: i32, tile: TileKind) -> char {
        if let Some(entity) = self.living_entity_at(x, y) {
            return match entity.kind {
                EntityKind::Player => '@',
                EntityKind::Enemy => 'e',
            };
        }
        self.item_at(x, y)
            .map(|item| item.kind.glyph())
            .unwrap_or_else(|| tile.glyph())
    }
}
