// src/combat/src/combatant.rs

use dungeon::{DungeonMap, Point};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Which side an entity fights for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum EntityKind {
    #[strum(serialize = "P")]
    Player,
    #[strum(serialize = "E")]
    Enemy,
}

/// State shared by the player and every enemy.
///
/// Dead entities stay in their collections with `alive == false`; they are
/// skipped by turn processing and never block movement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identity, unique within a level
    pub id: u32,
    pub kind: EntityKind,
    pub x: i32,
    pub y: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub alive: bool,
}

impl Entity {
    pub fn new(id: u32, kind: EntityKind, (x, y): Point, max_hp: i32, attack: i32) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            hp: max_hp,
            max_hp,
            attack,
            alive: max_hp > 0,
        }
    }

    pub fn position(&self) -> Point {
        (self.x, self.y)
    }

    /// Health floors at zero and never goes up here.
    pub fn damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount.max(0)).max(0);
        self.alive = self.hp > 0;
    }

    /// Heal up to `max_hp`. The dead stay dead.
    pub fn heal(&mut self, amount: i32) {
        if !self.alive {
            return;
        }
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
    }

    /// Target is inside the map, not a wall, and not held by another living
    /// entity from `entities`. Items and doors never block.
    pub fn can_move(&self, x: i32, y: i32, map: &DungeonMap, entities: &[Entity]) -> bool {
        map.in_bounds(x, y)
            && map.tile(x, y).is_passable()
            && !entities
                .iter()
                .any(|e| e.id != self.id && e.alive && e.x == x && e.y == y)
    }

    /// Unchecked; validate with `can_move` first.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

/// 表示可以参加战斗的活体
pub trait Combatant {
    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    /// Damage dealt per blow
    fn attack_power(&self) -> i32 {
        self.entity().attack
    }

    fn is_alive(&self) -> bool {
        self.entity().alive
    }

    fn position(&self) -> Point {
        self.entity().position()
    }

    fn take_damage(&mut self, amount: i32) {
        self.entity_mut().damage(amount);
    }

    fn heal(&mut self, amount: i32) {
        self.entity_mut().heal(amount);
    }
}

impl Combatant for Entity {
    fn entity(&self) -> &Entity {
        self
    }

    fn entity_mut(&mut self) -> &mut Entity {
        self
    }
}
