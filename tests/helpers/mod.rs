//! Builders for hand-placed scenarios on an open floor.

#![allow(dead_code)]

use combat::Enemy;
use dungeon::{DungeonMap, GameConfig, Room};
use hero::Hero;
use items::{Item, ItemKind};
use tile_dungeon::Game;

/// Builder for games whose first level is laid out by hand
pub struct ScenarioBuilder {
    config: GameConfig,
    width: i32,
    height: i32,
    hero: Hero,
    enemies: Vec<Enemy>,
    items: Vec<Item>,
    seed: u64,
}

impl ScenarioBuilder {
    /// A 12x12 map: one room filling everything inside the outer wall.
    pub fn new(hero_at: (i32, i32)) -> Self {
        let config = GameConfig::default();
        let hero = Hero::new(hero_at, &config);
        Self {
            config,
            width: 12,
            height: 12,
            hero,
            enemies: Vec::new(),
            items: Vec::new(),
            seed: 7,
        }
    }

    pub fn swords(mut self, swords: u32) -> Self {
        self.hero = self.hero.with_swords(swords);
        self
    }

    pub fn hero_key(mut self) -> Self {
        self.hero.take_key();
        self
    }

    pub fn hero_health(mut self, hp: i32) -> Self {
        let missing = self.hero.entity.max_hp - hp;
        self.hero.entity.damage(missing);
        self
    }

    pub fn enemy(mut self, at: (i32, i32), hp: i32) -> Self {
        let id = self.enemies.len() as u32 + 1;
        self.enemies
            .push(Enemy::new(id, at, hp, self.config.enemy_attack));
        self
    }

    pub fn item(mut self, kind: ItemKind, at: (i32, i32)) -> Self {
        self.items.push(Item::new(kind, at));
        self
    }

    pub fn build(self) -> Game {
        let mut map = DungeonMap::new(self.width, self.height);
        map.carve_room(Room::new(1, 1, self.width - 2, self.height - 2));
        Game::from_parts(self.config, self.seed, map, self.hero, self.enemies, self.items)
    }
}

pub fn hero_position(game: &Game) -> (i32, i32) {
    game.hero().map(|h| h.entity.position()).unwrap_or((-1, -1))
}

pub fn items_of(game: &Game, kind: ItemKind) -> Vec<(i32, i32)> {
    game.items()
        .iter()
        .filter(|i| i.kind == kind)
        .map(|i| i.position())
        .collect()
}
