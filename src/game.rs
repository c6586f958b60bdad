//! Level setup and turn resolution.
//!
//! `Game` owns the map, the hero, the enemies and the floor items, and is the
//! only thing that mutates them. Every intent is resolved to completion,
//! enemy phase included, before `handle_intent` returns. Intents that fail
//! validation change nothing and do not advance the turn.

use combat::{Actor, Combat, Combatant, Enemy, Entity, Surroundings};
use dungeon::grid::{self, Point};
use dungeon::{DungeonMap, GameConfig, Scope, TileKind};
use hero::Hero;
use items::{Item, ItemKind};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::event_bus::{EventBus, GameEvent};
use crate::intent::Intent;
use crate::snapshot::{EntityView, HeroStats, ItemView, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    GameOver,
    LevelComplete,
}

pub struct Game {
    config: GameConfig,
    rng: Pcg32,
    level: u32,
    state: GameState,
    map: DungeonMap,
    hero: Option<Hero>,
    enemies: Vec<Enemy>,
    items: Vec<Item>,
    /// At most one key drops per level
    key_spawned: bool,
    events: EventBus,
}

impl Game {
    /// Start a new game on level 1.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let map = DungeonMap::new(config.width, config.height);
        let mut game = Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            level: 1,
            state: GameState::Playing,
            map,
            hero: None,
            enemies: Vec::new(),
            items: Vec::new(),
            key_spawned: false,
            events: EventBus::new(),
        };
        game.generate_level();
        game
    }

    /// A game on level 1 with a prepared layout instead of a generated one.
    pub fn from_parts(
        config: GameConfig,
        seed: u64,
        map: DungeonMap,
        hero: Hero,
        enemies: Vec<Enemy>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            level: 1,
            state: GameState::Playing,
            map,
            hero: Some(hero),
            enemies,
            items,
            key_spawned: false,
            events: EventBus::new(),
        }
    }

    /// Single entry point for front ends. Returns whether anything changed.
    pub fn handle_intent(&mut self, intent: Intent) -> bool {
        log::trace!("intent {:?} in state {:?}", intent, self.state);
        match intent {
            Intent::Move(direction) => {
                let (dx, dy) = direction.delta();
                self.move_player(dx, dy)
            }
            Intent::Attack => self.attack(),
            Intent::NextLevel => self.next_level(),
            Intent::Restart => {
                self.restart();
                true
            }
        }
    }

    fn can_act(&self) -> bool {
        self.state == GameState::Playing && self.hero.as_ref().is_some_and(|h| h.is_alive())
    }

    /// Step the hero by `(dx, dy)`, collect what lies there, then let the
    /// enemies act.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> bool {
        if !self.can_act() {
            return false;
        }
        let entities = self.living_entities();
        let Some(hero) = self.hero.as_mut() else {
            return false;
        };

        let from = hero.position();
        let to = (from.0 + dx, from.1 + dy);
        if !hero.entity.can_move(to.0, to.1, &self.map, &entities) {
            return false;
        }
        hero.entity.move_to(to.0, to.1);
        self.events.publish(GameEvent::HeroMoved { from, to });

        self.check_pickups();
        self.process_turn();
        true
    }

    /// Resolve every item on the hero's cell, newest first.
    fn check_pickups(&mut self) {
        let Some(hero) = self.hero.as_mut() else {
            return;
        };
        let at = hero.position();
        let mut reached_exit = false;

        for index in (0..self.items.len()).rev() {
            let item = self.items[index];
            if !item.is_at(at) {
                continue;
            }
            let collect = match item.kind {
                ItemKind::Sword => {
                    hero.add_sword();
                    true
                }
                ItemKind::Potion => {
                    hero.heal(self.config.potion_heal);
                    true
                }
                ItemKind::Key => {
                    hero.take_key();
                    true
                }
                ItemKind::LockedDoor if hero.has_key => {
                    reached_exit = true;
                    true
                }
                ItemKind::LockedDoor => {
                    self.events.publish(GameEvent::DoorLocked { at });
                    false
                }
            };
            if collect {
                self.items.remove(index);
                self.events.publish(GameEvent::ItemPickedUp {
                    kind: item.kind,
                    at,
                });
            }
        }

        if reached_exit {
            self.complete_level();
        }
    }

    /// Strike every living enemy on the eight cells around the hero. The
    /// turn only advances when something was hit.
    pub fn attack(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        let Some((hx, hy)) = self.hero.as_ref().map(|h| h.position()) else {
            return false;
        };

        let targets: Vec<usize> = grid::neighbors(hx, hy)
            .iter()
            .flat_map(|&cell| {
                self.enemies
                    .iter()
                    .enumerate()
                    .filter(move |(_, e)| e.is_alive() && e.position() == cell)
                    .map(|(index, _)| index)
            })
            .collect();
        if targets.is_empty() {
            return false;
        }

        for index in targets {
            let Some(hero) = self.hero.as_ref() else {
                break;
            };
            let result = Combat::strike(hero, &mut self.enemies[index]);
            let enemy = &self.enemies[index].entity;
            self.events.publish(GameEvent::EnemyHit {
                enemy: enemy.id,
                damage: result.damage,
            });
            if result.killed {
                self.on_enemy_death(index);
            }
        }

        self.process_turn();
        true
    }

    fn on_enemy_death(&mut self, index: usize) {
        let at = self.enemies[index].position();
        self.events.publish(GameEvent::EnemySlain {
            enemy: self.enemies[index].entity.id,
            at,
        });

        let survivors = self.enemies.iter().filter(|e| e.is_alive()).count();
        if survivors == 0 && !self.key_spawned {
            self.items.push(Item::new(ItemKind::Key, at));
            self.key_spawned = true;
            self.events.publish(GameEvent::KeyDropped { at });
            log::debug!("level {} cleared of enemies, key at {:?}", self.level, at);
        }
    }

    /// Every living enemy acts once, in collection order, seeing the moves
    /// already made by the enemies before it.
    fn process_turn(&mut self) {
        for index in 0..self.enemies.len() {
            if !self.enemies[index].is_alive() {
                continue;
            }
            let entities = self.living_entities();
            let Some(hero) = self.hero.as_mut() else {
                return;
            };
            let surroundings = Surroundings {
                map: &self.map,
                entities: &entities,
                vision_range: self.config.enemy_vision_range,
            };
            let action = self.enemies[index].update(hero, &surroundings, &mut self.rng);

            let enemy = self.enemies[index].entity.id;
            if action.spotted {
                self.events.publish(GameEvent::EnemyAlerted { enemy });
            }
            if let Some(strike) = action.strike {
                self.events.publish(GameEvent::HeroHit {
                    enemy,
                    damage: strike.damage,
                });
            }
        }

        if self.hero.as_ref().is_some_and(|h| !h.is_alive()) {
            self.state = GameState::GameOver;
            self.events.publish(GameEvent::HeroDied { level: self.level });
            log::info!("hero died on level {}", self.level);
        }
    }

    fn complete_level(&mut self) {
        self.state = GameState::LevelComplete;
        self.events.publish(GameEvent::LevelCompleted { level: self.level });
        log::info!("level {} complete", self.level);
        self.level += 1;
    }

    /// Move on after a completed level, keeping the hero's swords.
    pub fn next_level(&mut self) -> bool {
        if self.state != GameState::LevelComplete {
            return false;
        }
        self.generate_level();
        self.state = GameState::Playing;
        true
    }

    /// Back to level 1 with a fresh hero.
    pub fn restart(&mut self) {
        log::info!("restarting from level {}", self.level);
        self.events.clear_history();
        self.level = 1;
        self.hero = None;
        self.generate_level();
        self.state = GameState::Playing;
    }

    fn generate_level(&mut self) {
        self.map.regenerate(&self.config, &mut self.rng);
        self.enemies.clear();
        self.items.clear();
        self.key_spawned = false;
        self.place_objects();

        self.events.publish(GameEvent::LevelGenerated {
            level: self.level,
            enemies: self.enemies.len(),
            items: self.items.len(),
        });
        log::info!(
            "level {} ready: {} rooms, {} enemies, {} items",
            self.level,
            self.map.rooms().len(),
            self.enemies.len(),
            self.items.len()
        );
    }

    /// Populate the fresh map. Anything without a valid cell is skipped.
    fn place_objects(&mut self) {
        let swords = self.hero.as_ref().map_or(0, |h| h.swords);
        self.hero = self
            .map
            .find_position(Scope::Room, None, &mut self.rng)
            .map(|spawn| Hero::new(spawn, &self.config).with_swords(swords));
        let spawn = self.hero.as_ref().map(|h| h.position());

        match spawn {
            Some(spawn) => {
                let near_spawn = |p: Point| grid::chebyshev(p, spawn) <= 1;
                if let Some((x, y)) =
                    self.map
                        .find_position(Scope::Anywhere, Some(&near_spawn), &mut self.rng)
                {
                    self.map.set_tile(x, y, TileKind::Door);
                }
            }
            None => log::warn!("no room cell left for the hero on level {}", self.level),
        }

        self.place_enemies(spawn);
        self.place_items(ItemKind::Sword, self.config.swords_count);
        self.place_items(ItemKind::Potion, self.config.potions_count);

        let min_door = self.config.min_door_distance;
        let far_from_spawn =
            |p: Point| spawn.is_none_or(|spawn| grid::manhattan(p, spawn) >= min_door);
        match self
            .map
            .find_position(Scope::Anywhere, Some(&far_from_spawn), &mut self.rng)
        {
            Some(at) => self.items.push(Item::new(ItemKind::LockedDoor, at)),
            None => log::debug!("no cell for the locked door on level {}", self.level),
        }
    }

    fn place_enemies(&mut self, spawn: Option<Point>) {
        let count = self.config.enemies_for_level(self.level);
        let health = self.config.enemy_health_for_level(self.level);
        let min_distance = self.config.min_enemy_distance;

        for _ in 0..count {
            let enemies = &self.enemies;
            let spaced = |p: Point| {
                spawn.is_none_or(|spawn| grid::manhattan(p, spawn) >= min_distance)
                    && enemies
                        .iter()
                        .all(|e| grid::manhattan(p, e.position()) >= min_distance)
            };
            let Some(at) = self
                .map
                .find_position(Scope::Room, Some(&spaced), &mut self.rng)
            else {
                log::debug!("enemy placement exhausted on level {}", self.level);
                continue;
            };
            let id = self.enemies.len() as u32 + 1;
            self.enemies
                .push(Enemy::new(id, at, health, self.config.enemy_attack));
        }
    }

    fn place_items(&mut self, kind: ItemKind, count: u32) {
        for _ in 0..count {
            match self.map.find_position(Scope::Room, None, &mut self.rng) {
                Some(at) => self.items.push(Item::new(kind, at)),
                None => log::debug!("no cell for {} on level {}", kind.name(), self.level),
            }
        }
    }

    /// The hero and every living enemy, with current positions.
    fn living_entities(&self) -> Vec<Entity> {
        self.hero
            .iter()
            .map(|h| h.entity.clone())
            .chain(
                self.enemies
                    .iter()
                    .filter(|e| e.is_alive())
                    .map(|e| e.entity.clone()),
            )
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        let view = |e: &Entity| EntityView {
            x: e.x,
            y: e.y,
            kind: e.kind,
            alive: e.alive,
            hp: e.hp,
            max_hp: e.max_hp,
        };

        Snapshot {
            width: self.map.width(),
            height: self.map.height(),
            tiles: self.map.rows(),
            entities: self
                .hero
                .iter()
                .map(|h| view(&h.entity))
                .chain(self.enemies.iter().map(|e| view(&e.entity)))
                .collect(),
            items: self
                .items
                .iter()
                .map(|i| ItemView {
                    x: i.x,
                    y: i.y,
                    kind: i.kind,
                })
                .collect(),
            level: self.level,
            state: self.state,
            hero: self.hero.as_ref().map(|h| HeroStats {
                hp: h.entity.hp,
                max_hp: h.entity.max_hp,
                attack: h.effective_attack(),
                swords: h.swords,
                has_key: h.has_key,
            }),
        }
    }

    /// Events published since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain().collect()
    }

    /// Messages of the most recent events, oldest first.
    pub fn recent_messages(&self, limit: usize) -> Vec<String> {
        let messages: Vec<String> = self.events.history().filter_map(GameEvent::message).collect();
        let skip = messages.len().saturating_sub(limit);
        messages.into_iter().skip(skip).collect()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn map(&self) -> &DungeonMap {
        &self.map
    }

    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
