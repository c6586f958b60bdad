// src/hero/src/core.rs
use combat::{Combatant, Entity, EntityKind};
use dungeon::{GameConfig, Point};
use serde::{Deserialize, Serialize};

/// Entity id reserved for the hero; enemies are numbered from 1.
pub const HERO_ID: u32 = 0;

/// 英雄核心数据结构
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// `entity.attack` holds the sword-less base attack
    pub entity: Entity,
    pub swords: u32,
    pub has_key: bool,
    sword_bonus: i32,
}

impl Hero {
    /// Fresh hero at full health, without swords or key.
    pub fn new(position: Point, config: &GameConfig) -> Self {
        Self {
            entity: Entity::new(
                HERO_ID,
                EntityKind::Player,
                position,
                config.player_health,
                config.player_attack,
            ),
            swords: 0,
            has_key: false,
            sword_bonus: config.sword_bonus,
        }
    }

    /// Same hero carrying `swords` from an earlier level.
    pub fn with_swords(mut self, swords: u32) -> Self {
        self.swords = swords;
        self
    }

    pub fn add_sword(&mut self) {
        self.swords += 1;
    }

    /// Base attack plus the bonus of every sword carried
    pub fn effective_attack(&self) -> i32 {
        self.entity.attack + self.sword_bonus * self.swords as i32
    }

    pub fn take_key(&mut self) {
        self.has_key = true;
    }
}

impl Combatant for Hero {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn attack_power(&self) -> i32 {
        self.effective_attack()
    }
}
