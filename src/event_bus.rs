//! 事件总线系统
//!
//! The turn controller publishes what happened while resolving an intent;
//! front ends drain the queue after every intent and may read the bounded
//! history for a message log. Publishing never changes game state.

use dungeon::Point;
use items::ItemKind;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// 游戏事件定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A level was laid out and populated
    LevelGenerated {
        level: u32,
        enemies: usize,
        items: usize,
    },
    HeroMoved {
        from: Point,
        to: Point,
    },
    ItemPickedUp {
        kind: ItemKind,
        at: Point,
    },
    /// The hero reached the locked door without a key
    DoorLocked {
        at: Point,
    },
    EnemyHit {
        enemy: u32,
        damage: i32,
    },
    EnemySlain {
        enemy: u32,
        at: Point,
    },
    KeyDropped {
        at: Point,
    },
    /// An enemy noticed the hero and started chasing
    EnemyAlerted {
        enemy: u32,
    },
    HeroHit {
        enemy: u32,
        damage: i32,
    },
    /// `level` is the level that was just cleared
    LevelCompleted {
        level: u32,
    },
    HeroDied {
        level: u32,
    },
}

impl GameEvent {
    /// One-line message for the in-game log; `None` for noise.
    pub fn message(&self) -> Option<String> {
        match self {
            GameEvent::LevelGenerated { level, enemies, .. } => Some(format!(
                "Level {} - {} enemies lurk here",
                level, enemies
            )),
            GameEvent::HeroMoved { .. } => None,
            GameEvent::ItemPickedUp { kind, .. } => Some(format!("You pick up the {}", kind.name())),
            GameEvent::DoorLocked { .. } => Some("The door is locked. Find the key".to_string()),
            GameEvent::EnemyHit { damage, .. } => Some(format!("You hit an enemy for {}", damage)),
            GameEvent::EnemySlain { .. } => Some("The enemy dies".to_string()),
            GameEvent::KeyDropped { .. } => Some("A key clatters to the floor".to_string()),
            GameEvent::EnemyAlerted { .. } => None,
            GameEvent::HeroHit { damage, .. } => Some(format!("An enemy hits you for {}", damage)),
            GameEvent::LevelCompleted { level } => Some(format!("Level {} cleared", level)),
            GameEvent::HeroDied { level } => Some(format!("You died on level {}", level)),
        }
    }
}

/// Pending events of the current intent plus a bounded history.
#[derive(Debug, Clone)]
pub struct EventBus {
    events: Vec<GameEvent>,
    history: VecDeque<GameEvent>,
    max_history: usize,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_history_size(100)
    }

    pub fn with_history_size(max_history: usize) -> Self {
        Self {
            events: Vec::new(),
            history: VecDeque::with_capacity(max_history),
            max_history,
        }
    }

    pub fn publish(&mut self, event: GameEvent) {
        if self.max_history > 0 {
            if self.history.len() == self.max_history {
                self.history.pop_front();
            }
            self.history.push_back(event.clone());
        }
        self.events.push(event);
    }

    /// 获取所有待处理事件并清空队列
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Oldest first
    pub fn history(&self) -> impl Iterator<Item = &GameEvent> {
        self.history.iter()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
