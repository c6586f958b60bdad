// src/combat/src/enemy.rs

use dungeon::grid::{self, CARDINALS};
use dungeon::{DungeonMap, Point};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::combatant::{Combatant, Entity, EntityKind};
use crate::vision::VisionSystem;
use crate::{Combat, CombatResult};

/// What an actor sees of the level while taking its turn.
pub struct Surroundings<'a> {
    pub map: &'a DungeonMap,
    /// Player and living enemies with their current positions
    pub entities: &'a [Entity],
    /// Maximum Manhattan distance at which the player can be noticed
    pub vision_range: i32,
}

/// What an actor did during its turn, for event reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnemyAction {
    /// `(from, to)` when the actor changed cell
    pub moved: Option<(Point, Point)>,
    /// Set when the player came into view this turn
    pub spotted: bool,
    /// Blow landed on the player, if any
    pub strike: Option<CombatResult>,
}

/// Anything that acts once per turn after the player.
pub trait Actor {
    fn update(
        &mut self,
        player: &mut dyn Combatant,
        surroundings: &Surroundings<'_>,
        rng: &mut dyn RngCore,
    ) -> EnemyAction;
}

/// 敌人实体
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub entity: Entity,
    /// Once set, the enemy keeps walking toward `target`
    pub chasing: bool,
    /// Last place the player was seen
    pub target: Option<Point>,
}

impl Enemy {
    pub fn new(id: u32, position: Point, max_hp: i32, attack: i32) -> Self {
        Self {
            entity: Entity::new(id, EntityKind::Enemy, position, max_hp, attack),
            chasing: false,
            target: None,
        }
    }

    pub fn has_line_of_sight(&self, target: Point, map: &DungeonMap) -> bool {
        VisionSystem::has_line_of_sight(self.entity.position(), target, &|x, y| {
            map.tile(x, y).blocks_sight()
        })
    }

    /// Greedy single step toward `target` along the axis with the larger
    /// offset; ties go to the vertical axis. A blocked step is not retried on
    /// the other axis.
    fn step_toward(&mut self, target: Point, surroundings: &Surroundings<'_>) -> Option<(Point, Point)> {
        let from = self.entity.position();
        let dx = target.0 - from.0;
        let dy = target.1 - from.1;

        let step = if dx.abs() > dy.abs() {
            (dx.signum(), 0)
        } else {
            (0, dy.signum())
        };
        if step == (0, 0) {
            return None;
        }

        let to = (from.0 + step.0, from.1 + step.1);
        if self
            .entity
            .can_move(to.0, to.1, surroundings.map, surroundings.entities)
        {
            self.entity.move_to(to.0, to.1);
            Some((from, to))
        } else {
            log::trace!("enemy {} blocked at {:?} heading {:?}", self.entity.id, from, target);
            None
        }
    }

    /// One random passable cardinal step, or stay put when boxed in.
    fn wander(&mut self, surroundings: &Surroundings<'_>, rng: &mut dyn RngCore) -> Option<(Point, Point)> {
        let from = self.entity.position();
        let options: Vec<Point> = CARDINALS
            .iter()
            .map(|&(dx, dy)| (from.0 + dx, from.1 + dy))
            .filter(|&(x, y)| {
                self.entity
                    .can_move(x, y, surroundings.map, surroundings.entities)
            })
            .collect();

        if options.is_empty() {
            return None;
        }
        let to = options[grid::random_in(rng, 0, options.len() as i32 - 1) as usize];
        self.entity.move_to(to.0, to.1);
        Some((from, to))
    }
}

impl Actor for Enemy {
    fn update(
        &mut self,
        player: &mut dyn Combatant,
        surroundings: &Surroundings<'_>,
        rng: &mut dyn RngCore,
    ) -> EnemyAction {
        let mut action = EnemyAction::default();
        if !self.entity.alive {
            return action;
        }

        let seen_at = player.position();
        let distance = grid::manhattan(self.entity.position(), seen_at);
        if distance <= surroundings.vision_range
            && self.has_line_of_sight(seen_at, surroundings.map)
        {
            action.spotted = !self.chasing;
            self.chasing = true;
            self.target = Some(seen_at);
        }

        action.moved = match (self.chasing, self.target) {
            (true, Some(target)) => self.step_toward(target, surroundings),
            _ => self.wander(surroundings, rng),
        };

        // only orthogonal contact after moving counts as a hit
        if grid::manhattan(self.entity.position(), player.position()) == 1 {
            action.strike = Some(Combat::strike(&*self, player));
        }

        action
    }
}

impl Combatant for Enemy {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
