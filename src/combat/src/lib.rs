// src/combat/src/lib.rs
//! Shared entity model, melee resolution, line of sight and enemy behaviour.

pub mod combatant;
pub mod enemy;
pub mod vision;

pub use crate::combatant::{Combatant, Entity, EntityKind};
pub use crate::enemy::{Actor, Enemy, EnemyAction, Surroundings};
pub use crate::vision::VisionSystem;

/// Handles melee exchanges between combatants
pub struct Combat;

/// Outcome of a single blow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombatResult {
    /// Health actually removed from the defender
    pub damage: i32,
    /// The blow took the defender from alive to dead
    pub killed: bool,
}

impl Combat {
    /// One blow at the attacker's full attack power. No hit rolls, no
    /// counterattack; dead combatants neither strike nor get struck.
    pub fn strike<A, D>(attacker: &A, defender: &mut D) -> CombatResult
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
    {
        if !attacker.is_alive() || !defender.is_alive() {
            return CombatResult::default();
        }

        let before = defender.entity().hp;
        defender.take_damage(attacker.attack_power());
        let after = defender.entity().hp;

        CombatResult {
            damage: before - after,
            killed: !defender.is_alive(),
        }
    }
}

#[cfg(test)]
mod tests;
