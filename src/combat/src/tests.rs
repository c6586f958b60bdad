//! Entity model and enemy behaviour tests

use crate::*;
use dungeon::{DungeonMap, Point, TileKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// A map whose every cell is floor.
fn open_map(width: i32, height: i32) -> DungeonMap {
    let mut map = DungeonMap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            map.set_tile(x, y, TileKind::Empty);
        }
    }
    map
}

fn player_at(position: Point) -> Entity {
    Entity::new(0, EntityKind::Player, position, 100, 10)
}

fn run_turn(enemy: &mut Enemy, player: &mut Entity, map: &DungeonMap, vision: i32) -> EnemyAction {
    let entities = vec![player.clone(), enemy.entity.clone()];
    let surroundings = Surroundings {
        map,
        entities: &entities,
        vision_range: vision,
    };
    let mut rng = Pcg32::seed_from_u64(11);
    enemy.update(player, &surroundings, &mut rng)
}

proptest! {
    #[test]
    fn damage_never_raises_or_underflows(start in 1i32..200, hits in prop::collection::vec(-20i32..80, 0..12)) {
        let mut entity = Entity::new(1, EntityKind::Enemy, (0, 0), start, 5);
        for amount in hits {
            let before = entity.hp;
            entity.damage(amount);
            prop_assert!(entity.hp <= before);
            prop_assert!(entity.hp >= 0);
            prop_assert_eq!(entity.alive, entity.hp > 0);
        }
    }

    #[test]
    fn heal_never_exceeds_max(max in 1i32..200, hit in 0i32..200, amount in 0i32..300) {
        let mut entity = Entity::new(1, EntityKind::Player, (0, 0), max, 5);
        entity.damage(hit);
        let was_alive = entity.alive;
        entity.heal(amount);
        prop_assert!(entity.hp <= entity.max_hp);
        prop_assert_eq!(entity.alive, was_alive);
    }
}

#[test]
fn damage_on_dead_entity_stays_at_zero() {
    let mut entity = Entity::new(1, EntityKind::Enemy, (0, 0), 20, 5);
    entity.damage(25);
    assert_eq!(entity.hp, 0);
    assert!(!entity.alive);
    entity.damage(10);
    assert_eq!(entity.hp, 0);
}

#[test]
fn heal_does_not_revive() {
    let mut entity = Entity::new(1, EntityKind::Enemy, (0, 0), 20, 5);
    entity.damage(20);
    entity.heal(30);
    assert_eq!(entity.hp, 0);
    assert!(!entity.alive);
}

#[test]
fn heal_caps_at_max() {
    let mut entity = player_at((0, 0));
    entity.damage(20);
    entity.heal(30);
    assert_eq!(entity.hp, 100);
}

#[test]
fn can_move_respects_walls_bounds_and_living_occupants() {
    let mut map = open_map(5, 5);
    map.set_tile(2, 2, TileKind::Wall);
    map.set_tile(3, 3, TileKind::Door);
    let mover = player_at((1, 1));
    let mut corpse = Entity::new(2, EntityKind::Enemy, (1, 2), 10, 5);
    corpse.damage(10);
    let blocker = Entity::new(3, EntityKind::Enemy, (2, 1), 10, 5);
    let entities = vec![mover.clone(), corpse, blocker];

    assert!(!mover.can_move(2, 2, &map, &entities));
    assert!(!mover.can_move(-1, 1, &map, &entities));
    assert!(!mover.can_move(2, 1, &map, &entities));
    assert!(mover.can_move(1, 2, &map, &entities));
    assert!(mover.can_move(3, 3, &map, &entities));
    // its own cell never counts as occupied
    assert!(mover.can_move(1, 1, &map, &entities));
}

#[test]
fn wall_between_breaks_line_of_sight() {
    let mut map = open_map(5, 5);
    map.set_tile(2, 2, TileKind::Wall);
    let enemy = Enemy::new(1, (0, 2), 50, 10);

    assert!(!enemy.has_line_of_sight((4, 2), &map));
    assert!(enemy.has_line_of_sight((0, 4), &map));

    let corner = Enemy::new(2, (0, 0), 50, 10);
    assert!(corner.has_line_of_sight((4, 0), &map));
    // the trace toward the far corner runs through (2, 2)
    assert!(!corner.has_line_of_sight((4, 4), &map));
}

#[test]
fn strike_reports_damage_and_kill() {
    let hero = player_at((0, 0));
    let mut enemy = Enemy::new(1, (1, 0), 15, 10);

    let first = Combat::strike(&hero, &mut enemy);
    assert_eq!(first, CombatResult { damage: 10, killed: false });
    let second = Combat::strike(&hero, &mut enemy);
    assert_eq!(second, CombatResult { damage: 5, killed: true });
    assert_eq!(Combat::strike(&hero, &mut enemy), CombatResult::default());
}

#[test]
fn spotting_the_player_starts_a_chase() {
    let map = open_map(12, 3);
    let mut enemy = Enemy::new(1, (0, 1), 50, 10);
    let mut player = player_at((6, 1));

    let action = run_turn(&mut enemy, &mut player, &map, 10);
    assert!(action.spotted);
    assert!(enemy.chasing);
    assert_eq!(enemy.target, Some((6, 1)));
    assert_eq!(enemy.entity.position(), (1, 1));
    assert_eq!(action.strike, None);
}

#[test]
fn out_of_range_player_is_ignored() {
    let map = open_map(20, 3);
    let mut enemy = Enemy::new(1, (0, 1), 50, 10);
    let mut player = player_at((15, 1));

    run_turn(&mut enemy, &mut player, &map, 10);
    assert!(!enemy.chasing);
    assert_eq!(enemy.target, None);
}

#[test]
fn chase_continues_toward_last_seen_spot() {
    let mut map = open_map(10, 5);
    let mut enemy = Enemy::new(1, (0, 2), 50, 10);
    let mut player = player_at((4, 2));
    run_turn(&mut enemy, &mut player, &map, 10);
    assert_eq!(enemy.entity.position(), (1, 2));

    // player slips behind a wall
    map.set_tile(6, 1, TileKind::Wall);
    map.set_tile(6, 2, TileKind::Wall);
    map.set_tile(6, 3, TileKind::Wall);
    player.move_to(8, 2);
    let action = run_turn(&mut enemy, &mut player, &map, 10);
    assert!(!action.spotted);
    assert_eq!(enemy.target, Some((4, 2)));
    assert_eq!(enemy.entity.position(), (2, 2));
}

#[test]
fn greedy_step_prefers_larger_offset_and_vertical_ties() {
    let map = open_map(10, 10);
    let mut enemy = Enemy::new(1, (2, 2), 50, 10);
    enemy.chasing = true;
    enemy.target = Some((5, 4));
    let mut player = player_at((9, 9));
    run_turn(&mut enemy, &mut player, &map, 0);
    assert_eq!(enemy.entity.position(), (3, 2));

    enemy.target = Some((5, 4));
    enemy.entity.move_to(3, 2);
    // |dx| == |dy| == 2
    run_turn(&mut enemy, &mut player, &map, 0);
    assert_eq!(enemy.entity.position(), (3, 3));
}

#[test]
fn blocked_chase_step_stays_put() {
    let mut map = open_map(6, 6);
    map.set_tile(3, 2, TileKind::Wall);
    let mut enemy = Enemy::new(1, (2, 2), 50, 10);
    enemy.chasing = true;
    enemy.target = Some((5, 2));
    let mut player = player_at((5, 5));

    let action = run_turn(&mut enemy, &mut player, &map, 0);
    assert_eq!(action.moved, None);
    assert_eq!(enemy.entity.position(), (2, 2));
}

#[test]
fn adjacent_chaser_holds_position_and_hits() {
    let map = open_map(8, 8);
    let mut enemy = Enemy::new(1, (6, 5), 50, 10);
    let mut player = player_at((5, 5));

    let action = run_turn(&mut enemy, &mut player, &map, 10);
    assert_eq!(enemy.entity.position(), (6, 5));
    assert_eq!(action.strike, Some(CombatResult { damage: 10, killed: false }));
    assert_eq!(player.hp, 90);
}

#[test]
fn diagonal_contact_does_not_hit() {
    // enemy boxed in on all sides except the diagonal toward the player
    let mut map = DungeonMap::new(5, 5);
    map.set_tile(1, 1, TileKind::Empty);
    map.set_tile(2, 2, TileKind::Empty);
    let mut enemy = Enemy::new(1, (2, 2), 50, 10);
    let mut player = player_at((1, 1));

    let action = run_turn(&mut enemy, &mut player, &map, 10);
    assert_eq!(action.strike, None);
    assert_eq!(player.hp, 100);
}

#[test]
fn wandering_enemy_takes_one_cardinal_step() {
    let map = open_map(7, 7);
    let mut enemy = Enemy::new(1, (3, 3), 50, 10);
    let mut player = player_at((0, 0));

    let action = run_turn(&mut enemy, &mut player, &map, 0);
    let (from, to) = action.moved.expect("open floor leaves room to wander");
    assert_eq!(from, (3, 3));
    assert_eq!(dungeon::grid::manhattan(from, to), 1);
    assert!(!enemy.chasing);
}

#[test]
fn boxed_in_wanderer_stays() {
    let mut map = DungeonMap::new(3, 3);
    map.set_tile(1, 1, TileKind::Empty);
    let mut enemy = Enemy::new(1, (1, 1), 50, 10);
    let mut player = player_at((0, 0));

    let action = run_turn(&mut enemy, &mut player, &map, 0);
    assert_eq!(action.moved, None);
    assert_eq!(enemy.entity.position(), (1, 1));
}

#[test]
fn dead_enemy_does_nothing() {
    let map = open_map(5, 5);
    let mut enemy = Enemy::new(1, (2, 1), 50, 10);
    enemy.entity.damage(50);
    let mut player = player_at((2, 2));

    let action = run_turn(&mut enemy, &mut player, &map, 10);
    assert_eq!(action, EnemyAction::default());
    assert_eq!(player.hp, 100);
}
