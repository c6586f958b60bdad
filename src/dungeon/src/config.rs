//! Immutable game configuration.
//!
//! Built once at startup (defaults, or a TOML file) and passed by reference to
//! map generation and the turn controller. Nothing mutates it afterwards.

use error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Inclusive `[min, max]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

impl Bounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid width in tiles
    pub width: i32,
    /// Grid height in tiles
    pub height: i32,
    /// How many rooms generation aims for
    pub rooms: Bounds,
    /// Side length range of a room
    pub room_size: Bounds,
    /// Room placement attempts before generation gives up
    pub room_attempts: u32,
    /// Enemies on level 1; each further level adds two
    pub base_enemies: u32,
    /// Enemy health on level 1; each further level adds half of it
    pub base_enemy_health: i32,
    pub enemy_attack: i32,
    pub player_health: i32,
    /// Player attack without swords
    pub player_attack: i32,
    /// Attack added per sword carried
    pub sword_bonus: i32,
    pub potion_heal: i32,
    pub swords_count: u32,
    pub potions_count: u32,
    /// Minimum Manhattan distance between the spawn and the locked door
    pub min_door_distance: i32,
    /// Minimum Manhattan distance between an enemy and the spawn or another enemy
    pub min_enemy_distance: i32,
    pub enemy_vision_range: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 24,
            rooms: Bounds::new(5, 10),
            room_size: Bounds::new(3, 8),
            room_attempts: 100,
            base_enemies: 10,
            base_enemy_health: 50,
            enemy_attack: 10,
            player_health: 100,
            player_attack: 10,
            sword_bonus: 15,
            potion_heal: 30,
            swords_count: 2,
            potions_count: 10,
            min_door_distance: 5,
            min_enemy_distance: 3,
            enemy_vision_range: 10,
        }
    }
}

impl GameConfig {
    /// Room origins are rolled in `[1, dimension - ROOM_WINDOW]`.
    pub const ROOM_WINDOW: i32 = 10;

    /// Read a TOML file; missing keys fall back to the defaults.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: GameConfig = toml::from_str(&raw)?;
        config.validate()?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject configurations the generator cannot lay rooms out in.
    pub fn validate(&self) -> GameResult<()> {
        let invalid = |reason: String| Err(GameError::InvalidConfig(reason));

        if self.width <= Self::ROOM_WINDOW || self.height <= Self::ROOM_WINDOW {
            return invalid(format!(
                "grid {}x{} is too small, both sides must exceed {}",
                self.width,
                self.height,
                Self::ROOM_WINDOW
            ));
        }
        if self.rooms.min < 1 || self.rooms.min > self.rooms.max {
            return invalid(format!(
                "room count range {}..={} is empty",
                self.rooms.min, self.rooms.max
            ));
        }
        // the largest room at the furthest origin must still leave the outer wall
        let fits_window = Bounds::new(1, Self::ROOM_WINDOW - 1);
        if !fits_window.contains(self.room_size.min)
            || !fits_window.contains(self.room_size.max)
            || self.room_size.min > self.room_size.max
        {
            return invalid(format!(
                "room size range {}..={} must lie within 1..={}",
                self.room_size.min,
                self.room_size.max,
                Self::ROOM_WINDOW - 1
            ));
        }
        if self.room_attempts == 0 {
            return invalid("room_attempts must be positive".to_string());
        }
        if self.player_health < 1 || self.base_enemy_health < 1 {
            return invalid("health values must be positive".to_string());
        }
        if self.player_attack < 0 || self.enemy_attack < 0 || self.sword_bonus < 0 {
            return invalid("attack values must not be negative".to_string());
        }
        if self.min_door_distance < 0
            || self.min_enemy_distance < 0
            || self.enemy_vision_range < 0
        {
            return invalid("distances must not be negative".to_string());
        }
        Ok(())
    }

    /// Enemies placed on `level` (1-based).
    pub fn enemies_for_level(&self, level: u32) -> u32 {
        self.base_enemies + 2 * level.saturating_sub(1)
    }

    /// `floor(base × (1 + 0.5 × (level - 1)))`
    pub fn enemy_health_for_level(&self, level: u32) -> i32 {
        let scale = 1.0 + 0.5 * f64::from(level.saturating_sub(1));
        (f64::from(self.base_enemy_health) * scale).floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn level_scaling() {
        let config = GameConfig::default();
        assert_eq!(config.enemies_for_level(1), 10);
        assert_eq!(config.enemies_for_level(3), 14);
        assert_eq!(config.enemy_health_for_level(1), 50);
        assert_eq!(config.enemy_health_for_level(2), 75);
        assert_eq!(config.enemy_health_for_level(4), 125);
    }

    #[test]
    fn rejects_grid_smaller_than_room_window() {
        let config = GameConfig {
            width: 10,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn room_size_must_fit_the_window() {
        for (min, max) in [(0, 5), (3, 10), (6, 4)] {
            let config = GameConfig {
                room_size: Bounds::new(min, max),
                ..GameConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(GameError::InvalidConfig(_))),
                "{min}..={max} accepted"
            );
        }
        let config = GameConfig {
            room_size: Bounds::new(1, 9),
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_room_range() {
        let config = GameConfig {
            rooms: Bounds::new(6, 2),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_merges_file_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "width = 60\nswords_count = 4\n[rooms]\nmin = 2\nmax = 3").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.width, 60);
        assert_eq!(config.swords_count, 4);
        assert_eq!(config.rooms, Bounds::new(2, 3));
        assert_eq!(config.height, 24);
    }

    #[test]
    fn load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "width = \"wide\"").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(GameError::ConfigParse(_))
        ));
    }

    #[test]
    fn load_validates_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[room_size]\nmin = 3\nmax = 12").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
