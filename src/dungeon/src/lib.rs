//src/dungeon/src/lib.rs
//! Dungeon layout: configuration, grid helpers and the procedurally generated
//! tile map the turn controller plays on.

pub mod config;
pub mod grid;
pub mod level;

pub use config::{Bounds, GameConfig};
pub use grid::Point;
pub use level::rooms::{Corridor, Room};
pub use level::tiles::TileKind;
pub use level::{DungeonMap, Scope};
