//! 模块化渲染系统
//!
//! Each renderer draws one part of the screen from a [`Snapshot`](crate::snapshot::Snapshot):
//! - `dungeon` - map with entities and items
//! - `hud` - hero stats and the message log
//! - `game_over` - overlays for a finished level or a dead hero

pub mod dungeon;
pub mod game_over;
pub mod hud;

pub use dungeon::DungeonRenderer;
pub use game_over::GameOverRenderer;
pub use hud::HudRenderer;
