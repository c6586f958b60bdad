//! Turn-based tile dungeon: level setup, turn resolution and a ratatui front end.
//!
//! Map generation lives in the `dungeon` crate, the shared entity model and
//! enemy behaviour in `combat`, the player in `hero` and floor objects in
//! `items`. This crate ties them together behind [`Game::handle_intent`].

pub mod event_bus;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod intent;
pub mod render;
pub mod renderer;
pub mod snapshot;

pub use event_bus::{EventBus, GameEvent};
pub use game::{Game, GameState};
pub use game_loop::GameLoop;
pub use input::{Command, ConsoleInput, InputSource};
pub use intent::{Direction, Intent};
pub use renderer::RatatuiRenderer;
pub use snapshot::{EntityView, HeroStats, ItemView, Snapshot};
