//! Ratatui front end: lays out the map, HUD and overlays for one frame.

use crate::game::Game;
use crate::render::{DungeonRenderer, GameOverRenderer, HudRenderer};
use crate::snapshot::Snapshot;

use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};

/// Messages kept on screen below the map
const MESSAGE_LINES: usize = 5;

pub struct RatatuiRenderer<B: Backend> {
    terminal: Terminal<B>,
    dungeon_renderer: DungeonRenderer,
    hud_renderer: HudRenderer,
    game_over_renderer: GameOverRenderer,
}

impl<B: Backend> RatatuiRenderer<B> {
    pub fn new(backend: B) -> anyhow::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            dungeon_renderer: DungeonRenderer::new(),
            hud_renderer: HudRenderer::new(),
            game_over_renderer: GameOverRenderer::new(),
        })
    }

    /// Redraw everything from a fresh snapshot of `game`.
    pub fn draw(&mut self, game: &Game) -> anyhow::Result<()> {
        let snapshot = game.snapshot();
        let messages = game.recent_messages(MESSAGE_LINES);
        self.terminal.draw(|f| {
            render_frame(
                f,
                &snapshot,
                &messages,
                &self.dungeon_renderer,
                &self.hud_renderer,
                &self.game_over_renderer,
            )
        })?;
        Ok(())
    }

    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.terminal.clear()?;
        Ok(())
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

fn render_frame(
    frame: &mut Frame,
    snapshot: &Snapshot,
    messages: &[String],
    dungeon: &DungeonRenderer,
    hud: &HudRenderer,
    game_over: &GameOverRenderer,
) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(snapshot.height.max(0) as u16 + 2),
            Constraint::Length(MESSAGE_LINES as u16 + 3),
        ])
        .split(area);

    dungeon.render(frame, chunks[0], snapshot);
    hud.render(frame, chunks[1], snapshot, messages);
    game_over.render(frame, area, snapshot);
}
