//! 游戏结束界面渲染器
//!
//! Popups drawn over the map when the hero dies or a level is cleared.

use crate::game::GameState;
use crate::snapshot::Snapshot;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

pub struct GameOverRenderer;

impl GameOverRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the overlay for `snapshot.state`, if it has one.
    pub fn render(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let (title, color, body, hint) = match snapshot.state {
            GameState::Playing => return,
            GameState::GameOver => (
                " GAME OVER ",
                Color::Red,
                format!("You died on level {}", snapshot.level),
                "[r] restart   [q] quit",
            ),
            GameState::LevelComplete => (
                " LEVEL COMPLETE ",
                Color::Green,
                // the counter already points at the upcoming level
                format!("Level {} cleared", snapshot.level.saturating_sub(1)),
                "[n] next level   [q] quit",
            ),
        };

        let popup = self.centered_rect(area, 50, 30);
        frame.render_widget(Clear, popup);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                body,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(hint, Style::default().fg(Color::Gray))),
        ];
        let text = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(text, popup);
    }

    fn centered_rect(&self, r: Rect, percent_x: u16, percent_y: u16) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for GameOverRenderer {
    fn default() -> Self {
        Self::new()
    }
}
