//! HUD 渲染器
//!
//! ```text
//! | Level | ====== HP ====== | ATK | Swords | Key |
//! | message log                                   |
//! ```

use crate::snapshot::{HeroStats, Snapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

pub struct HudRenderer;

impl HudRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot, messages: &[String]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        match &snapshot.hero {
            Some(stats) => self.render_stats(frame, chunks[0], snapshot.level, stats),
            None => {
                let text = Paragraph::new("No hero on this level")
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center);
                frame.render_widget(text, chunks[0]);
            }
        }

        self.render_messages(frame, chunks[1], messages);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, level: u32, stats: &HeroStats) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(10),
                Constraint::Min(20),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Length(8),
            ])
            .split(area);

        frame.render_widget(Paragraph::new(format!("Lvl {}", level)), columns[0]);

        let ratio = if stats.max_hp > 0 {
            (stats.hp.max(0) as f64 / stats.max_hp as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };
        // 根据血量百分比选择颜色
        let color = match ratio {
            r if r > 0.6 => Color::Green,
            r if r > 0.3 => Color::Yellow,
            _ => Color::Red,
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .ratio(ratio)
            .label(format!("HP {}/{}", stats.hp, stats.max_hp));
        frame.render_widget(gauge, columns[1]);

        frame.render_widget(Paragraph::new(format!(" ATK {}", stats.attack)), columns[2]);
        frame.render_widget(Paragraph::new(format!(" Swords {}", stats.swords)), columns[3]);

        let key = if stats.has_key {
            Span::styled(" Key", Style::default().fg(Color::LightYellow))
        } else {
            Span::styled(" ---", Style::default().fg(Color::DarkGray))
        };
        frame.render_widget(Paragraph::new(Line::from(key)), columns[4]);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect, messages: &[String]) {
        let visible = area.height.saturating_sub(2) as usize;
        let skip = messages.len().saturating_sub(visible);
        let lines: Vec<Line> = messages
            .iter()
            .skip(skip)
            .map(|m| Line::from(m.as_str()))
            .collect();

        let log = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Messages ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(log, area);
    }
}

impl Default for HudRenderer {
    fn default() -> Self {
        Self::new()
    }
}
