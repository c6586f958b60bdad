//! 地牢渲染器
//!
//! Draws the glyph grid of a snapshot. The whole level is always visible.

use crate::snapshot::Snapshot;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

pub struct DungeonRenderer;

impl DungeonRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let block = Block::default()
            .title(format!(" Level {} ", snapshot.level))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(100, 100, 100)))
            .border_type(BorderType::Rounded);

        let inner_area = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(DungeonWidget { snapshot }, inner_area);
    }
}

impl Default for DungeonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

struct DungeonWidget<'a> {
    snapshot: &'a Snapshot,
}

impl Widget for DungeonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (y, row) in self.snapshot.glyph_rows().iter().enumerate() {
            let screen_y = area.top() as usize + y;
            if screen_y >= area.bottom() as usize {
                break;
            }
            for (x, glyph) in row.chars().enumerate() {
                let screen_x = area.left() as usize + x;
                if screen_x >= area.right() as usize {
                    break; // 超出渲染区域
                }
                buf[(screen_x as u16, screen_y as u16)]
                    .set_char(glyph)
                    .set_fg(glyph_color(glyph));
            }
        }
    }
}

fn glyph_color(glyph: char) -> Color {
    match glyph {
        '@' => Color::Yellow,
        'e' => Color::Red,
        '/' => Color::Cyan,
        '!' => Color::Magenta,
        'k' => Color::LightYellow,
        'X' => Color::LightRed,
        '+' => Color::Rgb(160, 110, 60),
        '.' => Color::Rgb(90, 90, 90),
        _ => Color::Gray,
    }
}
