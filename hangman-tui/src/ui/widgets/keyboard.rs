use crate::ui::theme::Theme;
use hangman::{key_state, Game, KeyState, KEY_ROWS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const KEY_HEIGHT: u16 = 3;

/// Key width and gap, roomiest first. The first that fits the widest row
/// wins; the last one is used (and clipped) when nothing fits.
const KEY_SIZES: [(u16, u16); 4] = [(5, 1), (5, 0), (4, 0), (3, 0)];

/// On-screen keyboard in three QWERTY rows.
pub struct KeyboardWidget<'a> {
    pub game: &'a Game,
    pub cursor: (usize, usize),
    pub theme: &'a Theme,
}

impl KeyboardWidget<'_> {
    /// Rows needed to draw every key.
    pub fn height() -> u16 {
        KEY_ROWS.len() as u16 * KEY_HEIGHT
    }

    /// Key width and gap for an area `width` columns wide.
    pub fn key_size(width: u16) -> (u16, u16) {
        let widest = KEY_ROWS.iter().map(|keys| keys.len()).max().unwrap_or(0) as u16;
        KEY_SIZES
            .into_iter()
            .find(|(key, gap)| widest * key + widest.saturating_sub(1) * gap <= width)
            .unwrap_or(KEY_SIZES[KEY_SIZES.len() - 1])
    }

    /// Where each key lands inside `area`. Rows are centered independently,
    /// which gives the staggered look of a physical keyboard. Keys shrink to
    /// fit narrow areas; below the smallest size they are clipped or left
    /// out.
    pub fn key_areas(area: Rect) -> Vec<(char, Rect)> {
        let (key_width, key_gap) = Self::key_size(area.width);
        let mut areas = Vec::new();

        for (row, keys) in KEY_ROWS.iter().enumerate() {
            let y = area.y + row as u16 * KEY_HEIGHT;
            if y >= area.bottom() {
                break;
            }

            let count = keys.len() as u16;
            let row_width = count * key_width + (count - 1) * key_gap;
            let x0 = area.x + area.width.saturating_sub(row_width) / 2;

            for (col, letter) in keys.chars().enumerate() {
                let x = x0 + col as u16 * (key_width + key_gap);
                let key = Rect::new(x, y, key_width, KEY_HEIGHT).intersection(area);
                if !key.is_empty() {
                    areas.push((letter, key));
                }
            }
        }

        areas
    }
}

impl Widget for KeyboardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cursor_row, cursor_col) = self.cursor;
        let cursor_letter = KEY_ROWS
            .get(cursor_row)
            .and_then(|keys| keys.chars().nth(cursor_col));

        for (letter, key_area) in Self::key_areas(area) {
            let state = key_state(self.game, letter);
            let (text_style, border_style) = match state {
                KeyState::Available => (
                    Style::default().fg(self.theme.text_primary),
                    Style::default().fg(self.theme.key_border),
                ),
                KeyState::Correct => (
                    Style::default()
                        .fg(self.theme.positive)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(self.theme.positive),
                ),
                KeyState::Incorrect => (
                    Style::default()
                        .fg(self.theme.negative)
                        .add_modifier(Modifier::CROSSED_OUT),
                    Style::default().fg(self.theme.muted),
                ),
            };

            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);
            if cursor_letter == Some(letter) {
                block = block
                    .border_style(
                        Style::default()
                            .fg(self.theme.key_cursor)
                            .add_modifier(Modifier::BOLD),
                    )
                    .style(Style::default().bg(self.theme.key_cursor_bg));
            }

            Paragraph::new(letter.to_string())
                .style(text_style)
                .alignment(Alignment::Center)
                .block(block)
                .render(key_area, buf);
        }
    }
}
