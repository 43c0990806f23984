use crate::ui::theme::Theme;
use hangman::{Button, Screen};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;
/// Heading line plus one blank line.
const HEADING_ROWS: u16 = 2;

/// Heading and buttons shown on the title, won and lost screens.
pub struct OutcomePanel<'a> {
    pub screen: Screen,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl OutcomePanel<'_> {
    pub fn height() -> u16 {
        HEADING_ROWS + BUTTON_HEIGHT
    }

    /// Where each button of `buttons` lands inside `area`, centered in one row.
    pub fn button_areas(area: Rect, buttons: &[Button]) -> Vec<(Button, Rect)> {
        let y = area.y + HEADING_ROWS;
        if y >= area.bottom() {
            return Vec::new();
        }

        let widths: Vec<u16> = buttons.iter().map(|b| button_width(*b)).collect();
        let total = widths.iter().sum::<u16>()
            + BUTTON_GAP * (buttons.len() as u16).saturating_sub(1);
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        buttons
            .iter()
            .zip(widths)
            .filter_map(|(button, width)| {
                let rect = Rect::new(x, y, width, BUTTON_HEIGHT).intersection(area);
                x += width + BUTTON_GAP;
                (!rect.is_empty()).then_some((*button, rect))
            })
            .collect()
    }
}

fn button_width(button: Button) -> u16 {
    button.label().len() as u16 + 4
}

impl Widget for OutcomePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(heading) = self.screen.heading() {
            let color = match self.screen {
                Screen::Won => self.theme.positive,
                Screen::Lost => self.theme.negative,
                _ => self.theme.panel_title,
            };
            let heading_area = Rect { height: 1, ..area };
            Paragraph::new(Line::styled(
                heading,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .render(heading_area, buf);
        }

        for (index, (button, button_area)) in Self::button_areas(area, self.screen.buttons())
            .into_iter()
            .enumerate()
        {
            let selected = index == self.selected;
            let (text_style, border_style) = if selected {
                (
                    Style::default()
                        .fg(self.theme.key_cursor)
                        .bg(self.theme.key_cursor_bg)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(self.theme.key_cursor),
                )
            } else {
                (
                    Style::default().fg(self.theme.text_primary),
                    Style::default().fg(self.theme.button_border),
                )
            };

            Paragraph::new(button.label())
                .style(text_style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                )
                .render(button_area, buf);
        }
    }
}
