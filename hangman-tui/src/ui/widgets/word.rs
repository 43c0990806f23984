use crate::ui::theme::Theme;
use hangman::{word_cells, Cell, Game};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The masked word: one slot per character, gaps for spaces.
pub struct WordWidget<'a> {
    pub game: &'a Game,
    pub theme: &'a Theme,
}

impl<'a> WordWidget<'a> {
    pub fn new(game: &'a Game, theme: &'a Theme) -> Self {
        Self { game, theme }
    }
}

impl Widget for WordWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let spans: Vec<Span> = word_cells(self.game)
            .into_iter()
            .map(|cell| {
                let style = match cell {
                    Cell::Gap => Style::default(),
                    Cell::Revealed(_) => Style::default()
                        .fg(self.theme.positive)
                        .add_modifier(Modifier::BOLD),
                    Cell::Hidden => Style::default().fg(self.theme.muted),
                };
                Span::styled(format!("{} ", cell.glyph()), style)
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
