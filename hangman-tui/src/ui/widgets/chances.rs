use crate::ui::theme::Theme;
use hangman::{chance_markers, ChanceMarker, Game, MAX_CHANCES};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Row of markers, one per allowed miss, followed by the letters missed so far.
pub struct ChancesWidget<'a> {
    pub game: &'a Game,
    pub theme: &'a Theme,
}

impl Widget for ChancesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Chances {}/{} ", self.game.chances(), MAX_CHANCES))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans: Vec<Span> = chance_markers(self.game.chances())
            .into_iter()
            .map(|marker| match marker {
                ChanceMarker::Remaining => {
                    Span::styled("● ", Style::default().fg(self.theme.positive))
                }
                ChanceMarker::Used => Span::styled("○ ", Style::default().fg(self.theme.negative)),
            })
            .collect();

        let misses: String = self.game.misses().map(|c| format!("{} ", c)).collect();
        if !misses.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                misses,
                Style::default()
                    .fg(self.theme.negative)
                    .add_modifier(Modifier::CROSSED_OUT),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
