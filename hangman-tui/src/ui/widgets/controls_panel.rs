use crate::ui::theme::Theme;
use hangman::Screen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ControlsPanel<'a> {
    pub screen: Screen,
    pub theme: &'a Theme,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(screen: Screen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }

    fn bindings(&self) -> Vec<(&'static str, &'static str)> {
        let mut bindings = match self.screen {
            Screen::Playing => vec![
                ("a-z", "Guess letter"),
                ("←↑↓→", "Move cursor"),
                ("Enter", "Guess key"),
                ("Click", "Guess key"),
            ],
            Screen::Title => vec![("s", "Start"), ("Enter", "Start")],
            Screen::Won => vec![("n", "Try again"), ("Enter", "Press button")],
            Screen::Lost => vec![
                ("r", "Reveal word"),
                ("n", "Try again"),
                ("←→", "Select button"),
                ("Enter", "Press button"),
            ],
        };

        bindings.push(("Tab", "Toggle theme"));
        if self.screen != Screen::Playing {
            bindings.push(("q", "Quit"));
        }
        bindings.push(("Esc", "Quit"));
        bindings
    }
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("⌨ Controls ⌨")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let key_style = Style::default()
            .fg(self.theme.positive)
            .add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = self
            .bindings()
            .into_iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(format!("{:<6}", key), key_style),
                    Span::styled(what, Style::default().fg(self.theme.text_secondary)),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
