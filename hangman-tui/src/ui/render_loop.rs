use crate::state::{Action, AppState};
use crate::ui::hit_map::HitMap;
use crate::ui::input;
use crate::ui::widgets::{
    ChancesWidget, ControlsPanel, KeyboardWidget, OutcomePanel, WordWidget,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use hangman::Screen;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;

const CONTROLS_WIDTH: u16 = 28;

/// Run the TUI until the player quits.
pub async fn run_app(mut state: AppState) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut state).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let mut hits = HitMap::default();

    while !state.should_quit() {
        terminal.draw(|f| hits = draw(f, state))?;

        let Some(event) = events.next().await else {
            tracing::warn!("terminal event stream closed");
            break;
        };

        let action = match event? {
            Event::Key(key) => input::map_key(key, state.screen()),
            Event::Mouse(mouse) => input::map_mouse(mouse, &hits),
            _ => None,
        };
        if let Some(action) = action {
            state.apply(action);
        }
    }

    Ok(())
}

/// Draw the whole UI from `state` and return the clickable regions.
pub fn draw(f: &mut Frame, state: &AppState) -> HitMap {
    let mut hits = HitMap::default();
    let theme = &state.theme;
    let screen = state.screen();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(CONTROLS_WIDTH)])
        .split(main_chunks[0]);

    f.render_widget(ControlsPanel::new(screen, theme), chunks[1]);

    let status = state.status_message.as_deref().unwrap_or("");
    f.render_widget(
        Paragraph::new(Line::styled(status, Style::default().fg(theme.warning)))
            .alignment(Alignment::Center),
        main_chunks[1],
    );

    let Some(game) = state.game.as_ref() else {
        let panel = centered(chunks[0], OutcomePanel::height());
        draw_outcome_panel(f, panel, state, &mut hits);
        return hits;
    };

    let board_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(3), // Chances
            Constraint::Length(1),
            Constraint::Min(KeyboardWidget::height()),
        ])
        .split(chunks[0]);

    f.render_widget(WordWidget::new(game, theme), board_chunks[0]);
    f.render_widget(
        ChancesWidget { game, theme },
        board_chunks[1],
    );

    if screen == Screen::Playing {
        let keyboard = board_chunks[3];
        for (letter, key_area) in KeyboardWidget::key_areas(keyboard) {
            if !game.is_guessed(letter) {
                hits.register(key_area, Action::Guess(letter));
            }
        }
        f.render_widget(
            KeyboardWidget {
                game,
                cursor: state.cursor,
                theme,
            },
            keyboard,
        );
    } else {
        draw_outcome_panel(f, board_chunks[3], state, &mut hits);
    }

    hits
}

fn draw_outcome_panel(f: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let screen = state.screen();
    for (button, button_area) in OutcomePanel::button_areas(area, screen.buttons()) {
        hits.register(button_area, Action::Press(button));
    }
    f.render_widget(
        OutcomePanel {
            screen,
            selected: state.selected_button,
            theme: &state.theme,
        },
        area,
    );
}

/// Vertically center a strip of `height` rows inside `area`.
fn centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}
