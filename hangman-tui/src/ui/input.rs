use crate::state::{Action, Direction};
use crate::ui::hit_map::HitMap;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use hangman::{Button, Screen};

/// Map a key press to an action for the given screen.
///
/// While playing every letter is a guess, so quitting needs `Esc` or
/// `Ctrl-C` there.
pub fn map_key(key: KeyEvent, screen: Screen) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::ToggleTheme),
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => map_letter(c.to_ascii_lowercase(), screen),
        _ => None,
    }
}

fn map_letter(c: char, screen: Screen) -> Option<Action> {
    match (screen, c) {
        (Screen::Playing, c) => Some(Action::Guess(c)),
        (_, 'q') => Some(Action::Quit),
        (Screen::Title, 's' | 'n') => Some(Action::Press(Button::Start)),
        (Screen::Won | Screen::Lost, 'n' | 't') => Some(Action::Press(Button::TryAgain)),
        (Screen::Lost, 'r') => Some(Action::Press(Button::Reveal)),
        _ => None,
    }
}

/// Map a left click to whatever was drawn under the pointer.
pub fn map_mouse(mouse: MouseEvent, hits: &HitMap) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => hits.action_at(mouse.column, mouse.row),
        _ => None,
    }
}
