use crate::ui::theme::Theme;
use hangman::{key_position, Button, Game, GuessOutcome, Screen, WordList, KEY_ROWS};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Something the player asked for, from a key press or a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Guess(char),
    Press(Button),
    MoveCursor(Direction),
    /// Press whatever the cursor is on.
    Activate,
    ToggleTheme,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Main application state.
///
/// `game` is `None` until the first start; after that it always holds the
/// current session, finished or not.
pub struct AppState {
    pub game: Option<Game>,
    words: WordList,
    rng: StdRng,
    /// Row and column of the highlighted key on the on-screen keyboard.
    pub cursor: (usize, usize),
    /// Index into the current screen's buttons.
    pub selected_button: usize,
    pub theme: Theme,
    pub status_message: Option<String>,
    should_quit: bool,
}

impl AppState {
    pub fn new(words: WordList, seed: Option<u64>, theme: Theme) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            game: None,
            words,
            rng,
            cursor: (0, 0),
            selected_button: 0,
            theme,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        Screen::of(self.game.as_ref())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Letter under the keyboard cursor.
    pub fn cursor_letter(&self) -> Option<char> {
        let (row, col) = self.cursor;
        KEY_ROWS.get(row)?.chars().nth(col)
    }

    pub fn apply(&mut self, action: Action) {
        tracing::trace!(?action, "apply");
        match action {
            Action::Guess(letter) => self.guess(letter),
            Action::Press(button) => self.press(button),
            Action::MoveCursor(direction) => self.move_cursor(direction),
            Action::Activate => self.activate(),
            Action::ToggleTheme => {
                self.theme.toggle();
                tracing::debug!(theme = self.theme.name(), "theme toggled");
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Begin a new session with a fresh random word.
    pub fn start(&mut self) {
        let game = Game::random(&self.words, &mut self.rng);
        tracing::info!(
            letters = game.word().chars().filter(|c| *c != ' ').count(),
            "new game"
        );
        self.game = Some(game);
        self.selected_button = 0;
        self.status_message = None;
    }

    fn guess(&mut self, letter: char) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let letter = letter.to_ascii_lowercase();
        let outcome = game.guess(letter);
        self.status_message = match outcome {
            GuessOutcome::Hit => Some(format!("'{}' is in the word", letter)),
            GuessOutcome::Miss => Some(format!(
                "No '{}'. {}",
                letter,
                chances_left(game.chances())
            )),
            GuessOutcome::Won => Some(format!("The word was \"{}\"", game.word())),
            GuessOutcome::Lost => Some("Out of chances".to_string()),
            GuessOutcome::Repeated => Some(format!("Already guessed '{}'", letter)),
            GuessOutcome::Ignored => return,
        };

        if game.is_over() {
            self.selected_button = 0;
        }
        if let Some(position) = key_position(letter) {
            self.cursor = position;
        }
    }

    fn press(&mut self, button: Button) {
        // Mouse hits may be stale by one frame.
        if !self.screen().buttons().contains(&button) {
            tracing::debug!(?button, screen = ?self.screen(), "button not on screen");
            return;
        }

        match button {
            Button::Start | Button::TryAgain => self.start(),
            Button::Reveal => {
                if let Some(game) = self.game.as_mut() {
                    game.reveal();
                    self.status_message = Some(format!("The word was \"{}\"", game.word()));
                }
            }
        }
    }

    fn activate(&mut self) {
        match self.screen() {
            Screen::Playing => {
                if let Some(letter) = self.cursor_letter() {
                    self.guess(letter);
                }
            }
            screen => {
                if let Some(&button) = screen.buttons().get(self.selected_button) {
                    self.press(button);
                }
            }
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        let screen = self.screen();
        if screen == Screen::Playing {
            self.cursor = step_key(self.cursor, direction);
            return;
        }

        let count = screen.buttons().len();
        if count == 0 {
            return;
        }
        self.selected_button = match direction {
            Direction::Left | Direction::Up => (self.selected_button + count - 1) % count,
            Direction::Right | Direction::Down => (self.selected_button + 1) % count,
        };
    }
}

fn chances_left(chances: u8) -> String {
    match chances {
        0 => "Last guess".to_string(),
        1 => "1 chance left".to_string(),
        n => format!("{} chances left", n),
    }
}

/// Move one key on the keyboard, wrapping at the edges. Moving between rows
/// of different length clamps to the last key of the shorter row.
fn step_key((row, col): (usize, usize), direction: Direction) -> (usize, usize) {
    let rows = KEY_ROWS.len();
    let row_len = |r: usize| KEY_ROWS[r].len();

    match direction {
        Direction::Left => (row, (col + row_len(row) - 1) % row_len(row)),
        Direction::Right => (row, (col + 1) % row_len(row)),
        Direction::Up => {
            let row = (row + rows - 1) % rows;
            (row, col.min(row_len(row) - 1))
        }
        Direction::Down => {
            let row = (row + 1) % rows;
            (row, col.min(row_len(row) - 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chances_left_wording() {
        assert_eq!(chances_left(4), "4 chances left");
        assert_eq!(chances_left(1), "1 chance left");
        assert_eq!(chances_left(0), "Last guess");
    }

    #[test]
    fn test_step_key_wraps_within_row() {
        assert_eq!(step_key((0, 0), Direction::Left), (0, 9));
        assert_eq!(step_key((0, 9), Direction::Right), (0, 0));
        assert_eq!(step_key((2, 6), Direction::Right), (2, 0));
    }

    #[test]
    fn test_step_key_clamps_between_rows() {
        assert_eq!(step_key((0, 9), Direction::Down), (1, 8));
        assert_eq!(step_key((1, 8), Direction::Down), (2, 6));
        assert_eq!(step_key((2, 3), Direction::Down), (0, 3));
        assert_eq!(step_key((0, 4), Direction::Up), (2, 4));
    }
}
