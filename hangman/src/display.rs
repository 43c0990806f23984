//! Render-ready projections of a [`Game`].
//!
//! Everything here is a pure function of the session, so any frontend can
//! redraw the whole view from scratch after each transition.

use crate::game::{Game, Status, MAX_CHANCES};

/// On-screen keyboard, laid out like a physical QWERTY keyboard.
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Glyph shown for a letter that has not been guessed yet.
pub const HIDDEN_GLYPH: char = '?';

/// One character position of the masked word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Word separator, drawn as a gap.
    Gap,
    Revealed(char),
    Hidden,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Self::Gap => ' ',
            Self::Revealed(c) => c,
            Self::Hidden => HIDDEN_GLYPH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Not guessed yet, can be pressed.
    Available,
    /// Guessed and in the word.
    Correct,
    /// Guessed and not in the word.
    Incorrect,
}

impl KeyState {
    pub fn is_enabled(self) -> bool {
        self == Self::Available
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanceMarker {
    Remaining,
    Used,
}

/// Actions offered by the panel under the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Start,
    Reveal,
    TryAgain,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Reveal => "Reveal",
            Self::TryAgain => "Try again?",
        }
    }
}

/// Which top-level view to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// No game has been started yet.
    Title,
    Playing,
    Won,
    Lost,
}

impl Screen {
    pub fn of(game: Option<&Game>) -> Self {
        match game.map(Game::status) {
            None => Self::Title,
            Some(Status::Playing) => Self::Playing,
            Some(Status::Won) => Self::Won,
            Some(Status::Lost) => Self::Lost,
        }
    }

    /// Heading shown above the buttons, if any.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Self::Title => Some("Hangman"),
            Self::Playing => None,
            Self::Won => Some("You won."),
            Self::Lost => Some("You lost."),
        }
    }

    pub fn buttons(self) -> &'static [Button] {
        match self {
            Self::Title => &[Button::Start],
            Self::Playing => &[],
            Self::Won => &[Button::TryAgain],
            Self::Lost => &[Button::Reveal, Button::TryAgain],
        }
    }

    /// Whether the word and chances are on screen.
    pub fn shows_board(self) -> bool {
        self != Self::Title
    }
}

/// One cell per character of the word.
pub fn word_cells(game: &Game) -> Vec<Cell> {
    game.word()
        .chars()
        .map(|c| {
            if c == ' ' {
                Cell::Gap
            } else if game.is_guessed(c) {
                Cell::Revealed(c)
            } else {
                Cell::Hidden
            }
        })
        .collect()
}

pub fn key_state(game: &Game, letter: char) -> KeyState {
    if !game.is_guessed(letter) {
        KeyState::Available
    } else if game.contains(letter) {
        KeyState::Correct
    } else {
        KeyState::Incorrect
    }
}

pub fn chance_markers(chances: u8) -> [ChanceMarker; MAX_CHANCES as usize] {
    std::array::from_fn(|i| {
        if i < chances as usize {
            ChanceMarker::Remaining
        } else {
            ChanceMarker::Used
        }
    })
}

/// Row and column of `letter` on the on-screen keyboard.
pub fn key_position(letter: char) -> Option<(usize, usize)> {
    KEY_ROWS
        .iter()
        .enumerate()
        .find_map(|(row, keys)| keys.find(letter).map(|col| (row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_word_with_space() {
        let game = Game::start("ice cream");
        let cells = word_cells(&game);
        assert_eq!(cells.len(), 9);
        assert_eq!(cells.iter().filter(|c| **c == Cell::Gap).count(), 1);
        assert_eq!(cells.iter().filter(|c| **c == Cell::Hidden).count(), 8);
        assert_eq!(cells[3], Cell::Gap);
    }

    #[test]
    fn test_guessed_letters_revealed() {
        let mut game = Game::start("cat");
        game.guess('a');
        let glyphs: String = word_cells(&game).into_iter().map(Cell::glyph).collect();
        assert_eq!(glyphs, "?a?");
    }

    #[test]
    fn test_key_states() {
        let mut game = Game::start("cat");
        game.guess('c');
        game.guess('z');
        assert_eq!(key_state(&game, 'c'), KeyState::Correct);
        assert_eq!(key_state(&game, 'z'), KeyState::Incorrect);
        assert_eq!(key_state(&game, 'q'), KeyState::Available);
        assert!(key_state(&game, 'q').is_enabled());
        assert!(!key_state(&game, 'c').is_enabled());
    }

    #[test]
    fn test_keyboard_covers_alphabet_once() {
        let mut letters: Vec<char> = KEY_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('a'..='z').collect();
        assert_eq!(letters, alphabet);
    }

    #[test]
    fn test_key_position() {
        assert_eq!(key_position('q'), Some((0, 0)));
        assert_eq!(key_position('l'), Some((1, 8)));
        assert_eq!(key_position('m'), Some((2, 6)));
        assert_eq!(key_position('1'), None);
    }

    #[test]
    fn test_chance_markers() {
        use ChanceMarker::{Remaining, Used};
        assert_eq!(chance_markers(5), [Remaining; 5]);
        assert_eq!(chance_markers(2), [Remaining, Remaining, Used, Used, Used]);
        assert_eq!(chance_markers(0), [Used; 5]);
    }

    #[test]
    fn test_screen_projection() {
        assert_eq!(Screen::of(None), Screen::Title);
        assert_eq!(Screen::Title.buttons(), &[Button::Start]);

        let mut game = Game::start("cat");
        assert_eq!(Screen::of(Some(&game)), Screen::Playing);
        assert!(Screen::Playing.buttons().is_empty());

        for c in "xyzqwe".chars() {
            game.guess(c);
        }
        assert_eq!(Screen::of(Some(&game)), Screen::Lost);
        assert_eq!(Screen::Lost.heading(), Some("You lost."));
        assert_eq!(Screen::Lost.buttons(), &[Button::Reveal, Button::TryAgain]);

        let mut game = Game::start("hi");
        game.guess('h');
        game.guess('i');
        assert_eq!(Screen::of(Some(&game)), Screen::Won);
        assert_eq!(Screen::Won.buttons(), &[Button::TryAgain]);
    }
}
