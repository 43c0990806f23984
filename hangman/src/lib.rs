pub mod display;
pub mod game;
pub mod words;

pub use display::{
    chance_markers, key_position, key_state, word_cells, Button, ChanceMarker, Cell, KeyState,
    Screen, KEY_ROWS,
};
pub use game::{Game, GuessOutcome, Status, MAX_CHANCES};
pub use words::{WordList, WordListError, DEFAULT_WORDS};
