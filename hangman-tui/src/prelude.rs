// Re-export state types
pub use crate::state::{Action, AppState, Direction};

// Re-export UI types
pub use crate::ui::input::{map_key, map_mouse};
pub use crate::ui::{draw, HitMap, Theme, ThemeChoice};

// Re-export game types
pub use hangman::{Button, Game, GuessOutcome, Screen, Status, WordList};
