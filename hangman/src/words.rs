//! Word list the game draws its secret words from.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::path::Path;

/// Words used when no list is supplied.
pub const DEFAULT_WORDS: &[&str] = &[
    "apple",
    "banana",
    "cherry",
    "ice cream",
    "chocolate",
    "pancake",
    "lemonade",
    "strawberry",
    "peanut butter",
    "hot dog",
    "keyboard",
    "terminal",
    "compiler",
    "borrow checker",
    "lighthouse",
    "volcano",
    "penguin",
    "giraffe",
    "kangaroo",
    "rainbow",
    "thunderstorm",
    "snowflake",
    "bicycle",
    "submarine",
    "hot air balloon",
    "treasure map",
    "pirate ship",
    "dragon",
    "castle",
    "wizard",
];

/// Non-empty, ordered sequence of candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

/// Accepted layouts of a JSON word file.
#[derive(Deserialize)]
#[serde(untagged)]
enum WordFile {
    List(Vec<String>),
    Object { words: Vec<String> },
}

impl WordList {
    /// Build a list, rejecting an empty one.
    ///
    /// Words are lowercased. A word must be made of `a`-`z` letters, with
    /// single spaces between its parts, or it could never be completed from
    /// the on-screen keyboard.
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        let words = words
            .into_iter()
            .map(|word| {
                let word = word.to_lowercase();
                if is_guessable(&word) {
                    Ok(word)
                } else {
                    Err(WordListError::Unguessable(word))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { words })
    }

    /// Load a word list from disk.
    ///
    /// `.json` files hold either an array of strings or an object with a
    /// `words` array. Anything else is read as one word per line; entries
    /// are trimmed and blank lines skipped.
    pub fn from_file(path: &Path) -> Result<Self, WordListError> {
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let list = if is_json {
            Self::from_json(&contents)?
        } else {
            Self::from_lines(&contents)?
        };
        tracing::info!(path = %path.display(), count = list.len(), "loaded word list");
        Ok(list)
    }

    pub fn from_json(json: &str) -> Result<Self, WordListError> {
        let words = match serde_json::from_str::<WordFile>(json)? {
            WordFile::List(words) | WordFile::Object { words } => words,
        };
        Self::new(words)
    }

    pub fn from_lines(text: &str) -> Result<Self, WordListError> {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self::new(words)
    }

    /// Pick one word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // The list is never empty, the fallback is unreachable.
        self.words.choose(rng).map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn is_guessable(word: &str) -> bool {
    word.split(' ')
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase()))
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("Word list is empty")]
    Empty,
    #[error("Word {0:?} has characters that cannot be guessed")]
    Unguessable(String),
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse word list: {0}")]
    Json(#[from] serde_json::Error),
}
