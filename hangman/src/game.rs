use crate::words::WordList;
use rand::Rng;
use std::collections::BTreeSet;

/// Number of wrong guesses a player may make before the next miss loses.
pub const MAX_CHANCES: u8 = 5;

/// Coarse outcome of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single call to [`Game::guess`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word, word not complete yet.
    Hit,
    /// Letter is not in the word, one chance was used.
    Miss,
    /// Letter completed the word.
    Won,
    /// Letter missed with no chances left.
    Lost,
    /// Letter was guessed before; nothing changed.
    Repeated,
    /// Game is already won or lost; nothing changed.
    Ignored,
}

/// One playthrough: the secret word, the letters tried so far and the
/// remaining chances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    word: String,
    guessed: BTreeSet<char>,
    chances: u8,
    status: Status,
}

impl Game {
    /// Start a fresh session for `word`. The word is lowercased, guesses
    /// are too.
    pub fn start(word: impl Into<String>) -> Self {
        let word = word.into().to_lowercase();
        tracing::debug!(len = word.chars().count(), "starting game");
        Self {
            word,
            guessed: BTreeSet::new(),
            chances: MAX_CHANCES,
            status: Status::Playing,
        }
    }

    /// Start a fresh session with a word drawn uniformly from `words`.
    pub fn random<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Self {
        Self::start(words.choose(rng))
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn chances(&self) -> u8 {
        self.chances
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Whether `letter` occurs anywhere in the word.
    pub fn contains(&self, letter: char) -> bool {
        self.word.contains(letter)
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Guessed letters that are not part of the word, in alphabetical order.
    pub fn misses(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied().filter(|c| !self.contains(*c))
    }

    /// Guess a letter.
    ///
    /// A miss with zero chances left ends the game without going below
    /// zero, so the last wrong guess never shows up in the chance count.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.is_over() {
            tracing::debug!(%letter, status = %self.status, "guess after game over ignored");
            return GuessOutcome::Ignored;
        }

        let letter = letter.to_ascii_lowercase();
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }

        let outcome = if !self.contains(letter) {
            if self.chances == 0 {
                self.status = Status::Lost;
                GuessOutcome::Lost
            } else {
                self.chances -= 1;
                GuessOutcome::Miss
            }
        } else if self.is_complete() {
            self.status = Status::Won;
            GuessOutcome::Won
        } else {
            GuessOutcome::Hit
        };

        tracing::debug!(%letter, ?outcome, chances = self.chances, "guess");
        if self.is_over() {
            tracing::info!(status = %self.status, word = %self.word, "game over");
        }
        outcome
    }

    /// Mark every character of the word as guessed so the answer shows.
    /// Leaves the status alone.
    pub fn reveal(&mut self) {
        self.guessed = self.word.chars().collect();
    }

    fn is_complete(&self) -> bool {
        self.word
            .chars()
            .filter(|c| *c != ' ')
            .all(|c| self.guessed.contains(&c))
    }
}
