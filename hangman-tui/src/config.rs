//! Runtime configuration for the hangman TUI.
//!
//! Every tunable can come from a command-line flag, an environment variable
//! or a compiled default, in that order of priority.

use crate::ui::theme::{Theme, ThemeChoice};
use clap::Parser;
use hangman::{WordList, WordListError};
use std::path::{Path, PathBuf};

/// Default directory for the rolling log files.
const DEFAULT_LOG_DIR: &str = "logs";

/// Word file picked up from the home directory when nothing else is set.
const HOME_WORDS_FILE: &str = ".hangman/words.json";

/// Command-line arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "hangman", about = "Guess the word before you run out of chances")]
pub struct Cli {
    /// Word list file: a JSON array of strings, or one word per line.
    #[arg(short, long, value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// Seed for the word picker, for reproducible games.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Color theme.
    #[arg(short, long, value_enum)]
    pub theme: Option<ThemeChoice>,

    /// Directory the log files are written to.
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,
}

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub words_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub theme: Theme,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            words_path: get_words_path(cli.words),
            seed: get_seed(cli.seed),
            theme: Theme::new(get_theme(cli.theme)),
            log_dir: get_log_dir(cli.log_dir),
        }
    }

    /// Load the configured word list, or the built-in one if none is set.
    pub fn load_words(&self) -> Result<WordList, WordListError> {
        match &self.words_path {
            Some(path) => WordList::from_file(path),
            None => Ok(WordList::default()),
        }
    }
}

/// Get the word list path.
///
/// Priority:
/// 1. `--words` flag
/// 2. `HANGMAN_WORDS` env variable if set
/// 3. `~/.hangman/words.json` if it exists
/// 4. none, the built-in list is used
pub fn get_words_path(cli: Option<PathBuf>) -> Option<PathBuf> {
    let home_file = dirs::home_dir().map(|home| home.join(HOME_WORDS_FILE));
    resolve_words_path(
        cli,
        std::env::var_os("HANGMAN_WORDS").map(PathBuf::from),
        home_file.as_deref(),
    )
}

fn resolve_words_path(
    cli: Option<PathBuf>,
    env: Option<PathBuf>,
    home_file: Option<&Path>,
) -> Option<PathBuf> {
    cli.or(env)
        .or_else(|| home_file.filter(|p| p.is_file()).map(Path::to_path_buf))
}

/// Get the word picker seed.
///
/// Priority:
/// 1. `--seed` flag
/// 2. `HANGMAN_SEED` env variable (ignored if it does not parse as `u64`)
/// 3. none, the picker is seeded from OS entropy
pub fn get_seed(cli: Option<u64>) -> Option<u64> {
    cli.or_else(|| std::env::var("HANGMAN_SEED").ok()?.parse().ok())
}

/// Get the color theme.
///
/// Priority:
/// 1. `--theme` flag
/// 2. `HANGMAN_THEME` env variable (ignored unless `dark` or `light`)
/// 3. dark
pub fn get_theme(cli: Option<ThemeChoice>) -> ThemeChoice {
    cli.or_else(|| ThemeChoice::parse(&std::env::var("HANGMAN_THEME").ok()?))
        .unwrap_or_default()
}

/// Get the log directory.
///
/// Priority:
/// 1. `--log-dir` flag
/// 2. `HANGMAN_LOG_DIR` env variable if set
/// 3. `logs` as fallback
pub fn get_log_dir(cli: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = cli {
        return dir;
    }
    if let Ok(dir) = std::env::var("HANGMAN_LOG_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}
