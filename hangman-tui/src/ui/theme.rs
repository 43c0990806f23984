use clap::ValueEnum;
use ratatui::style::Color;

/// All colors used by the TUI, grouped by purpose.
/// Swap between presets (Dark / Light) to adapt to the terminal background.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub choice: ThemeChoice,

    // ── Panel chrome ──────────────────────────────────────────────
    pub panel_border: Color,
    pub panel_title: Color,

    // ── Keys and buttons ──────────────────────────────────────────
    pub key_border: Color,
    pub key_cursor: Color,
    pub key_cursor_bg: Color,
    pub button_border: Color,

    // ── Semantic status ───────────────────────────────────────────
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub muted: Color,

    // ── Text ──────────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Theme {
    /// Dark theme, for terminals with a dark background.
    pub fn dark() -> Self {
        Self {
            choice: ThemeChoice::Dark,

            panel_border: Color::Cyan,
            panel_title: Color::Yellow,

            key_border: Color::Gray,
            key_cursor: Color::Yellow,
            key_cursor_bg: Color::DarkGray,
            button_border: Color::Cyan,

            positive: Color::Green,
            negative: Color::Red,
            warning: Color::Yellow,
            muted: Color::DarkGray,

            text_primary: Color::White,
            text_secondary: Color::Gray,
        }
    }

    /// Light theme, for terminals with a light background.
    /// Uses explicit RGB to avoid ANSI color remapping.
    pub fn light() -> Self {
        Self {
            choice: ThemeChoice::Light,

            panel_border: Color::Rgb(60, 120, 140),
            panel_title: Color::Rgb(160, 130, 30),

            key_border: Color::Rgb(100, 100, 100),
            key_cursor: Color::Rgb(160, 130, 30),
            key_cursor_bg: Color::Rgb(220, 220, 210),
            button_border: Color::Rgb(60, 120, 140),

            positive: Color::Rgb(30, 140, 30),
            negative: Color::Rgb(200, 40, 40),
            warning: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),

            text_primary: Color::Rgb(30, 30, 30),
            text_secondary: Color::Rgb(100, 100, 100),
        }
    }

    pub fn new(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Switch to the other palette.
    pub fn toggle(&mut self) {
        *self = Self::new(self.choice.other());
    }

    pub fn is_dark(&self) -> bool {
        self.choice == ThemeChoice::Dark
    }

    pub fn name(&self) -> &'static str {
        self.choice.name()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Palette selectable with `--theme` or `HANGMAN_THEME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    /// Parse a theme name the same way the `--theme` flag does, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }

    pub fn other(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_know_their_variant() {
        assert!(Theme::dark().is_dark());
        assert_eq!(Theme::dark().name(), "Dark");
        assert!(!Theme::light().is_dark());
        assert_eq!(Theme::light().name(), "Light");
        assert_eq!(Theme::new(ThemeChoice::Light), Theme::light());
    }

    #[test]
    fn toggle_switches_palette() {
        let mut theme = Theme::dark();
        theme.toggle();
        assert_eq!(theme, Theme::light());
        theme.toggle();
        assert_eq!(theme, Theme::dark());
    }

    #[test]
    fn parse_accepts_names_in_any_case() {
        assert_eq!(ThemeChoice::parse("light"), Some(ThemeChoice::Light));
        assert_eq!(ThemeChoice::parse(" DARK "), Some(ThemeChoice::Dark));
        assert_eq!(ThemeChoice::parse("bogus"), None);
    }
}
