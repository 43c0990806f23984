use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hangman_tui::prelude::*;

fn state_with(word: &str) -> AppState {
    let words = WordList::new(vec![word.to_string()]).unwrap();
    AppState::new(words, Some(1), Theme::dark())
}

fn press(state: &mut AppState, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(action) = map_key(key, state.screen()) {
        state.apply(action);
    }
}

fn type_letters(state: &mut AppState, letters: &str) {
    for c in letters.chars() {
        press(state, KeyCode::Char(c));
    }
}

fn game(state: &AppState) -> &Game {
    state.game.as_ref().expect("game started")
}

mod lifecycle_tests {
    use super::*;

    #[test]
    fn starts_on_title_screen() {
        let state = state_with("cat");
        assert_eq!(state.screen(), Screen::Title);
        assert!(state.game.is_none());
    }

    #[test]
    fn start_key_begins_game() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));

        assert_eq!(state.screen(), Screen::Playing);
        assert_eq!(game(&state).word(), "cat");
        assert_eq!(game(&state).chances(), 5);
    }

    #[test]
    fn enter_on_title_presses_start() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen(), Screen::Playing);
    }

    #[test]
    fn guessing_the_word_wins_then_try_again_restarts() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));
        type_letters(&mut state, "cat");

        assert_eq!(state.screen(), Screen::Won);
        assert_eq!(game(&state).chances(), 5);
        assert_eq!(state.status_message.as_deref(), Some("The word was \"cat\""));

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen(), Screen::Playing);
        assert!(game(&state).guessed().is_empty());
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn sixth_miss_loses_and_reveal_shows_word() {
        let mut state = state_with("ice cream");
        press(&mut state, KeyCode::Char('s'));
        type_letters(&mut state, "xyzqw");
        assert_eq!(state.screen(), Screen::Playing);
        assert_eq!(game(&state).chances(), 0);

        press(&mut state, KeyCode::Char('u'));
        assert_eq!(state.screen(), Screen::Lost);

        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.screen(), Screen::Lost);
        for c in "ice cream".chars() {
            assert!(game(&state).is_guessed(c));
        }

        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.screen(), Screen::Playing);
        assert_eq!(game(&state).chances(), 5);
    }

    #[test]
    fn repeated_letter_reports_and_keeps_chances() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));
        type_letters(&mut state, "zz");

        assert_eq!(game(&state).chances(), 4);
        assert_eq!(state.status_message.as_deref(), Some("Already guessed 'z'"));
    }

    #[test]
    fn miss_message_counts_chances_left() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));

        type_letters(&mut state, "xyz");
        assert_eq!(state.status_message.as_deref(), Some("No 'z'. 2 chances left"));

        press(&mut state, KeyCode::Char('q'));
        assert_eq!(state.status_message.as_deref(), Some("No 'q'. 1 chance left"));

        press(&mut state, KeyCode::Char('w'));
        assert_eq!(state.status_message.as_deref(), Some("No 'w'. Last guess"));
    }

    #[test]
    fn capitalised_list_word_can_be_won() {
        let words = WordList::from_lines("Cat\n").unwrap();
        let mut state = AppState::new(words, Some(1), Theme::dark());
        press(&mut state, KeyCode::Char('s'));
        type_letters(&mut state, "cat");

        assert_eq!(state.screen(), Screen::Won);
        assert_eq!(game(&state).word(), "cat");
    }

    #[test]
    fn uppercase_letters_guess_lowercase() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char('C'));
        assert!(game(&state).is_guessed('c'));
    }

    #[test]
    fn reveal_button_ignored_while_playing() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));
        state.apply(Action::Press(Button::Reveal));

        assert!(game(&state).guessed().is_empty());
        assert_eq!(state.screen(), Screen::Playing);
    }
}

mod quit_tests {
    use super::*;

    #[test]
    fn q_is_a_guess_while_playing() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char('q'));

        assert!(!state.should_quit());
        assert!(game(&state).is_guessed('q'));
    }

    #[test]
    fn q_quits_on_title() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit());
    }

    #[test]
    fn esc_and_ctrl_c_quit_while_playing() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Esc);
        assert!(state.should_quit());

        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, state.screen()), Some(Action::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, Screen::Playing), None);
    }
}

mod cursor_tests {
    use super::*;

    #[test]
    fn enter_guesses_key_under_cursor() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.cursor_letter(), Some('q'));

        press(&mut state, KeyCode::Right);
        assert_eq!(state.cursor_letter(), Some('w'));

        press(&mut state, KeyCode::Enter);
        assert!(game(&state).is_guessed('w'));
        assert_eq!(game(&state).chances(), 4);
    }

    #[test]
    fn cursor_follows_typed_letter() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char('a'));
        assert_eq!(state.cursor, (1, 0));

        press(&mut state, KeyCode::Down);
        assert_eq!(state.cursor_letter(), Some('z'));
    }

    #[test]
    fn arrows_select_outcome_buttons() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));
        type_letters(&mut state, "bdefgh");
        assert_eq!(state.screen(), Screen::Lost);
        assert_eq!(state.selected_button, 0);

        press(&mut state, KeyCode::Right);
        assert_eq!(state.selected_button, 1);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.selected_button, 0);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.selected_button, 1);

        // Try again
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen(), Screen::Playing);
    }

    #[test]
    fn enter_on_reveal_keeps_lost_screen() {
        let mut state = state_with("cat");
        press(&mut state, KeyCode::Char('s'));
        type_letters(&mut state, "bdefgh");

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen(), Screen::Lost);
        assert!(game(&state).is_guessed('c'));
    }

    #[test]
    fn tab_toggles_theme() {
        let mut state = state_with("cat");
        assert!(state.theme.is_dark());
        press(&mut state, KeyCode::Tab);
        assert!(!state.theme.is_dark());
    }
}
