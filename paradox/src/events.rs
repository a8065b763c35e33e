//! Event handling for the story TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::App;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event: the wheel turns pages.
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    if app.intro_visible {
        return EventResult::Continue;
    }
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            app.next_page();
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollUp => {
            app.prev_page();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    // Overlay keys take precedence over everything else
    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    if app.intro_visible {
        handle_intro_key(app, key)
    } else {
        handle_story_key(app, key)
    }
}

/// Handle keys while the intro screen is up
fn handle_intro_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        // The only path into the story
        KeyCode::Enter => {
            app.enter_experience();
            EventResult::NeedsRedraw
        }
        // Jump the playlist forward without waiting out the clip
        KeyCode::Char('s') | KeyCode::Right | KeyCode::Char('l') => {
            app.intro.skip();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('q') => EventResult::Quit,
        _ => EventResult::Continue,
    }
}

/// Handle keys on the main story screen
fn handle_story_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        // Page turning
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('n') => {
            app.next_page();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('p') => {
            app.prev_page();
            EventResult::NeedsRedraw
        }

        // Header control: re-enter the intro from the top
        KeyCode::Char('i') => {
            app.replay_intro();
            EventResult::NeedsRedraw
        }

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,

        _ => EventResult::Continue,
    }
}

/// Handle key when overlay is open
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paradox_core::HeroArt;

    fn test_app() -> App {
        App::new(HeroArt::load_from("missing.txt", "also-missing.txt"))
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_dismisses_intro() {
        let mut app = test_app();
        let result = handle_event(&mut app, press(KeyCode::Enter));
        assert_eq!(result, EventResult::NeedsRedraw);
        assert!(!app.intro_visible);
    }

    #[test]
    fn test_page_keys_ignored_while_intro_is_up() {
        let mut app = test_app();
        // 'l' skips the clip on the intro screen instead of turning pages.
        handle_event(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.pager.page(), 1);
        assert_eq!(app.intro.cursor(), 1);
    }

    #[test]
    fn test_page_turn_keys() {
        let mut app = test_app();
        app.enter_experience();

        handle_event(&mut app, press(KeyCode::Right));
        handle_event(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.pager.page(), 3);

        handle_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.pager.page(), 2);
    }

    #[test]
    fn test_replay_hotkey_resets_intro() {
        let mut app = test_app();
        app.intro.skip();
        app.enter_experience();

        handle_event(&mut app, press(KeyCode::Char('i')));
        assert!(app.intro_visible);
        assert_eq!(app.intro.cursor(), 0);
    }

    #[test]
    fn test_help_overlay_captures_keys() {
        let mut app = test_app();
        app.enter_experience();
        handle_event(&mut app, press(KeyCode::Char('?')));
        assert!(app.has_overlay());

        // 'q' closes the overlay instead of quitting.
        let result = handle_event(&mut app, press(KeyCode::Char('q')));
        assert_eq!(result, EventResult::NeedsRedraw);
        assert!(!app.has_overlay());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert_eq!(handle_event(&mut app, press(KeyCode::Char('q'))), EventResult::Quit);

        app.enter_experience();
        assert_eq!(handle_event(&mut app, press(KeyCode::Esc)), EventResult::Quit);
    }
}
