//! Main application state and logic

use paradox_core::{Direction, HeroArt, IntroPlayer, Pager};

use crate::ui::theme::UiTheme;
use crate::ui::Overlay;

/// How many ticks a page-turn slide runs for.
const TRANSITION_FRAMES: u8 = 6;

/// Columns the sliding panel moves per remaining transition frame.
const TRANSITION_STEP: i32 = 4;

/// A page slide in progress.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub direction: Direction,
    pub frames_left: u8,
}

/// Main application state
pub struct App {
    // Story state
    pub pager: Pager,
    pub intro: IntroPlayer,
    pub intro_visible: bool,

    // UI state
    pub theme: UiTheme,
    pub hero_art: HeroArt,
    overlay: Option<Overlay>,
    status_message: Option<String>,

    // Animation
    pub animation_frame: u8,
    transition: Option<Transition>,
}

impl App {
    /// Create the application with the intro gating the story.
    pub fn new(hero_art: HeroArt) -> Self {
        Self {
            pager: Pager::new(),
            intro: IntroPlayer::new(),
            intro_visible: true,
            theme: UiTheme::default(),
            hero_art,
            overlay: None,
            status_message: None,
            animation_frame: 0,
            transition: None,
        }
    }

    /// Turn to the next page, starting the slide only on a real move.
    pub fn next_page(&mut self) {
        if self.pager.advance() {
            self.start_transition();
        }
    }

    /// Turn to the previous page, starting the slide only on a real move.
    pub fn prev_page(&mut self) {
        if self.pager.retreat() {
            self.start_transition();
        }
    }

    fn start_transition(&mut self) {
        self.transition = Some(Transition {
            direction: self.pager.direction(),
            frames_left: TRANSITION_FRAMES,
        });
    }

    /// Dismiss the intro. The only path out of the intro state.
    pub fn enter_experience(&mut self) {
        self.intro_visible = false;
        self.set_status("h/l or ←/→ to turn pages");
    }

    /// Re-enter the intro from its first record (the header control).
    pub fn replay_intro(&mut self) {
        self.intro.reset();
        self.intro_visible = true;
        self.overlay = None;
    }

    /// Tick for animations and simulated intro playback.
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if self.intro_visible {
            self.intro.tick();
            return;
        }

        if let Some(ref mut transition) = self.transition {
            transition.frames_left = transition.frames_left.saturating_sub(1);
            if transition.frames_left == 0 {
                self.transition = None;
            }
        }
    }

    /// Horizontal slide offset for the content panels, in columns. Zero
    /// when no transition is running.
    pub fn transition_offset(&self) -> i32 {
        match self.transition {
            Some(t) => t.direction.offset() * i32::from(t.frames_left) * TRANSITION_STEP,
            None => 0,
        }
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    /// Close any open overlay
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paradox_core::INTRO_SEQUENCE;

    fn test_app() -> App {
        App::new(HeroArt::load_from("missing.txt", "also-missing.txt"))
    }

    #[test]
    fn test_starts_gated_behind_intro() {
        let app = test_app();
        assert!(app.intro_visible);
        assert_eq!(app.intro.cursor(), 0);
        assert_eq!(app.pager.page(), 1);
    }

    #[test]
    fn test_enter_then_replay_round_trip() {
        let mut app = test_app();
        app.enter_experience();
        assert!(!app.intro_visible);

        // Leave the intro mid-sequence, then replay: back to the start.
        app.replay_intro();
        assert!(app.intro_visible);
        assert_eq!(app.intro.cursor(), 0);
    }

    #[test]
    fn test_replay_restarts_at_first_record() {
        let mut app = test_app();
        app.intro.skip();
        assert_eq!(app.intro.cursor(), 1 % INTRO_SEQUENCE.len());
        app.enter_experience();

        app.replay_intro();
        assert_eq!(app.intro.cursor(), 0);
    }

    #[test]
    fn test_page_turn_starts_transition() {
        let mut app = test_app();
        app.enter_experience();
        assert_eq!(app.transition_offset(), 0);

        app.next_page();
        assert!(app.transition_offset() > 0);

        app.prev_page();
        assert!(app.transition_offset() < 0);
    }

    #[test]
    fn test_clamped_turn_starts_no_transition() {
        let mut app = test_app();
        app.enter_experience();

        app.prev_page();
        assert_eq!(app.pager.page(), 1);
        assert_eq!(app.transition_offset(), 0);
    }

    #[test]
    fn test_transition_decays_to_zero() {
        let mut app = test_app();
        app.enter_experience();
        app.next_page();

        for _ in 0..TRANSITION_FRAMES {
            app.tick();
        }
        assert_eq!(app.transition_offset(), 0);
    }

    #[test]
    fn test_ticks_drive_intro_playback_while_visible() {
        let mut app = test_app();
        let duration = app.intro.current().duration_ticks;

        for _ in 0..duration {
            app.tick();
        }
        assert_eq!(app.intro.cursor(), 1 % INTRO_SEQUENCE.len());
    }

    #[test]
    fn test_help_overlay_toggles() {
        let mut app = test_app();
        assert!(!app.has_overlay());
        app.toggle_help();
        assert!(matches!(app.overlay(), Some(Overlay::Help)));
        app.toggle_help();
        assert!(!app.has_overlay());
    }

    #[test]
    fn test_replay_closes_overlays() {
        let mut app = test_app();
        app.enter_experience();
        app.toggle_help();
        app.replay_intro();
        assert!(!app.has_overlay());
    }
}
