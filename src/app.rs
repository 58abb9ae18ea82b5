use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::exercise::evaluate::{self, Verdict};
use crate::exercise::generate::generate;
use crate::exercise::Exercise;
use crate::session::form;
use crate::session::state::{GameSettings, Progress, SessionState};
use crate::session::timer::{TimerKind, TimerSlot};
use crate::ui::components::start_screen::StartForm;
use crate::ui::num_input::{InputResult, NumInput};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Start,
    Game,
}

/// Visual verdict on the answer input while feedback plays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Good,
    Bad,
}

/// Owns all mutable state and exposes the commands the key handlers map to.
/// Everything here is headless; `main.rs` only forwards keys and ticks.
pub struct App {
    pub screen: Screen,
    pub form: StartForm,
    pub theme: &'static Theme,
    pub config: Config,
    pub session: Option<SessionState>,
    pub exercise: Option<Exercise>,
    pub answer: NumInput,
    pub mark: Option<Mark>,
    pub timer: TimerSlot,
    pub should_quit: bool,
    /// Disabled for headless tests so they never touch the config dir.
    persist_config: bool,
    rng: SmallRng,
}

impl App {
    pub fn new() -> Self {
        let mut config = Config::load().unwrap_or_default();
        config.normalize();
        Self::build(config, SmallRng::from_entropy(), true)
    }

    /// Deterministic app with default config; used by the integration tests.
    pub fn seeded(seed: u64) -> Self {
        Self::build(Config::default(), SmallRng::seed_from_u64(seed), false)
    }

    fn build(config: Config, rng: SmallRng, persist_config: bool) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let form = StartForm::new(theme, &config);

        Self {
            screen: Screen::Start,
            form,
            theme,
            config,
            session: None,
            exercise: None,
            answer: NumInput::new(""),
            mark: None,
            timer: TimerSlot::new(),
            should_quit: false,
            persist_config,
            rng,
        }
    }

    /// Validate the start form; on success switch to the game screen and
    /// generate the first exercise. Errors land inline on the form.
    pub fn start_game(&mut self) {
        self.form.error = None;

        let (max_total, starting_score) =
            match form::validate(self.form.max_input.value(), self.form.score_input.value()) {
                Ok(values) => values,
                Err(err) => {
                    self.form.error = Some(err.message());
                    return;
                }
            };

        let settings = GameSettings {
            max_total,
            allow_top_missing: self.form.allow_top,
            three_way_split: self.form.three_way,
            starting_score,
        };
        self.session = Some(SessionState::new(settings));

        // Chosen values become the new form defaults.
        self.config.max_total = max_total;
        self.config.allow_top_missing = settings.allow_top_missing;
        self.config.three_way_split = settings.three_way_split;
        if self.persist_config {
            let _ = self.config.save();
        }

        self.screen = Screen::Game;
        self.next_exercise();
    }

    /// Back to the start screen. Cancels whatever was pending; nothing of the
    /// session survives except the updated form defaults.
    pub fn stop_game(&mut self) {
        self.timer.cancel();
        self.session = None;
        self.exercise = None;
        self.mark = None;
        self.answer.clear();
        self.form.error = None;
        self.form.focus = 0;
        self.screen = Screen::Start;
    }

    fn next_exercise(&mut self) {
        let Some(ref session) = self.session else {
            return;
        };
        self.timer.cancel();
        self.mark = None;
        self.answer.clear();
        self.exercise = Some(generate(
            &mut self.rng,
            session.max_total,
            session.allow_top_missing,
            session.three_way_split,
        ));
    }

    /// The input accepts keys only while no feedback pause is running.
    pub fn input_enabled(&self) -> bool {
        !self.timer.is_pending()
    }

    pub fn reward_active(&self) -> bool {
        self.timer.pending_kind() == Some(TimerKind::Reward)
    }

    /// Evaluate the typed answer. Ignored while feedback is already playing.
    pub fn submit_answer(&mut self) {
        if !self.input_enabled() {
            return;
        }
        let Some(ref exercise) = self.exercise else {
            return;
        };
        let Some(ref mut session) = self.session else {
            return;
        };

        match evaluate::check(self.answer.value(), exercise.answer) {
            Verdict::Correct => {
                self.mark = Some(Mark::Good);
                match session.record_correct() {
                    Progress::Reward => self.timer.schedule(TimerKind::Reward),
                    Progress::Advance => self.timer.schedule(TimerKind::Advance),
                }
            }
            Verdict::Wrong => {
                self.mark = Some(Mark::Bad);
                session.record_wrong();
                self.timer.schedule(TimerKind::Retry);
            }
        }
    }

    /// Start-screen key: focus moves are handled here, everything else goes
    /// to the focused field, whose result decides between editing, starting,
    /// and quitting.
    pub fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.next();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.prev();
                return;
            }
            _ => {}
        }

        if let Some(input) = self.form.focused_input() {
            match input.handle(key) {
                InputResult::Submit => self.start_game(),
                InputResult::Cancel => self.should_quit = true,
                InputResult::Continue => {}
            }
        } else {
            match key.code {
                KeyCode::Enter => self.start_game(),
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(' ') => self.form.toggle(),
                _ => {}
            }
        }
    }

    /// Game-screen key. During a feedback pause the input is disabled and
    /// only stopping works; otherwise the answer field's result decides
    /// between editing, checking, and stopping.
    pub fn handle_answer_key(&mut self, key: KeyEvent) {
        if !self.input_enabled() {
            if key.code == KeyCode::Esc {
                self.stop_game();
            }
            return;
        }

        match self.answer.handle(key) {
            InputResult::Submit => self.submit_answer(),
            InputResult::Cancel => self.stop_game(),
            InputResult::Continue => {}
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Run any timer whose deadline has passed. Split from `tick` so tests
    /// can drive the clock.
    pub fn tick_at(&mut self, now: Instant) {
        match self.timer.fire_due(now) {
            Some(TimerKind::Retry) => {
                // Same exercise: clear the mark and the typed text, focus stays.
                self.mark = None;
                self.answer.clear();
            }
            Some(TimerKind::Advance) => self.next_exercise(),
            Some(TimerKind::Reward) => {
                if let Some(ref mut session) = self.session {
                    session.apply_reward();
                }
                self.next_exercise();
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn invalid_max_keeps_the_start_screen() {
        let mut app = App::seeded(1);
        app.form.max_input = NumInput::new("");
        app.start_game();
        assert_eq!(app.screen, Screen::Start);
        assert!(app.form.error.is_some());
        assert!(app.session.is_none());
    }

    #[test]
    fn start_builds_session_from_the_form() {
        let mut app = App::seeded(2);
        app.form.max_input = NumInput::new("25");
        app.form.score_input = NumInput::new("4");
        app.form.allow_top = true;
        app.start_game();

        assert_eq!(app.screen, Screen::Game);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.max_total, 25);
        assert_eq!(session.score, 4);
        assert!(session.allow_top_missing);
        assert!(app.exercise.is_some());
        assert!(app.input_enabled());
    }

    #[test]
    fn starting_clears_a_previous_error() {
        let mut app = App::seeded(3);
        app.form.max_input = NumInput::new("abc");
        app.start_game();
        assert!(app.form.error.is_some());

        app.form.max_input = NumInput::new("10");
        app.start_game();
        assert!(app.form.error.is_none());
        assert_eq!(app.screen, Screen::Game);
    }

    #[test]
    fn submit_is_ignored_while_feedback_runs() {
        let mut app = App::seeded(4);
        app.form.max_input = NumInput::new("10");
        app.start_game();

        app.answer = NumInput::new("9999");
        app.submit_answer();
        assert_eq!(app.mark, Some(Mark::Bad));
        let streak_after_wrong = app.session.as_ref().unwrap().streak;

        // A second submit mid-pause must change nothing.
        let answer = app.exercise.as_ref().unwrap().answer;
        app.answer = NumInput::new(&answer.to_string());
        app.submit_answer();
        assert_eq!(app.mark, Some(Mark::Bad));
        assert_eq!(app.session.as_ref().unwrap().streak, streak_after_wrong);
    }

    #[test]
    fn enter_in_a_form_field_starts_the_game() {
        let mut app = App::seeded(6);
        app.form.max_input = NumInput::new("1");
        app.handle_form_key(key(KeyCode::Char('2')));
        assert_eq!(app.form.max_input.value(), "12");

        app.handle_form_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Game);
        assert_eq!(app.session.as_ref().unwrap().max_total, 12);
    }

    #[test]
    fn enter_on_a_checkbox_also_starts() {
        let mut app = App::seeded(7);
        app.handle_form_key(key(KeyCode::Tab));
        app.handle_form_key(key(KeyCode::Tab));
        app.handle_form_key(key(KeyCode::Char(' ')));
        assert!(app.form.allow_top);

        app.handle_form_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Game);
        assert!(app.session.as_ref().unwrap().allow_top_missing);
    }

    #[test]
    fn esc_on_the_start_screen_quits() {
        let mut app = App::seeded(8);
        app.handle_form_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn answer_keys_edit_and_enter_submits() {
        let mut app = App::seeded(9);
        app.form.max_input = NumInput::new("10");
        app.start_game();

        for ch in app.exercise.as_ref().unwrap().answer.to_string().chars() {
            app.handle_answer_key(key(KeyCode::Char(ch)));
        }
        app.handle_answer_key(key(KeyCode::Enter));
        assert_eq!(app.mark, Some(Mark::Good));
    }

    #[test]
    fn esc_stops_even_during_a_feedback_pause() {
        let mut app = App::seeded(10);
        app.form.max_input = NumInput::new("10");
        app.start_game();
        app.answer = NumInput::new("9999");
        app.submit_answer();
        assert!(!app.input_enabled());

        // Editing keys are swallowed while feedback runs.
        app.handle_answer_key(key(KeyCode::Char('5')));
        assert_eq!(app.answer.value(), "9999");

        app.handle_answer_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Start);
        assert!(!app.timer.is_pending());
    }

    #[test]
    fn stop_clears_session_and_timers() {
        let mut app = App::seeded(5);
        app.form.max_input = NumInput::new("10");
        app.start_game();
        app.answer = NumInput::new("9999");
        app.submit_answer();
        assert!(app.timer.is_pending());

        app.stop_game();
        assert_eq!(app.screen, Screen::Start);
        assert!(!app.timer.is_pending());
        assert!(app.session.is_none());
        assert!(app.exercise.is_none());
        assert_eq!(app.answer.value(), "");
        assert_eq!(app.form.focus, 0);
    }
}
