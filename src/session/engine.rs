//! The session engine: one current problem, one current session.
//!
//! All learner events go through [`SessionEngine`] methods. It owns the
//! random source, the clock, the settings, the current problem with its timer
//! and hint flag, and the session it persists after every change.

use crate::{
    error::{AnswerError, ExportError},
    export,
    session::{
        feedback::{self, Feedback},
        grading,
        stats::{Attempt, AttemptLog, Session, SessionStats},
    },
    settings::{parse_maximum, TutorSettings},
    storage::SessionStore,
    time::{seconds_between, Clock},
    tutor_engine::{
        generator,
        models::{Mode, OperationChoice, Problem},
        random::RandomRange,
        story,
        visual::{self, VisualLayout},
    },
};
use chrono::{DateTime, Utc};

const FALLBACK_ARITHMETIC_HINT: &str = "Use what you know about tens to solve it.";

/// The problem on screen, with its timer start and hint flag.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentProblem {
    pub problem: Problem,
    /// What the learner sees: the story in word mode, otherwise the prompt.
    pub display_text: String,
    pub started_at: DateTime<Utc>,
    pub hint_used: bool,
}

pub struct SessionEngine<R: RandomRange, S: SessionStore> {
    rng: R,
    store: S,
    clock: Clock,
    settings: TutorSettings,
    session: Session,
    current: CurrentProblem,
}

impl<R: RandomRange, S: SessionStore> SessionEngine<R, S> {
    /// Resume the most recent stored session, or start one if none exist.
    pub fn continue_latest(rng: R, store: S, clock: Clock, settings: TutorSettings) -> Self {
        let mut all = load_or_empty(&store);
        let (session, fresh) = match all.pop() {
            Some(latest) => (latest, false),
            None         => (Session::new(clock.now()), true),
        };
        tracing::info!(
            attempts = session.history.len(),
            fresh,
            "continuing latest session"
        );
        let mut engine = Self::assemble(rng, store, clock, settings, session);
        if fresh {
            engine.persist();
        }
        engine
    }

    /// Append a brand-new session after any stored ones.
    pub fn start_new(rng: R, mut store: S, clock: Clock, settings: TutorSettings) -> Self {
        let mut all = load_or_empty(&store);
        let session = Session::new(clock.now());
        all.push(session.clone());
        if let Err(e) = store.save(&all) {
            tracing::warn!(error = %e, "could not save new session");
        }
        tracing::info!(stored = all.len(), "started new session");
        Self::assemble(rng, store, clock, settings, session)
    }

    fn assemble(mut rng: R, store: S, clock: Clock, settings: TutorSettings, session: Session) -> Self {
        let settings = settings.normalized();
        let current = Self::fresh_problem(&mut rng, &clock, settings);
        SessionEngine { rng, store, clock, settings, session, current }
    }

    fn fresh_problem(rng: &mut R, clock: &Clock, settings: TutorSettings) -> CurrentProblem {
        let problem = generator::generate(rng, settings.mode, settings.operation, settings.maximum);
        let display_text = match (settings.mode, &problem) {
            (Mode::Word, Problem::Arithmetic { .. }) => story::story(rng, &problem),
            _ => problem.prompt().to_string(),
        };
        tracing::debug!(
            mode = settings.mode.key(),
            operation = settings.operation.key(),
            maximum = settings.maximum,
            display = %display_text,
            "new problem"
        );
        CurrentProblem { problem, display_text, started_at: clock.now(), hint_used: false }
    }

    // ── problem flow ─────────────────────────────────────────────────────────

    /// Discard the current problem and timer and show a new one.
    pub fn new_problem(&mut self) -> &CurrentProblem {
        self.current = Self::fresh_problem(&mut self.rng, &self.clock, self.settings);
        &self.current
    }

    pub fn current(&self) -> &CurrentProblem {
        &self.current
    }

    /// Ten-frame parameters, only in visual mode.
    pub fn visual_layout(&self) -> Option<VisualLayout> {
        match self.settings.mode {
            Mode::Visual => Some(visual::layout(&self.current.problem)),
            _ => None,
        }
    }

    /// Reveal the hint and mark it as used for this problem.
    pub fn request_hint(&mut self) -> String {
        self.current.hint_used = true;
        let hint = self.current.problem.hint();
        if !hint.is_empty() {
            return hint.to_string();
        }
        match &self.current.problem {
            Problem::Arithmetic { .. } => FALLBACK_ARITHMETIC_HINT.to_string(),
            Problem::Decompose { n, .. } => {
                format!("Think of two numbers that add to {n}. Start small and work up.")
            }
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        seconds_between(self.current.started_at, self.clock.now())
    }

    /// Display-only timer text; reading it never touches state.
    pub fn timer_label(&self) -> String {
        feedback::timer_label(self.elapsed_seconds())
    }

    /// Grade `raw` against the current problem.
    ///
    /// A rejected answer changes nothing: the problem, the timer, the stats,
    /// and the history all stay as they were. An accepted answer is logged,
    /// persisted, and followed by a new problem.
    pub fn submit(&mut self, raw: &str) -> Result<Feedback, AnswerError> {
        let grade = match grading::grade(&self.current.problem, raw) {
            Ok(grade) => grade,
            Err(e) => {
                tracing::debug!(error = %e, "answer rejected");
                return Err(e);
            }
        };

        let now = self.clock.now();
        let elapsed = seconds_between(self.current.started_at, now);
        let feedback = feedback::compose(&self.current.problem, grade, elapsed);

        self.session.record(Attempt::new(
            self.current.display_text.clone(),
            raw.trim(),
            grade.is_correct,
            elapsed,
            self.current.hint_used,
            now,
        ));
        tracing::debug!(
            correct = grade.is_correct,
            streak = self.session.stats.current_streak,
            "answer graded"
        );
        self.persist();
        self.new_problem();
        Ok(feedback)
    }

    // ── settings ────────────────────────────────────────────────────────────

    pub fn settings(&self) -> TutorSettings {
        self.settings
    }

    /// Apply new settings; the current problem is discarded.
    pub fn change_settings(&mut self, settings: TutorSettings) -> &CurrentProblem {
        self.settings = settings.normalized();
        self.new_problem()
    }

    pub fn set_mode(&mut self, mode: Mode) -> &CurrentProblem {
        self.change_settings(self.settings.with_mode(mode))
    }

    pub fn set_operation(&mut self, operation: OperationChoice) -> &CurrentProblem {
        self.change_settings(self.settings.with_operation(operation))
    }

    /// Set the maximum from raw field text, clamping or defaulting it.
    pub fn set_maximum_text(&mut self, text: &str) -> &CurrentProblem {
        self.change_settings(self.settings.with_maximum(parse_maximum(text)))
    }

    // ── session ─────────────────────────────────────────────────────────────

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn stats(&self) -> &SessionStats {
        &self.session.stats
    }

    pub fn history(&self) -> &AttemptLog {
        &self.session.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Erase every stored session and start over with an empty one.
    pub fn reset(&mut self) -> &CurrentProblem {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "could not clear stored sessions");
        }
        self.session = Session::new(self.clock.now());
        tracing::info!("session reset");
        self.persist();
        self.new_problem()
    }

    /// CSV of this session's history, with a suggested file name.
    pub fn export_csv(&self) -> Result<(String, String), ExportError> {
        let csv = export::to_csv(&self.session.history)?;
        Ok((export::file_name(self.session.created_at), csv))
    }

    /// Overwrite the last stored session with the current one.
    fn persist(&mut self) {
        self.session.last_used_at = self.clock.now();
        let mut all = load_or_empty(&self.store);
        match all.last_mut() {
            Some(last) => *last = self.session.clone(),
            None       => all.push(self.session.clone()),
        }
        if let Err(e) = self.store.save(&all) {
            tracing::warn!(error = %e, "could not persist session");
        }
    }
}

fn load_or_empty<S: SessionStore>(store: &S) -> Vec<Session> {
    store.load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "stored sessions unavailable, starting empty");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::StorageError,
        storage::MemoryStore,
        time::fixed_clock,
        tutor_engine::random::ScriptedRange,
    };
    use chrono::Duration;
    use rand::{rngs::StdRng, SeedableRng};

    fn decompose_engine() -> SessionEngine<StdRng, MemoryStore> {
        let settings = TutorSettings::default().with_mode(Mode::Decompose);
        SessionEngine::continue_latest(StdRng::seed_from_u64(10), MemoryStore::default(), fixed_clock(), settings)
    }

    fn target(engine: &SessionEngine<StdRng, MemoryStore>) -> u32 {
        match engine.current().problem {
            Problem::Decompose { n, .. } => n,
            ref other => panic!("expected decompose, got {other:?}"),
        }
    }

    #[test]
    fn continue_with_empty_store_creates_and_persists() {
        let engine = decompose_engine();
        assert_eq!(engine.store().sessions().len(), 1);
        assert_eq!(engine.stats().attempted_count, 0);
    }

    #[test]
    fn continue_resumes_the_last_session() {
        let now = fixed_clock().now();
        let mut older = Session::new(now);
        older.stats.correct_count = 1;
        let mut latest = Session::new(now);
        latest.stats.correct_count = 7;
        let store = MemoryStore::with_sessions(vec![older, latest]);
        let engine = SessionEngine::continue_latest(
            StdRng::seed_from_u64(1), store, fixed_clock(), TutorSettings::default(),
        );
        assert_eq!(engine.stats().correct_count, 7);
        assert_eq!(engine.store().saves(), 0);
    }

    #[test]
    fn start_new_appends() {
        let store = MemoryStore::with_sessions(vec![Session::new(fixed_clock().now())]);
        let engine = SessionEngine::start_new(
            StdRng::seed_from_u64(1), store, fixed_clock(), TutorSettings::default(),
        );
        assert_eq!(engine.store().sessions().len(), 2);
    }

    #[test]
    fn malformed_answer_changes_nothing() {
        let mut engine = decompose_engine();
        let before = engine.current().clone();
        engine.clock_mut().advance(Duration::seconds(4));

        assert_eq!(engine.submit("abc"), Err(AnswerError::DecomposeFormat));
        assert_eq!(engine.submit(""), Err(AnswerError::Empty));

        assert_eq!(engine.current(), &before);
        assert_eq!(engine.stats(), &SessionStats::default());
        assert!(engine.history().is_empty());
        assert_eq!(engine.elapsed_seconds(), 4.0);
    }

    #[test]
    fn accepted_answer_updates_stats_log_and_advances() {
        let mut engine = decompose_engine();
        let n = target(&engine);
        let shown = engine.current().display_text.clone();
        engine.request_hint();
        engine.clock_mut().advance(Duration::milliseconds(3200));

        let fb = engine.submit(&format!("1+{}", n - 1)).unwrap();
        assert!(fb.is_correct);
        assert_eq!(fb.elapsed_seconds, 3.2);
        assert!(fb.message.starts_with(&format!("Correct — all ways to make {n}:")));

        let stats = engine.stats();
        assert_eq!((stats.attempted_count, stats.correct_count, stats.current_streak), (1, 1, 1));
        let logged = engine.history().iter().next().unwrap();
        assert_eq!(logged.problem_text(), shown);
        assert!(logged.hint_used());
        assert!(!engine.current().hint_used, "new problem starts without a hint");
        assert_eq!(engine.elapsed_seconds(), 0.0, "timer restarts on the new problem");
        assert_eq!(engine.store().sessions()[0].history.len(), 1);
    }

    #[test]
    fn wrong_answer_breaks_the_streak() {
        let mut engine = decompose_engine();
        let n = target(&engine);
        engine.submit(&format!("2 {}", n - 2)).unwrap();
        let n = target(&engine);
        let fb = engine.submit(&format!("1,{}", n)).unwrap();
        assert!(!fb.is_correct);
        assert_eq!(engine.stats().current_streak, 0);
        assert_eq!(engine.stats().correct_count, 1);
        assert_eq!(engine.stats().attempted_count, 2);
    }

    #[test]
    fn word_mode_logs_the_story_that_was_shown() {
        let settings = TutorSettings { mode: Mode::Word, operation: OperationChoice::Add, maximum: 10 };
        // a = 3, b = 4, template 2
        let rng = ScriptedRange::new([3, 4, 2]);
        let mut engine = SessionEngine::continue_latest(rng, MemoryStore::default(), fixed_clock(), settings);
        assert_eq!(
            engine.current().display_text,
            "A class reads 3 pages on Monday and 4 pages on Tuesday. How many pages total?"
        );
        let fb = engine.submit("7").unwrap();
        assert!(fb.is_correct);
        assert_eq!(fb.message, "Correct — 3 + 4 = 7 (took 0s)");
        assert!(engine.history().iter().next().unwrap().problem_text().starts_with("A class reads 3"));
    }

    #[test]
    fn changing_settings_replaces_the_problem() {
        let mut engine = decompose_engine();
        engine.clock_mut().advance(Duration::seconds(9));
        engine.set_operation(OperationChoice::Divide);
        assert_eq!(engine.elapsed_seconds(), 0.0);
        engine.set_mode(Mode::Flash);
        assert_eq!(engine.current().problem.operation(), Some(crate::tutor_engine::Operation::Divide));
        engine.set_maximum_text("abc");
        assert_eq!(engine.settings().maximum, 20);
        engine.set_maximum_text("3");
        assert_eq!(engine.settings().maximum, 5);
    }

    #[test]
    fn visual_layout_only_in_visual_mode() {
        let mut engine = decompose_engine();
        assert!(engine.visual_layout().is_none());
        engine.set_mode(Mode::Visual);
        assert!(engine.visual_layout().is_some());
    }

    #[test]
    fn reset_replaces_everything_with_one_empty_session() {
        let now = fixed_clock().now();
        let store = MemoryStore::with_sessions(vec![Session::new(now), Session::new(now)]);
        let mut engine = SessionEngine::continue_latest(
            StdRng::seed_from_u64(2), store, fixed_clock(), TutorSettings::default(),
        );
        engine.submit("0").unwrap();
        engine.reset();
        assert_eq!(engine.store().sessions().len(), 1);
        assert!(engine.history().is_empty());
        assert_eq!(engine.stats().attempted_count, 0);
    }

    #[test]
    fn export_requires_history() {
        let mut engine = decompose_engine();
        assert_eq!(engine.export_csv(), Err(ExportError::Empty));
        let n = target(&engine);
        engine.submit(&format!("1+{}", n - 1)).unwrap();
        let (name, csv) = engine.export_csv().unwrap();
        assert_eq!(name, "numbersense_session_2023-11-14.csv");
        assert_eq!(csv.lines().count(), 2);
    }

    /// Store whose reads always fail.
    #[derive(Default)]
    struct BrokenStore {
        saves: usize,
    }

    impl SessionStore for BrokenStore {
        fn load(&self) -> Result<Vec<Session>, StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk gone")))
        }
        fn save(&mut self, _: &[Session]) -> Result<(), StorageError> {
            self.saves += 1;
            Err(StorageError::Io(std::io::Error::other("disk gone")))
        }
        fn clear(&mut self) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn unavailable_store_degrades_to_empty_session() {
        let mut engine = SessionEngine::continue_latest(
            StdRng::seed_from_u64(3), BrokenStore::default(), fixed_clock(), TutorSettings::default(),
        );
        assert!(engine.history().is_empty());
        engine.submit("1").unwrap();
        assert_eq!(engine.stats().attempted_count, 1);
        assert_eq!(engine.store().saves, 2);
    }
}
