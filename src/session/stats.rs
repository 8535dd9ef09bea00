//! Session bookkeeping: attempts, running counters, and the persisted session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One graded submission. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    problem_text: String,
    student_answer: String,
    correct: bool,
    time_taken: f64,
    hint_used: bool,
    timestamp: DateTime<Utc>,
}

impl Attempt {
    pub fn new(
        problem_text: impl Into<String>,
        student_answer: impl Into<String>,
        correct: bool,
        elapsed_seconds: f64,
        hint_used: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Attempt {
            problem_text: problem_text.into(),
            student_answer: student_answer.into(),
            correct,
            time_taken: elapsed_seconds,
            hint_used,
            timestamp,
        }
    }

    #[must_use]
    pub fn problem_text(&self) -> &str {
        &self.problem_text
    }

    /// The answer exactly as typed (after trimming).
    #[must_use]
    pub fn student_answer(&self) -> &str {
        &self.student_answer
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.time_taken
    }

    #[must_use]
    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Running counters, updated once per accepted submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStats {
    #[serde(rename = "correct")]
    pub correct_count: u32,
    #[serde(rename = "attempted")]
    pub attempted_count: u32,
    #[serde(rename = "streak")]
    pub current_streak: u32,
    #[serde(rename = "times")]
    pub elapsed_times_seconds: Vec<f64>,
}

impl SessionStats {
    pub fn record(&mut self, correct: bool, elapsed_seconds: f64) {
        self.attempted_count = self.attempted_count.saturating_add(1);
        self.elapsed_times_seconds.push(elapsed_seconds);
        if correct {
            self.correct_count = self.correct_count.saturating_add(1);
            self.current_streak = self.current_streak.saturating_add(1);
        } else {
            self.current_streak = 0;
        }
    }

    /// Mean answer time rounded to whole seconds; 0 before the first attempt.
    #[must_use]
    pub fn average_seconds(&self) -> u64 {
        if self.elapsed_times_seconds.is_empty() {
            return 0;
        }
        let sum: f64 = self.elapsed_times_seconds.iter().sum();
        (sum / self.elapsed_times_seconds.len() as f64).round() as u64
    }
}

/// Append-only, chronological attempt history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttemptLog(Vec<Attempt>);

impl AttemptLog {
    pub fn push(&mut self, attempt: Attempt) {
        self.0.push(attempt);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Attempt> + ExactSizeIterator {
        self.0.iter()
    }

    /// Newest first, for the history table.
    pub fn most_recent_first(&self) -> impl Iterator<Item = &Attempt> {
        self.0.iter().rev()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Attempt] {
        &self.0
    }
}

impl FromIterator<Attempt> for AttemptLog {
    fn from_iter<I: IntoIterator<Item = Attempt>>(iter: I) -> Self {
        AttemptLog(iter.into_iter().collect())
    }
}

/// One continuous practice run, persisted as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub created_at: DateTime<Utc>,
    pub last_used_at: DateTime<Utc>,
    #[serde(default)]
    pub history: AttemptLog,
    #[serde(default)]
    pub stats: SessionStats,
}

impl Session {
    pub fn new(now: DateTime<Utc>) -> Self {
        Session {
            created_at: now,
            last_used_at: now,
            history: AttemptLog::default(),
            stats: SessionStats::default(),
        }
    }

    /// Log the attempt and fold it into the counters.
    pub fn record(&mut self, attempt: Attempt) {
        self.stats.record(attempt.is_correct(), attempt.elapsed_seconds());
        self.last_used_at = attempt.timestamp();
        self.history.push(attempt);
    }
}
