//! Learner-facing feedback strings.

use serde::{Deserialize, Serialize};

use crate::{
    session::grading::Grade,
    tutor_engine::{drills::decompose::all_splits, models::Problem},
};

/// What the presentation layer shows after an accepted answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub is_correct: bool,
    pub canonical_answer: Option<i64>,
    pub elapsed_seconds: f64,
    pub message: String,
}

/// Elapsed time rounded to whole seconds for display.
pub fn whole_seconds(seconds: f64) -> u64 {
    seconds.max(0.0).round() as u64
}

/// Ticking timer text, e.g. "Time: 4s".
pub fn timer_label(seconds: f64) -> String {
    format!("Time: {}s", whole_seconds(seconds))
}

/// All splits of `n` joined for display, e.g. "1+4 • 2+3".
pub fn splits_text(n: u32) -> String {
    all_splits(n)
        .iter()
        .map(|(a, b)| format!("{a}+{b}"))
        .collect::<Vec<_>>()
        .join(" • ")
}

pub fn compose(problem: &Problem, grade: Grade, elapsed_seconds: f64) -> Feedback {
    let took = whole_seconds(elapsed_seconds);
    let message = match (problem, grade.is_correct) {
        (Problem::Decompose { n, .. }, true) =>
            format!("Correct — all ways to make {n}: {} (took {took}s)", splits_text(*n)),
        (Problem::Decompose { n, .. }, false) =>
            format!("Not quite. Try another way to split {n}. (took {took}s)"),
        (Problem::Arithmetic { answer, .. }, true) =>
            format!("Correct — {} = {answer} (took {took}s)", problem.fact_text()),
        (Problem::Arithmetic { answer, .. }, false) =>
            format!("Not quite. The answer is {answer}. (took {took}s)"),
    };

    Feedback {
        is_correct: grade.is_correct,
        canonical_answer: grade.canonical_answer,
        elapsed_seconds,
        message,
    }
}
