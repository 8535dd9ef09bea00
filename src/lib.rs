//! # number_sense_tutor
//!
//! An offline, deterministic arithmetic-practice engine for early learners.
//!
//! The library generates elementary problems (addition, subtraction,
//! multiplication, division, and splitting a number into two parts), derives
//! a strategy hint for each one, checks typed answers, and keeps per-session
//! statistics and history. Rendering, input widgets, and file saving are left
//! to the host application.
//!
//! ## How it works
//!
//! 1. Pick a [`Mode`] (flash, visual, word, decompose, make-10), an
//!    [`OperationChoice`], and a maximum.
//! 2. Call [`generate_problem`] for a one-off problem, or drive a whole
//!    practice run through a [`SessionEngine`], which owns the current problem,
//!    its timer and hint flag, and the session it persists after every answer.
//! 3. Submit the learner's raw text. Malformed input is rejected without
//!    touching stats; accepted answers are logged and a new problem follows.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)`, or hand the engine a seeded
//!   `StdRng` or a [`ScriptedRange`], to reproduce exact problems.
//! - **Strategy hints**: each hint is picked by operation and operand size,
//!   from counting back to splitting a factor.
//! - **Portable history**: sessions persist as a JSON array; any session's
//!   history exports to CSV.
//!
//! ## Quick start
//!
//! ```rust
//! use number_sense_tutor::{
//!     generate_problem, Mode, Operation, OperationChoice, ProblemRequest,
//! };
//!
//! // Minimal: flash mode, entropy seed.
//! let problem = generate_problem(ProblemRequest::new(Operation::Subtract, 20));
//! println!("Q: {}", problem.prompt());
//!
//! // Full control:
//! let problem = generate_problem(ProblemRequest {
//!     mode: Mode::MakeTen,
//!     operation: OperationChoice::Add,
//!     maximum: 18,
//!     rng_seed: Some(42),
//! });
//! println!("Q: {}  Hint: {}", problem.prompt(), problem.hint());
//! ```

pub mod error;
pub mod export;
pub mod session;
pub mod settings;
pub mod storage;
pub mod time;
pub mod tutor_engine;

// Convenience re-exports so callers can use `number_sense_tutor::generate_problem`
// directly without reaching into `tutor_engine::`.
pub use error::{AnswerError, ExportError, StorageError};
pub use session::{Attempt, AttemptLog, Feedback, Session, SessionEngine, SessionStats};
pub use settings::TutorSettings;
pub use storage::{JsonFileStore, MemoryStore, SessionStore};
pub use time::Clock;
pub use tutor_engine::{
    generate_problem, Mode, Operation, OperationChoice, Problem, ProblemRequest, RandomRange,
    ScriptedRange, ShortcutTag, VisualLayout,
};
