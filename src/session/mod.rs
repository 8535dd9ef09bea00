//! Session layer: grading, stats, feedback, and the engine that ties them together.
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `grading`  | Format checks and correctness for both problem variants |
//! | `stats`    | `Attempt`, `SessionStats`, `AttemptLog`, `Session` |
//! | `feedback` | Learner-facing messages and timer text |
//! | `engine`   | `SessionEngine`, the single owner of current problem and session |

pub mod engine;
pub mod feedback;
pub mod grading;
pub mod stats;

pub use engine::{CurrentProblem, SessionEngine};
pub use feedback::Feedback;
pub use grading::{grade, Grade};
pub use stats::{Attempt, AttemptLog, Session, SessionStats};
