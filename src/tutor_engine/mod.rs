//! Problem engine: generation, hints, stories, and ten-frame layout.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: modes, operations, the `Problem` sum type, requests |
//! | `random`    | `RandomRange` seam over `rand::Rng`, plus a scripted stub for tests |
//! | `hints`     | Deterministic strategy hint per operation and operand size |
//! | `helpers`   | Shared builders that assemble prompt, answer, and hint |
//! | `generator` | Entry points `generate()` / `generate_problem()`, dispatch by mode |
//! | `drills`    | Per-family constructors: arithmetic, decompose, make-10 |
//! | `story`     | Word-problem templates |
//! | `visual`    | Ten-frame sizing and crossed-out cells |

pub mod drills;
pub mod generator;
pub mod helpers;
pub mod hints;
pub mod models;
pub mod random;
pub mod story;
pub mod visual;

// Re-export the public API surface so callers can use
// `tutor_engine::generate_problem` without reaching into sub-modules.
pub use generator::{generate, generate_problem, resolve_operation};
pub use hints::hint_for;
pub use models::{Mode, Operation, OperationChoice, Problem, ProblemRequest, ShortcutTag};
pub use random::{RandomRange, ScriptedRange};
pub use story::story;
pub use visual::{layout, VisualLayout};
