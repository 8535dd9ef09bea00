//! Problem constructors grouped by drill family.
//!
//! Each public function takes the random source first and the configured
//! maximum last:
//!
//! ```ignore
//! pub fn <name><R: RandomRange + ?Sized>(rng: &mut R, maximum: u32) -> Problem
//! ```
//!
//! The generator dispatches to these via `generator.rs`.

/// Add, subtract, multiply, divide facts.
pub mod arithmetic;
/// Split-a-number tasks.
pub mod decompose;
/// Make-10 addition shortcut drill.
pub mod make_ten;
