//! Make-10 shortcut drill.
//!
//! Addition facts where the first addend is 6–9 and the sum crosses 10, so the
//! learner practises filling the first addend up to 10 before adding the rest.

use crate::tutor_engine::{
    helpers,
    models::{Operation, Problem, ShortcutTag},
    random::RandomRange,
};

/// Every `(a, b)` with `a` in 6..=9, `b` in 1..=9, and `10 < a + b <= maximum`.
pub fn candidates(maximum: u32) -> Vec<(u32, u32)> {
    (6..=9u32)
        .flat_map(|a| (1..=9u32).map(move |b| (a, b)))
        .filter(|&(a, b)| {
            let sum = a + b;
            sum > 10 && sum <= maximum
        })
        .collect()
}

/// `None` when the maximum is too small for any make-10 fact.
pub fn generate<R: RandomRange + ?Sized>(rng: &mut R, maximum: u32) -> Option<Problem> {
    let pool = candidates(maximum);
    if pool.is_empty() {
        return None;
    }
    let (a, b) = pool[rng.index(pool.len())];
    Some(helpers::arithmetic(Operation::Add, a, b, Some(ShortcutTag::MakeTen)))
}
