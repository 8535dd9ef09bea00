use crate::tutor_engine::{helpers, models::Problem, random::RandomRange};

pub fn generate<R: RandomRange + ?Sized>(rng: &mut R, maximum: u32) -> Problem {
    let n = rng.int_in(5, maximum.max(6));
    // Grading accepts any pair summing to n, not just this one.
    let a = rng.int_in(1, n - 1);
    tracing::trace!(n, a, b = n - a, "decompose target drawn");
    helpers::decompose(n)
}

/// Every split of `n` into two positive parts, smaller part first.
pub fn all_splits(n: u32) -> Vec<(u32, u32)> {
    (1..=n / 2).map(|a| (a, n - a)).collect()
}
