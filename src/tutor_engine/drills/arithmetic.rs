//! Plain arithmetic facts.
//!
//! | Operation | Draw |
//! |-----------|------|
//! | add       | `a` in `1..=max-1`, `b` in `1..=max(1, max-a)` |
//! | subtract  | `a` in `2..=max`, `b` in `1..=a-1` |
//! | multiply  | uniform over every `(a, b)` with `a × b <= max` |
//! | divide    | divisor in `2..=max(2, min(12, max/2))`, quotient in `1..=max(1, max/divisor)` |
//!
//! Addition does not clamp the sum itself. The `max(1, ..)` floor on `b`'s
//! upper bound keeps the draw valid, and for any `max >= 2` it also keeps
//! `a + b <= max`.

use crate::tutor_engine::{
    helpers,
    models::{Operation, Problem},
    random::RandomRange,
};

pub fn generate<R: RandomRange + ?Sized>(rng: &mut R, operation: Operation, maximum: u32) -> Problem {
    match operation {
        Operation::Add      => add(rng, maximum),
        Operation::Subtract => subtract(rng, maximum),
        Operation::Multiply => multiply(rng, maximum),
        Operation::Divide   => divide(rng, maximum),
    }
}

pub fn add<R: RandomRange + ?Sized>(rng: &mut R, maximum: u32) -> Problem {
    let a = rng.int_in(1, maximum.saturating_sub(1).max(1));
    let b = rng.int_in(1, maximum.saturating_sub(a).max(1));
    helpers::arithmetic(Operation::Add, a, b, None)
}

pub fn subtract<R: RandomRange + ?Sized>(rng: &mut R, maximum: u32) -> Problem {
    let a = rng.int_in(2, maximum.max(2));
    let b = rng.int_in(1, a - 1);
    helpers::arithmetic(Operation::Subtract, a, b, None)
}

/// Every factor pair whose product fits under `maximum`, in row-major order.
pub fn multiply_candidates(maximum: u32) -> Vec<(u32, u32)> {
    (1..=maximum)
        .flat_map(|a| (1..=maximum / a).map(move |b| (a, b)))
        .collect()
}

pub fn multiply<R: RandomRange + ?Sized>(rng: &mut R, maximum: u32) -> Problem {
    let candidates = multiply_candidates(maximum);
    if candidates.is_empty() {
        tracing::debug!(maximum, "no multiplication facts fit, falling back to addition");
        return add(rng, maximum);
    }
    let (a, b) = candidates[rng.index(candidates.len())];
    helpers::arithmetic(Operation::Multiply, a, b, None)
}

pub fn divide<R: RandomRange + ?Sized>(rng: &mut R, maximum: u32) -> Problem {
    let divisor = rng.int_in(2, (maximum / 2).min(12).max(2));
    let quotient = rng.int_in(1, (maximum / divisor).max(1));
    let dividend = divisor * quotient;
    helpers::arithmetic(Operation::Divide, dividend, divisor, None)
}
