//! Injectable source of uniform integer draws.
//!
//! Production code hands the generator a seeded or entropy-backed
//! [`rand::rngs::StdRng`]; any `rand::Rng` works through the blanket impl.
//! Tests that need one exact decision path use [`ScriptedRange`].

use std::collections::VecDeque;

use rand::Rng;

/// Uniform integer sampling in an inclusive bound.
pub trait RandomRange {
    /// Draw from `lo..=hi`. A reversed bound collapses to `lo`.
    fn int_in(&mut self, lo: u32, hi: u32) -> u32;

    /// Pick an index into a non-empty slice of length `len`.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let hi = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.int_in(0, hi) as usize
    }
}

impl<R: Rng + ?Sized> RandomRange for R {
    fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.gen_range(lo..=hi)
    }
}

/// Fixed-sequence stand-in for a real RNG.
///
/// Each draw pops the next scripted value and clamps it into the requested
/// bound, so a script can say "take the top of the range" with `u32::MAX`.
/// Once the script runs dry every draw returns the lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRange {
    values: VecDeque<u32>,
}

impl ScriptedRange {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        ScriptedRange { values: values.into_iter().collect() }
    }

    /// Scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomRange for ScriptedRange {
    fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        let hi = hi.max(lo);
        match self.values.pop_front() {
            Some(v) => v.clamp(lo, hi),
            None    => lo,
        }
    }
}
