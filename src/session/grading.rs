//! Answer checking.
//!
//! Format is checked before correctness. A rejected answer is an
//! [`AnswerError`]; the caller re-prompts and keeps the current problem and
//! its timer running.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::AnswerError, tutor_engine::models::Problem};

lazy_static! {
    // Two ASCII integers separated by a comma, a plus sign, or whitespace: "3+7", "3,7", "3 7".
    static ref DECOMPOSE_PAIR: Regex =
        Regex::new(r"([0-9]+)\s*[,+\s]\s*([0-9]+)").expect("decompose pattern is valid");
}

/// Outcome of an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub is_correct: bool,
    /// The stored answer; `None` for decompose tasks, which have many.
    pub canonical_answer: Option<i64>,
}

/// A run of ASCII digits as a number; runs too long for `u64` saturate.
fn saturating_digits(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// First two integers found in `raw`, in order.
pub fn parse_decompose(raw: &str) -> Option<(u64, u64)> {
    let caps = DECOMPOSE_PAIR.captures(raw)?;
    let first = saturating_digits(caps.get(1)?.as_str());
    let second = saturating_digits(caps.get(2)?.as_str());
    Some((first, second))
}

/// Parse an arithmetic answer as a finite number.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn grade(problem: &Problem, raw: &str) -> Result<Grade, AnswerError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AnswerError::Empty);
    }

    match problem {
        Problem::Decompose { n, .. } => {
            let (first, second) = parse_decompose(raw).ok_or(AnswerError::DecomposeFormat)?;
            let is_correct = first.checked_add(second) == Some(u64::from(*n));
            Ok(Grade { is_correct, canonical_answer: None })
        }
        Problem::Arithmetic { answer, .. } => {
            let value = parse_number(raw).ok_or(AnswerError::NotANumber)?;
            // Exact comparison: a fractional entry never matches a whole answer.
            let is_correct = value == *answer as f64;
            Ok(Grade { is_correct, canonical_answer: Some(*answer) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor_engine::{
        helpers::{arithmetic, decompose},
        models::Operation,
    };

    #[test]
    fn decompose_accepts_plus_comma_and_space() {
        let p = decompose(10);
        for raw in ["3+7", "4,6", "7 3", " 2 , 8 ", "1 + 9"] {
            let g = grade(&p, raw).unwrap();
            assert!(g.is_correct, "{raw} should be correct");
            assert_eq!(g.canonical_answer, None);
        }
    }

    #[test]
    fn decompose_checks_sum_only() {
        let p = decompose(10);
        assert!(!grade(&p, "3+6").unwrap().is_correct);
        assert!(grade(&p, "10+0").unwrap().is_correct);
    }

    #[test]
    fn decompose_rejects_unparseable_text() {
        let p = decompose(10);
        assert_eq!(grade(&p, "abc"), Err(AnswerError::DecomposeFormat));
        assert_eq!(grade(&p, "10"), Err(AnswerError::DecomposeFormat));
        assert_eq!(grade(&p, "   "), Err(AnswerError::Empty));
    }

    #[test]
    fn decompose_uses_first_two_integers() {
        assert_eq!(parse_decompose("x 2+3+5"), Some((2, 3)));
        assert_eq!(parse_decompose("12,  30"), Some((12, 30)));
    }

    #[test]
    fn oversized_pair_is_accepted_but_wrong() {
        let p = decompose(10);
        assert_eq!(parse_decompose("99999999999999999999+1"), Some((u64::MAX, 1)));
        assert_eq!(
            grade(&p, "99999999999999999999+1"),
            Ok(Grade { is_correct: false, canonical_answer: None })
        );
        assert!(!grade(&p, "18446744073709551615,11").unwrap().is_correct);
    }

    #[test]
    fn only_ascii_digits_count() {
        let p = decompose(10);
        // Arabic-Indic three is skipped; the pair after it is used.
        assert_eq!(parse_decompose("\u{0663} 3+7"), Some((3, 7)));
        assert!(grade(&p, "\u{0663} 3+7").unwrap().is_correct);
        assert_eq!(grade(&p, "\u{0663}+\u{0667}"), Err(AnswerError::DecomposeFormat));
    }

    #[test]
    fn arithmetic_exact_match() {
        let p = arithmetic(Operation::Divide, 12, 3, None);
        assert_eq!(grade(&p, "4"), Ok(Grade { is_correct: true, canonical_answer: Some(4) }));
        assert!(grade(&p, "4.0").unwrap().is_correct);
        assert!(!grade(&p, "4.5").unwrap().is_correct);
        assert!(!grade(&p, "5").unwrap().is_correct);
    }

    #[test]
    fn arithmetic_rejects_non_numeric() {
        let p = arithmetic(Operation::Add, 2, 2, None);
        assert_eq!(grade(&p, "four"), Err(AnswerError::NotANumber));
        assert_eq!(grade(&p, "inf"), Err(AnswerError::NotANumber));
        assert_eq!(grade(&p, "NaN"), Err(AnswerError::NotANumber));
        assert_eq!(grade(&p, ""), Err(AnswerError::Empty));
    }
}
