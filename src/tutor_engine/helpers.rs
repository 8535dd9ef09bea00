//! Shared builder functions for the drill generators.
//!
//! Every drill ends by assembling the same pieces: the fact, its stored
//! answer, the display prompt, and the hint. These helpers centralise that
//! work so drill files only decide which operands to use.

use crate::tutor_engine::{
    hints::{decompose_hint, hint_for, make_ten_hint},
    models::{Operation, Problem, ShortcutTag},
};

/// Format a fact prompt, e.g. "7 + 5 = ?".
pub fn fact_prompt(operation: Operation, a: u32, b: u32) -> String {
    format!("{} {} {} = ?", a, operation.symbol(), b)
}

/// Build an arithmetic problem with its answer, prompt, and hint filled in.
///
/// A `MakeTen` shortcut swaps the generic addition hint for the make-10 one.
pub fn arithmetic(operation: Operation, a: u32, b: u32, shortcut: Option<ShortcutTag>) -> Problem {
    let hint = match shortcut {
        Some(ShortcutTag::MakeTen) => make_ten_hint(a, b),
        None                       => hint_for(operation, a, b),
    };
    Problem::Arithmetic {
        a,
        b,
        operation,
        answer: operation.apply(a, b),
        prompt: fact_prompt(operation, a, b),
        hint,
        shortcut,
    }
}

/// Build a decomposition task for `n`.
pub fn decompose(n: u32) -> Problem {
    Problem::Decompose {
        n,
        prompt: format!("Split {n} into two whole-number parts."),
        hint: decompose_hint(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_fills_answer_prompt_and_hint() {
        let p = arithmetic(Operation::Subtract, 12, 5, None);
        assert_eq!(p.answer(), Some(7));
        assert_eq!(p.prompt(), "12 - 5 = ?");
        assert!(!p.hint().is_empty());
    }

    #[test]
    fn make_ten_tag_selects_shortcut_hint() {
        let p = arithmetic(Operation::Add, 9, 4, Some(ShortcutTag::MakeTen));
        assert!(p.hint().starts_with("Move 1 from the 4 over to the 9"));
    }
}
