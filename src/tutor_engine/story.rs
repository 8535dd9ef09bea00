//! Word-problem wording.
//!
//! Three narrative templates, each with wording per operation. The template is
//! picked uniformly at random; operands and the stored answer are untouched.

use crate::tutor_engine::{
    models::{Operation, Problem},
    random::RandomRange,
};

const TEMPLATE_COUNT: usize = 3;

/// Compose a story for `problem`. Decompose problems keep their own prompt.
pub fn story<R: RandomRange + ?Sized>(rng: &mut R, problem: &Problem) -> String {
    match problem {
        Problem::Arithmetic { a, b, operation, .. } => {
            let template = rng.index(TEMPLATE_COUNT);
            tell(template, *operation, *a, *b)
        }
        Problem::Decompose { prompt, .. } => prompt.clone(),
    }
}

/// Render template `template` (0-based, wraps) for `a (op) b`.
pub fn tell(template: usize, operation: Operation, a: u32, b: u32) -> String {
    match (template % TEMPLATE_COUNT, operation) {
        (0, Operation::Add) =>
            format!("You have {a} toy cars and your friend gives you {b} more. How many now?"),
        (0, Operation::Subtract) =>
            format!("You had {a} stickers and gave away {b}. How many left?"),
        (0, Operation::Multiply) =>
            format!("There are {a} boxes with {b} crayons in each box. How many crayons in all?"),
        (0, Operation::Divide) =>
            format!("You share {a} cookies equally with {b} friends. How many cookies does each friend get?"),

        (1, Operation::Add) =>
            format!("There are {a} apples on a tree and {b} fall down. How many apples total on the ground?"),
        (1, Operation::Subtract) =>
            format!("You collected {a} shells and lost {b}. How many remain?"),
        (1, Operation::Multiply) =>
            format!("A garden has {a} rows of flowers with {b} flowers in each row. How many flowers?"),
        (1, Operation::Divide) =>
            format!("{a} marbles are put into bags of {b}. How many bags are filled?"),

        (_, Operation::Add) =>
            format!("A class reads {a} pages on Monday and {b} pages on Tuesday. How many pages total?"),
        (_, Operation::Subtract) =>
            format!("A baker made {a} cupcakes and sold {b}. How many are left?"),
        (_, Operation::Multiply) =>
            format!("Each of {a} kids brings {b} balloons to a party. How many balloons are there?"),
        (_, Operation::Divide) =>
            format!("A teacher hands out {a} pencils so each of {b} tables gets the same number. How many pencils per table?"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor_engine::{helpers::arithmetic, random::ScriptedRange};

    #[test]
    fn scripted_draw_selects_template() {
        let p = arithmetic(Operation::Add, 4, 3, None);
        let mut rng = ScriptedRange::new([1]);
        assert_eq!(
            story(&mut rng, &p),
            "There are 4 apples on a tree and 3 fall down. How many apples total on the ground?"
        );
    }

    #[test]
    fn wording_follows_operation() {
        assert!(tell(0, Operation::Subtract, 9, 2).contains("gave away 2"));
        assert!(tell(0, Operation::Multiply, 3, 5).contains("3 boxes with 5 crayons"));
        assert!(tell(2, Operation::Divide, 12, 4).contains("each of 4 tables"));
    }

    #[test]
    fn every_template_mentions_both_operands() {
        let ops = [Operation::Add, Operation::Subtract, Operation::Multiply, Operation::Divide];
        for template in 0..TEMPLATE_COUNT {
            for op in ops {
                let text = tell(template, op, 17, 3);
                assert!(text.contains("17") && text.contains('3'), "{template} {op:?}: {text}");
            }
        }
    }

    #[test]
    fn decompose_keeps_its_prompt() {
        let p = Problem::Decompose {
            n: 9,
            prompt: "Split 9 into two whole-number parts.".to_string(),
            hint: String::new(),
        };
        let mut rng = ScriptedRange::new([2]);
        assert_eq!(story(&mut rng, &p), p.prompt());
    }
}
