//! Strategy hints.
//!
//! Every operation has a fixed decision tree keyed on operand size. Hints are
//! deterministic, purely informational, and never consulted by grading.

use crate::tutor_engine::models::Operation;

/// Derive the strategy hint for `a (op) b`.
pub fn hint_for(operation: Operation, a: u32, b: u32) -> String {
    match operation {
        Operation::Add      => add_hint(a, b),
        Operation::Subtract => subtract_hint(a, b),
        Operation::Multiply => multiply_hint(a, b),
        Operation::Divide   => divide_hint(a, b),
    }
}

/// Hint for the make-10 shortcut drill: move part of `b` over to fill `a` up to 10.
pub fn make_ten_hint(a: u32, b: u32) -> String {
    let need = 10 - i64::from(a);
    let leftover = i64::from(b) - need;
    if need > 0 && leftover >= 0 {
        format!(
            "Move {need} from the {b} over to the {a} to make 10. \
             You are left with {leftover}. Now add 10 and {leftover}."
        )
    } else {
        "Make 10 first: take what you need from one number to fill the other up to 10, \
         then add the rest."
            .to_string()
    }
}

pub fn decompose_hint(n: u32) -> String {
    format!("Find two whole numbers that add to {n}. Start small and build up.")
}

fn divide_hint(a: u32, b: u32) -> String {
    format!("Think multiplication: which number times {b} equals {a}?")
}

fn multiply_hint(a: u32, b: u32) -> String {
    let bigger = a.max(b);
    let smaller = a.min(b);

    if a <= 10 && b <= 10 {
        return format!(
            "Picture {a} rows with {b} in each row. \
             Count the rows by {b}s: that is {b} added {a} times."
        );
    }

    if smaller <= 5 {
        return format!(
            "Start with {bigger}. Add {bigger} again until you have {smaller} groups of {bigger}."
        );
    }

    let half = b / 2;
    let rest = b - half;
    format!(
        "Split {b} into {half} and {rest}. Work out {a} × {half} and {a} × {rest}, \
         then add the two answers together."
    )
}

fn subtract_hint(a: u32, b: u32) -> String {
    // Count back.
    if a <= 10 && b < a {
        return format!("Start at {a}. Count back {b} steps. Where do you land?");
    }

    // Take a whole ten, then the rest.
    if b >= 10 && b < a {
        let extra = b - 10;
        if extra > 0 {
            return format!(
                "Take away 10 first. Then take away {extra} more. \
                 How many are left after both steps?"
            );
        }
        return "Take away 10. How many are left?".to_string();
    }

    // Split a into its tens and ones.
    if a > 10 && b < a {
        let tens = i64::from(a / 10 * 10);
        let ones = i64::from(a) - tens;
        let still_need = i64::from(b) - ones;

        if ones >= i64::from(b) {
            return format!(
                "{a} is {tens} and {ones}. Take away {b} from the {ones}. \
                 Then put the {tens} with what is left."
            );
        }

        if still_need > 0 && tens - still_need >= 0 {
            return format!(
                "Think of {a} as {tens} and {ones}. First go down from {a} to {tens} \
                 (that used {ones}). You still need to take away {still_need} more from {tens}."
            );
        }
    }

    format!("You have {a}. You give away {b}. Picture taking {b} away. How many are left?")
}

fn add_hint(a: u32, b: u32) -> String {
    if a == b {
        return format!("Double {a}. That means counting {a} two times.");
    }

    let bigger = a.max(b);
    let smaller = a.min(b);

    if a <= 10 && b <= 10 {
        if a + b > 10 {
            return "Make 10 first. Take what you need to get to 10, then add the rest."
                .to_string();
        }
        return format!("Start at {bigger}. Count up {smaller} more. What number do you get?");
    }

    let next_friendly = bigger.div_ceil(10) * 10;
    let need = next_friendly - bigger;
    if need > 0 && need < smaller {
        return format!(
            "Build a friendly number. Use part of the smaller number to get from \
             {bigger} up to {next_friendly}. Then add what is left."
        );
    }

    format!(
        "Put {a} and {b} together. Think about adding the smaller number onto the bigger number."
    )
}
