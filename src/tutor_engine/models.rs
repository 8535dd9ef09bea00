use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::UnknownKey;

// ---------------------------------------------------------------------------
// Practice settings
// ---------------------------------------------------------------------------

/// Presentation / strategy track. Orthogonal to the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Flash,
    Visual,
    Word,
    Decompose,
    #[serde(rename = "make10")]
    MakeTen,
}

impl Mode {
    pub fn key(self) -> &'static str {
        match self {
            Mode::Flash     => "flash",
            Mode::Visual    => "visual",
            Mode::Word      => "word",
            Mode::Decompose => "decompose",
            Mode::MakeTen   => "make10",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Flash     => "Flash Facts",
            Mode::Visual    => "Ten Frames",
            Mode::Word      => "Word Problems",
            Mode::Decompose => "Decompose",
            Mode::MakeTen   => "Make 10 Shortcut",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Mode {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flash"     => Ok(Mode::Flash),
            "visual"    => Ok(Mode::Visual),
            "word"      => Ok(Mode::Word),
            "decompose" => Ok(Mode::Decompose),
            "make10"    => Ok(Mode::MakeTen),
            other       => Err(UnknownKey(other.to_string())),
        }
    }
}

/// A concrete arithmetic operation carried by a generated problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add      => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide   => "÷",
        }
    }

    /// Apply the operation. Callers only build divisions that are exact.
    pub fn apply(self, a: u32, b: u32) -> i64 {
        let (a, b) = (i64::from(a), i64::from(b));
        match self {
            Operation::Add      => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide   => if b == 0 { 0 } else { a / b },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add      => write!(f, "Addition"),
            Operation::Subtract => write!(f, "Subtraction"),
            Operation::Multiply => write!(f, "Multiplication"),
            Operation::Divide   => write!(f, "Division"),
        }
    }
}

/// What the learner picked in the operation selector.
///
/// `Mix` resolves to add or subtract with a fresh coin flip for every problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationChoice {
    Add,
    Subtract,
    Multiply,
    Divide,
    Mix,
}

impl OperationChoice {
    pub fn key(self) -> &'static str {
        match self {
            OperationChoice::Add      => "add",
            OperationChoice::Subtract => "subtract",
            OperationChoice::Multiply => "multiply",
            OperationChoice::Divide   => "divide",
            OperationChoice::Mix      => "mix",
        }
    }
}

impl From<Operation> for OperationChoice {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Add      => OperationChoice::Add,
            Operation::Subtract => OperationChoice::Subtract,
            Operation::Multiply => OperationChoice::Multiply,
            Operation::Divide   => OperationChoice::Divide,
        }
    }
}

impl FromStr for OperationChoice {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add"      => Ok(OperationChoice::Add),
            "subtract" => Ok(OperationChoice::Subtract),
            "multiply" => Ok(OperationChoice::Multiply),
            "divide"   => Ok(OperationChoice::Divide),
            "mix"      => Ok(OperationChoice::Mix),
            other      => Err(UnknownKey(other.to_string())),
        }
    }
}

impl fmt::Display for OperationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ---------------------------------------------------------------------------
// Generated problems
// ---------------------------------------------------------------------------

/// Marks an arithmetic fact produced by a strategy drill rather than plain practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortcutTag {
    #[serde(rename = "make10")]
    MakeTen,
}

impl fmt::Display for ShortcutTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutTag::MakeTen => write!(f, "make10"),
        }
    }
}

/// One question instance with enough data to render, grade, and hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Problem {
    Arithmetic {
        a: u32,
        b: u32,
        operation: Operation,
        answer: i64,
        prompt: String,
        hint: String,
        shortcut: Option<ShortcutTag>,
    },
    /// Split `n` into two whole-number parts. Correctness is structural, so
    /// no answer is stored.
    Decompose {
        n: u32,
        prompt: String,
        hint: String,
    },
}

impl Problem {
    pub fn prompt(&self) -> &str {
        match self {
            Problem::Arithmetic { prompt, .. } | Problem::Decompose { prompt, .. } => prompt,
        }
    }

    pub fn hint(&self) -> &str {
        match self {
            Problem::Arithmetic { hint, .. } | Problem::Decompose { hint, .. } => hint,
        }
    }

    /// The stored answer, if the problem has one.
    pub fn answer(&self) -> Option<i64> {
        match self {
            Problem::Arithmetic { answer, .. } => Some(*answer),
            Problem::Decompose { .. }          => None,
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            Problem::Arithmetic { operation, .. } => Some(*operation),
            Problem::Decompose { .. }             => None,
        }
    }

    /// Short fact form used in feedback, e.g. "7 + 5". Decompose problems use their prompt.
    pub fn fact_text(&self) -> String {
        match self {
            Problem::Arithmetic { a, b, operation, .. } => format!("{} {} {}", a, operation.symbol(), b),
            Problem::Decompose { prompt, .. }           => prompt.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Request type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub mode: Mode,
    pub operation: OperationChoice,
    /// Ceiling for operands and results. Callers keep this at 5 or above.
    pub maximum: u32,
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Flash-mode request with entropy seeding.
    pub fn new(operation: impl Into<OperationChoice>, maximum: u32) -> Self {
        ProblemRequest {
            mode: Mode::Flash,
            operation: operation.into(),
            maximum,
            rng_seed: None,
        }
    }
}
