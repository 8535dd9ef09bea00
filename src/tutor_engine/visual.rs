//! Ten-frame layout parameters.
//!
//! The presentation layer draws frames of ten cells; this module only decides
//! how many cells are filled and which ones are crossed out.

use serde::{Deserialize, Serialize};

use crate::tutor_engine::models::{Operation, Problem};

pub const FRAME_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualLayout {
    /// Cells drawn as counters, crossed ones included.
    pub total: u32,
    /// 1-based indices of the cells to cross out, ascending.
    pub crossed: Vec<u32>,
    pub frames: u32,
}

impl VisualLayout {
    pub fn filled(&self) -> u32 {
        self.total - self.crossed.len() as u32
    }
}

pub fn layout(problem: &Problem) -> VisualLayout {
    let (total, take_away) = match problem {
        Problem::Arithmetic { a, b, operation, .. } => match operation {
            Operation::Add      => (a + b, 0),
            Operation::Subtract => (*a, (*b).min(*a)),
            Operation::Multiply => (a * b, 0),
            Operation::Divide   => (*a, 0),
        },
        Problem::Decompose { n, .. } => (*n, 0),
    };

    VisualLayout {
        total,
        crossed: (total - take_away + 1..=total).collect(),
        frames: total.div_ceil(FRAME_SIZE),
    }
}
