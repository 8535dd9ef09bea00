//! Learner-chosen practice settings.
//!
//! Settings arrive either as JSON (a saved preference blob) or field by field
//! from selector controls. Either way the maximum is clamped into
//! [`MIN_MAXIMUM`]..=[`MAX_MAXIMUM`].

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tutor_engine::models::{Mode, OperationChoice};

pub const MIN_MAXIMUM: u32 = 5;
pub const MAX_MAXIMUM: u32 = 100;
pub const DEFAULT_MAXIMUM: u32 = 20;

lazy_static! {
    // Optional sign and the digits after it; whatever follows is ignored.
    static ref LEADING_INTEGER: Regex =
        Regex::new(r"^\s*([+-]?)([0-9]+)").expect("leading integer pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorSettings {
    pub mode: Mode,
    pub operation: OperationChoice,
    pub maximum: u32,
}

impl Default for TutorSettings {
    fn default() -> Self {
        TutorSettings {
            mode: Mode::Flash,
            operation: OperationChoice::Mix,
            maximum: DEFAULT_MAXIMUM,
        }
    }
}

impl TutorSettings {
    /// Parse a JSON settings blob; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let settings: TutorSettings = serde_json::from_str(text)?;
        Ok(settings.normalized())
    }

    #[must_use]
    pub fn normalized(self) -> Self {
        TutorSettings { maximum: clamp_maximum(self.maximum), ..self }
    }

    #[must_use]
    pub fn with_mode(self, mode: Mode) -> Self {
        TutorSettings { mode, ..self }
    }

    #[must_use]
    pub fn with_operation(self, operation: OperationChoice) -> Self {
        TutorSettings { operation, ..self }
    }

    #[must_use]
    pub fn with_maximum(self, maximum: u32) -> Self {
        TutorSettings { maximum: clamp_maximum(maximum), ..self }
    }
}

pub fn clamp_maximum(maximum: u32) -> u32 {
    maximum.clamp(MIN_MAXIMUM, MAX_MAXIMUM)
}

/// Read the maximum from a text field.
///
/// Only the leading integer counts (`"12abc"` is 12, `"7.5"` is 7). Text
/// without one falls back to [`DEFAULT_MAXIMUM`]; anything else is clamped,
/// with values too large for `i64` saturating first.
pub fn parse_maximum(text: &str) -> u32 {
    let Some(caps) = LEADING_INTEGER.captures(text) else {
        return DEFAULT_MAXIMUM;
    };
    let negative = &caps[1] == "-";
    let value = caps[2].parse::<i64>().map_or(
        if negative { i64::MIN } else { i64::MAX },
        |v| if negative { -v } else { v },
    );
    value.clamp(i64::from(MIN_MAXIMUM), i64::from(MAX_MAXIMUM)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_launch() {
        let s = TutorSettings::default();
        assert_eq!(s.mode, Mode::Flash);
        assert_eq!(s.operation, OperationChoice::Mix);
        assert_eq!(s.maximum, 20);
    }

    #[test]
    fn maximum_text_is_clamped_or_defaulted() {
        assert_eq!(parse_maximum("50"), 50);
        assert_eq!(parse_maximum("2"), 5);
        assert_eq!(parse_maximum("-40"), 5);
        assert_eq!(parse_maximum("1000"), 100);
        assert_eq!(parse_maximum("lots"), 20);
        assert_eq!(parse_maximum(""), 20);
    }

    #[test]
    fn maximum_text_reads_the_leading_integer() {
        assert_eq!(parse_maximum("12abc"), 12);
        assert_eq!(parse_maximum("7.5"), 7);
        assert_eq!(parse_maximum("  +30 items"), 30);
        assert_eq!(parse_maximum("99999999999999999999999"), 100);
        assert_eq!(parse_maximum("-99999999999999999999999"), 5);
        assert_eq!(parse_maximum("abc12"), 20);
        assert_eq!(parse_maximum("- 12"), 20);
    }

    #[test]
    fn json_fills_defaults_and_clamps() {
        let s = TutorSettings::from_json(r#"{"mode":"make10","maximum":3}"#).unwrap();
        assert_eq!(s.mode, Mode::MakeTen);
        assert_eq!(s.operation, OperationChoice::Mix);
        assert_eq!(s.maximum, 5);

        let s = TutorSettings::from_json(r#"{"operation":"divide"}"#).unwrap();
        assert_eq!(s.operation, OperationChoice::Divide);
        assert_eq!(s.maximum, 20);
    }

    #[test]
    fn unknown_mode_is_an_error() {
        assert!(TutorSettings::from_json(r#"{"mode":"abacus"}"#).is_err());
    }

    #[test]
    fn builder_clamps_maximum() {
        let s = TutorSettings::default().with_maximum(500).with_mode(Mode::Visual);
        assert_eq!((s.mode, s.maximum), (Mode::Visual, 100));
    }
}
