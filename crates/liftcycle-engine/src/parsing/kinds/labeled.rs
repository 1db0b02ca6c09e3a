use std::sync::OnceLock;

use regex::Regex;

/// A `Field: value` line that fills in the current labeled exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabeledField {
    Sets,
    Reps,
    Tempo,
    Rpe,
    Rest,
}

impl LabeledField {
    fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "sets" => Some(Self::Sets),
            "reps" => Some(Self::Reps),
            "tempo" => Some(Self::Tempo),
            "rpe" => Some(Self::Rpe),
            "rest" => Some(Self::Rest),
            _ => None,
        }
    }
}

pub struct LabeledExercise;

impl LabeledExercise {
    /// Exercise name from `Exercise: <name>`, `Exercise 2: <name>` or `Exercise:2: <name>`.
    pub fn name(line: &str) -> Option<&str> {
        static EXERCISE_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = EXERCISE_REGEX.get_or_init(|| {
            Regex::new(r"(?i)^exercise(?:\s*:?\s*\d+)?\s*:\s*(\S.*?)\s*$")
                .expect("Invalid labeled exercise regex")
        });

        re.captures(line).and_then(|caps| caps.get(1)).map(|m| m.as_str())
    }

    /// Field label and value from `Reps: 10`, `Tempo: 20X1`, `Sets: 3`, `Rest: 90 sec`, `RPE: 8`.
    ///
    /// The value may be empty.
    pub fn field(line: &str) -> Option<(LabeledField, &str)> {
        static FIELD_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = FIELD_REGEX.get_or_init(|| {
            Regex::new(r"(?i)^(sets|reps|tempo|rpe|rest)\s*:\s*(.*?)\s*$")
                .expect("Invalid labeled field regex")
        });

        let caps = re.captures(line)?;
        let field = LabeledField::from_label(caps.get(1)?.as_str())?;
        let value = caps.get(2).map_or("", |m| m.as_str());
        Some((field, value))
    }
}
