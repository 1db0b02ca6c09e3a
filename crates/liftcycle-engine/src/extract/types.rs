use serde::Serialize;

/// One row of prescribed work. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub tempo: String,
    pub rpe: String,
    pub rest: String,
}

impl ExerciseEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One rung of a warm-up/working set ladder for a single exercise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetSpec {
    /// `Warm-up` or `Set N`.
    pub label: String,
    pub reps: String,
    pub tempo: String,
    pub rpe: String,
}
