use super::kinds::{
    LabeledExercise, LabeledField, NumberedExercise, RestNote, SectionHeader, SetLadder, SetLine,
};

/// The grammar production a single line belongs to.
///
/// Lines are classified once, independently of their neighbours; every later
/// stage works from the class instead of re-matching the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Empty after trimming, or a standalone run of dashes.
    Blank,
    /// `C) Strength Intensity 1 (14 min): Barbell Bench Press`
    Header { letter: char },
    /// `Exercise: Barbell Bench Press`
    LabeledExercise { name: String },
    /// `Reps: 10`, `Tempo: 20X1`, ...
    LabeledField { field: LabeledField, value: String },
    /// `1) DB ER on Knee; 8-10 reps/side`
    NumberedExercise(NumberedExercise),
    /// `Warm-Up Set - 10 reps @20X1 - Easy`
    WarmupSet(SetLine),
    /// `Working Set 1 - 10 reps @20X1 - RPE 7`
    WorkingSet { number: u32, set: SetLine },
    /// `rest 90 sec and back to 1.`
    RestNote { duration: String },
    /// Anything else. Kept verbatim as narrative.
    Plain,
}

/// A trimmed line together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub text: String,
    pub class: LineClass,
}

impl ClassifiedLine {
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            class: LineClass::Blank,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.class, LineClass::Blank)
    }
}

/// Classifies individual lines of workout text.
pub struct WorkoutLineClassifier;

impl WorkoutLineClassifier {
    /// Classifies one raw line. Productions are tried in a fixed priority order
    /// so a line never belongs to more than one of them.
    pub fn classify(&self, raw: &str) -> ClassifiedLine {
        let text = raw.trim();
        let class = Self::class_of(text);
        ClassifiedLine {
            text: text.to_string(),
            class,
        }
    }

    fn class_of(text: &str) -> LineClass {
        if text.is_empty() || is_separator(text) {
            return LineClass::Blank;
        }
        if let Some(letter) = SectionHeader::letter(text) {
            return LineClass::Header { letter };
        }
        if let Some(name) = LabeledExercise::name(text) {
            return LineClass::LabeledExercise {
                name: name.to_string(),
            };
        }
        if let Some((field, value)) = LabeledExercise::field(text) {
            return LineClass::LabeledField {
                field,
                value: value.to_string(),
            };
        }
        if let Some(set) = SetLadder::warmup(text) {
            return LineClass::WarmupSet(set);
        }
        if let Some((number, set)) = SetLadder::working(text) {
            return LineClass::WorkingSet { number, set };
        }
        if let Some(exercise) = NumberedExercise::parse(text) {
            return LineClass::NumberedExercise(exercise);
        }
        if let Some(duration) = RestNote::duration(text) {
            return LineClass::RestNote {
                duration: duration.to_string(),
            };
        }
        LineClass::Plain
    }
}

fn is_separator(text: &str) -> bool {
    text.len() >= 3 && text.chars().all(|c| c == '-')
}
