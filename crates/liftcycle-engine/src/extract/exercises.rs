use crate::parsing::{LineClass, Section, kinds::LabeledField};

use super::types::ExerciseEntry;

/// Which of the two exercise conventions a section uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseForm {
    /// `Exercise: <name>` followed by `Reps:` / `Tempo:` / `Sets:` lines.
    Labeled,
    /// `1) <name>; <reps> reps @<tempo>` lines with optional rest notes.
    Numbered,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseExtraction {
    pub form: Option<ExerciseForm>,
    pub entries: Vec<ExerciseEntry>,
    /// Body line index that opened each entry, parallel to `entries`.
    pub heads: Vec<usize>,
    /// Every body line index decomposed into `entries`, ascending.
    pub consumed: Vec<usize>,
}

/// Extracts exercise entries from a section body.
///
/// A section holding any `Exercise:` line is read purely in labeled form;
/// otherwise numbered lines are tried. When neither matches, the result is empty.
pub fn extract_exercises(section: &Section) -> ExerciseExtraction {
    let labeled = section
        .body_lines
        .iter()
        .any(|l| matches!(l.class, LineClass::LabeledExercise { .. }));

    let extraction = if labeled {
        extract_labeled(section)
    } else {
        extract_numbered(section)
    };

    log::debug!(
        "section {}: {:?} form, {} entries",
        section.letter,
        extraction.form,
        extraction.entries.len()
    );
    extraction
}

fn extract_labeled(section: &Section) -> ExerciseExtraction {
    let mut out = ExerciseExtraction {
        form: Some(ExerciseForm::Labeled),
        ..Default::default()
    };

    for (idx, line) in section.body_lines.iter().enumerate() {
        match &line.class {
            LineClass::LabeledExercise { name } => {
                out.entries.push(ExerciseEntry::named(name.as_str()));
                out.heads.push(idx);
                out.consumed.push(idx);
            }
            // Fields belong to the latest exercise until the next `Exercise:` line;
            // before the first one they stay narrative.
            LineClass::LabeledField { field, value } => {
                if let Some(entry) = out.entries.last_mut() {
                    let slot = match field {
                        LabeledField::Sets => &mut entry.sets,
                        LabeledField::Reps => &mut entry.reps,
                        LabeledField::Tempo => &mut entry.tempo,
                        LabeledField::Rpe => &mut entry.rpe,
                        LabeledField::Rest => &mut entry.rest,
                    };
                    *slot = value.clone();
                    out.consumed.push(idx);
                }
            }
            _ => {}
        }
    }

    out
}

fn extract_numbered(section: &Section) -> ExerciseExtraction {
    let mut out = ExerciseExtraction::default();
    let declared_sets = section.declared_sets().unwrap_or_default();

    for (idx, line) in section.body_lines.iter().enumerate() {
        match &line.class {
            LineClass::NumberedExercise(exercise) => {
                out.entries.push(ExerciseEntry {
                    name: exercise.name.clone(),
                    sets: declared_sets.to_string(),
                    reps: exercise.reps.clone(),
                    tempo: exercise.tempo.clone(),
                    rpe: String::new(),
                    rest: exercise.rest.clone(),
                });
                out.heads.push(idx);
                out.consumed.push(idx);
            }
            LineClass::RestNote { duration } => {
                // Attaches to the latest numbered exercise only; a rest note seen
                // before any exercise, or after the rest is already known, stays narrative.
                if let Some(entry) = out.entries.last_mut()
                    && entry.rest.is_empty()
                {
                    entry.rest = duration.clone();
                    out.consumed.push(idx);
                }
            }
            _ => {}
        }
    }

    if !out.entries.is_empty() {
        out.form = Some(ExerciseForm::Numbered);
    }
    out
}
