//! # Document Rendering
//!
//! Projects parsed sections onto a markup-agnostic [`Document`].
//!
//! Every section emits a heading carrying its header line, then its body using
//! the first rule that applies:
//!
//! 1. **Set ladder**: warm-up/working set lines plus exactly one exercise (or an
//!    exercise named in the header) give a single-row table
//!    `Exercise | <set labels> | Tempo | RPE`
//! 2. **Exercise table**: one or more exercise entries give
//!    `Exercise | Sets | Reps | Tempo | Rest`, one row per entry
//! 3. **Narrative**: the body as written
//!
//! Body lines that a table did not decompose are kept as narrative around it,
//! so no input text is lost.

pub mod markup;
pub mod narrative;
pub mod types;

pub use markup::render_document_as_plain_markup;
pub use types::{Alignment, Block, Document, Table};

use crate::{
    extract::{ExerciseEntry, ExerciseForm, SetSpec, extract_exercises, extract_sets},
    parsing::Section,
};

use narrative::narrative_blocks;

/// Heading level used for section headers.
pub const SECTION_HEADING_LEVEL: u8 = 2;

pub const EXERCISE_TABLE_HEADER: [&str; 5] = ["Exercise", "Sets", "Reps", "Tempo", "Rest"];

/// Renders sections in order. No sections, no blocks.
pub fn render_sections(sections: &[Section]) -> Document {
    let mut blocks = Vec::new();
    for section in sections {
        render_section(section, &mut blocks);
    }
    Document { blocks }
}

fn render_section(section: &Section, blocks: &mut Vec<Block>) {
    blocks.push(Block::Heading {
        level: SECTION_HEADING_LEVEL,
        text: section.header.clone(),
    });

    let exercises = extract_exercises(section);
    let ladder = extract_sets(section);

    let (table, mut consumed) = if !ladder.sets.is_empty() && exercises.entries.len() == 1 {
        let entry = &exercises.entries[0];
        let mut consumed = ladder.consumed.clone();
        // The ladder row shows only the name; a numbered head carrying its own
        // reps, tempo or rest stays narrative.
        if exercises.form == Some(ExerciseForm::Labeled) || entry_is_name_only(entry) {
            consumed.extend(&exercises.heads);
        }
        (ladder_table(entry, &ladder.sets), consumed)
    } else if !ladder.sets.is_empty()
        && exercises.entries.is_empty()
        && let Some(subject) = section.subject()
    {
        let entry = ExerciseEntry::named(subject);
        (ladder_table(&entry, &ladder.sets), ladder.consumed.clone())
    } else if !exercises.entries.is_empty() {
        (exercise_table(&exercises.entries), exercises.consumed.clone())
    } else {
        log::trace!("section {} rendered as narrative", section.letter);
        blocks.extend(narrative_blocks(&section.body_lines));
        return;
    };

    consumed.sort_unstable();
    consumed.dedup();
    let first = consumed.first().copied().unwrap_or_default();
    let before = section.body_lines[..first].iter();
    let after = section
        .body_lines
        .iter()
        .enumerate()
        .skip(first)
        .filter(|(idx, _)| consumed.binary_search(idx).is_err())
        .map(|(_, line)| line);

    blocks.extend(narrative_blocks(before));
    blocks.push(Block::Table(table));
    blocks.extend(narrative_blocks(after));
}

fn entry_is_name_only(entry: &ExerciseEntry) -> bool {
    entry.reps.is_empty() && entry.tempo.is_empty() && entry.rest.is_empty()
}

/// `Exercise | Warm-up | Set 1 | ... | Tempo | RPE` with a single row.
///
/// Tempo comes from the first rung (falling back to the exercise's own tempo);
/// RPE lists every rung's value, `-` where a rung has none.
pub fn ladder_table(entry: &ExerciseEntry, sets: &[SetSpec]) -> Table {
    let mut header = vec!["Exercise".to_string()];
    header.extend(sets.iter().map(|s| s.label.clone()));
    header.extend(["Tempo".to_string(), "RPE".to_string()]);

    let tempo = sets
        .first()
        .map(|s| s.tempo.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or(entry.tempo.as_str());
    let rpe = sets
        .iter()
        .map(|s| if s.rpe.is_empty() { "-" } else { s.rpe.as_str() })
        .collect::<Vec<_>>()
        .join(", ");

    let mut row = vec![entry.name.clone()];
    row.extend(sets.iter().map(|s| s.reps.clone()));
    row.extend([tempo.to_string(), rpe]);

    let mut table = Table::new(header);
    table.push_row(row);
    table
}

/// `Exercise | Sets | Reps | Tempo | Rest`, one row per entry, empty cells for gaps.
///
/// An `RPE` column is appended only when some entry carries one (labeled `RPE:` lines).
pub fn exercise_table(entries: &[ExerciseEntry]) -> Table {
    let with_rpe = entries.iter().any(|e| !e.rpe.is_empty());
    let mut table = Table::new(EXERCISE_TABLE_HEADER);
    if with_rpe {
        table.header.push("RPE".to_string());
    }

    for entry in entries {
        let mut row = vec![
            entry.name.clone(),
            entry.sets.clone(),
            entry.reps.clone(),
            entry.tempo.clone(),
            entry.rest.clone(),
        ];
        if with_rpe {
            row.push(entry.rpe.clone());
        }
        table.push_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_sections;
    use pretty_assertions::assert_eq;

    fn render(raw: &str) -> Vec<Block> {
        render_sections(&parse_sections(raw)).blocks
    }

    fn spec(label: &str, reps: &str, tempo: &str, rpe: &str) -> SetSpec {
        SetSpec {
            label: label.into(),
            reps: reps.into(),
            tempo: tempo.into(),
            rpe: rpe.into(),
        }
    }

    #[test]
    fn ladder_table_marks_missing_rpe_and_falls_back_to_entry_tempo() {
        let entry = ExerciseEntry {
            tempo: "30X0".into(),
            ..ExerciseEntry::named("DB Bulgarian Split Squat")
        };
        let table = ladder_table(
            &entry,
            &[spec("Warm-up", "10", "", "Easy"), spec("Set 1", "10", "", "")],
        );

        assert_eq!(table.header, vec!["Exercise", "Warm-up", "Set 1", "Tempo", "RPE"]);
        assert_eq!(
            table.rows,
            vec![vec![
                "DB Bulgarian Split Squat".to_string(),
                "10".into(),
                "10".into(),
                "30X0".into(),
                "Easy, -".into()
            ]]
        );
    }

    #[test]
    fn exercise_table_adds_rpe_column_only_when_present() {
        let plain = exercise_table(&[ExerciseEntry::named("Wall Sit")]);
        assert_eq!(plain.header, EXERCISE_TABLE_HEADER.to_vec());

        let with_rpe = exercise_table(&[
            ExerciseEntry::named("Wall Sit"),
            ExerciseEntry {
                rpe: "8".into(),
                ..ExerciseEntry::named("Back Squat")
            },
        ]);
        assert_eq!(with_rpe.column("RPE"), vec!["", "8"]);
    }

    #[test]
    fn header_subject_names_ladder_without_exercise_lines() {
        let blocks = render(
            "D) Strength Intensity 2 (12 min): Single Leg Landmine RDL\n\
             Working Set 1 - 8/side @ 20X1 - RPE 7\n\
             Working Set 2 - 6/side @ 20X1 - RPE 8",
        );

        let Block::Table(table) = &blocks[1] else {
            panic!("expected table, got {:?}", blocks[1]);
        };
        assert_eq!(table.column("Exercise"), vec!["Single Leg Landmine RDL"]);
        assert_eq!(table.column("Set 2"), vec!["6/side"]);
        assert_eq!(table.column("RPE"), vec!["7, 8"]);
    }

    #[test]
    fn ladder_with_several_exercises_falls_back_to_exercise_table() {
        let blocks = render(
            "C) Lift: 3 sets\n\
             1. Back Squat; 5 reps\n\
             2. Front Squat; 5 reps\n\
             Working Set 1 - 5 @20X1 - RPE 7",
        );

        let Block::Table(table) = &blocks[1] else {
            panic!("expected table, got {:?}", blocks[1]);
        };
        assert_eq!(table.header, EXERCISE_TABLE_HEADER.to_vec());
        assert_eq!(
            blocks[2],
            Block::Paragraph {
                lines: vec!["Working Set 1 - 5 @20X1 - RPE 7".into()]
            }
        );
    }

    #[test]
    fn section_without_rows_is_narrative() {
        assert_eq!(
            render("A) Daily Focus Notes: Mental Cue\nPush the floor away.\n\nShort on Time? Remove Finisher."),
            vec![
                Block::Heading {
                    level: SECTION_HEADING_LEVEL,
                    text: "A) Daily Focus Notes: Mental Cue".into()
                },
                Block::Paragraph {
                    lines: vec!["Push the floor away.".into()]
                },
                Block::Paragraph {
                    lines: vec!["Short on Time? Remove Finisher.".into()]
                },
            ]
        );
    }

    #[test]
    fn empty_section_is_only_a_heading() {
        assert_eq!(
            render("G) Cooldown"),
            vec![Block::Heading {
                level: SECTION_HEADING_LEVEL,
                text: "G) Cooldown".into()
            }]
        );
    }
}
