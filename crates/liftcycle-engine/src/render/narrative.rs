use crate::parsing::ClassifiedLine;

use super::types::{Alignment, Block, Table};

/// Renders lines that no table claimed, splitting paragraphs at blank placeholders.
///
/// A run made only of `- item` lines becomes a bullet list and a run that is a
/// well-formed pipe table becomes a table; anything else is a verbatim paragraph.
pub fn narrative_blocks<'a>(lines: impl IntoIterator<Item = &'a ClassifiedLine>) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for line in lines {
        if line.is_blank() {
            flush_run(&mut run, &mut blocks);
        } else {
            run.push(&line.text);
        }
    }
    flush_run(&mut run, &mut blocks);

    blocks
}

fn flush_run(run: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if run.is_empty() {
        return;
    }

    let block = if let Some(items) = bullet_items(run) {
        Block::BulletList { items }
    } else if let Some(table) = pipe_table(run) {
        Block::Table(table)
    } else {
        Block::Paragraph {
            lines: run.iter().map(|l| l.to_string()).collect(),
        }
    };
    blocks.push(block);
    run.clear();
}

fn bullet_items(run: &[&str]) -> Option<Vec<String>> {
    run.iter()
        .map(|line| line.strip_prefix("- ").map(str::to_string))
        .collect()
}

/// Parses a pre-tabulated run such as
///
/// ```text
/// | Set | Reps | Tempo | Rest |
/// |-----|:----:|-------|-----:|
/// | Warm-up | 10 | 20X0 | 90 sec |
/// ```
///
/// The alignment row becomes [`Table::alignments`], left empty when no column sets one.
fn pipe_table(run: &[&str]) -> Option<Table> {
    if run.len() < 2 || !run.iter().all(|l| l.starts_with('|')) {
        return None;
    }
    let alignments = pipe_cells(run[1])
        .iter()
        .map(|cell| alignment_of(cell))
        .collect::<Option<Vec<_>>>()
        .filter(|a| !a.is_empty())?;

    let mut table = Table::new(pipe_cells(run[0]));
    if alignments.iter().any(|a| *a != Alignment::None) {
        table.alignments = alignments;
    }
    for line in &run[2..] {
        table.push_row(pipe_cells(line));
    }
    Some(table)
}

/// Splits a row on unescaped `|`; `\|` inside a cell is kept as a literal pipe.
fn pipe_cells(line: &str) -> Vec<String> {
    let inner = line.trim().strip_prefix('|').unwrap_or(line.trim());

    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                cell.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut cell).trim().to_string()),
            _ => cell.push(c),
        }
    }
    // A closing pipe leaves nothing after it.
    if !cell.trim().is_empty() {
        cells.push(cell.trim().to_string());
    }
    cells
}

fn alignment_of(cell: &str) -> Option<Alignment> {
    let left = cell.starts_with(':');
    let right = cell.len() > 1 && cell.ends_with(':');
    let dashes = cell.trim_start_matches(':').trim_end_matches(':');
    if dashes.is_empty() || !dashes.chars().all(|c| c == '-') {
        return None;
    }
    Some(match (left, right) {
        (true, true) => Alignment::Center,
        (true, false) => Alignment::Left,
        (false, true) => Alignment::Right,
        (false, false) => Alignment::None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::WorkoutLineClassifier;
    use pretty_assertions::assert_eq;

    fn classified(text: &str) -> Vec<ClassifiedLine> {
        text.lines()
            .map(|l| WorkoutLineClassifier.classify(l))
            .collect()
    }

    #[test]
    fn blank_placeholders_split_paragraphs() {
        let lines = classified("Short on Time? Remove Finisher.\n\n\"Count to 2.\"\nStay tight.");

        assert_eq!(
            narrative_blocks(&lines),
            vec![
                Block::Paragraph {
                    lines: vec!["Short on Time? Remove Finisher.".into()]
                },
                Block::Paragraph {
                    lines: vec!["\"Count to 2.\"".into(), "Stay tight.".into()]
                },
            ]
        );
    }

    #[test]
    fn dash_run_becomes_bullet_list() {
        let lines = classified("- Ankle Circles x 5 reps/direction\n- Heel Sit x 1 min");

        assert_eq!(
            narrative_blocks(&lines),
            vec![Block::BulletList {
                items: vec![
                    "Ankle Circles x 5 reps/direction".into(),
                    "Heel Sit x 1 min".into()
                ]
            }]
        );
    }

    #[test]
    fn mixed_run_stays_verbatim_paragraph() {
        let lines = classified("then stop and do:\n- 10 Tuck Ups");

        assert_eq!(
            narrative_blocks(&lines),
            vec![Block::Paragraph {
                lines: vec!["then stop and do:".into(), "- 10 Tuck Ups".into()]
            }]
        );
    }

    #[test]
    fn pipe_run_becomes_table() {
        let lines = classified(
            "| Exercise | Reps | Rest |\n|----------|------|------|\n| Leg Press | 12-15 | 90 sec |\n| Leg Curl | 12-15 | 60 sec |",
        );

        let mut expected = Table::new(["Exercise", "Reps", "Rest"]);
        expected.push_row(vec!["Leg Press".into(), "12-15".into(), "90 sec".into()]);
        expected.push_row(vec!["Leg Curl".into(), "12-15".into(), "60 sec".into()]);
        assert_eq!(narrative_blocks(&lines), vec![Block::Table(expected)]);
    }

    #[test]
    fn pipe_run_without_alignment_row_stays_paragraph() {
        let lines = classified("| a | b |\n| c | d |");
        assert!(matches!(
            narrative_blocks(&lines).as_slice(),
            [Block::Paragraph { .. }]
        ));
    }

    #[test]
    fn escaped_pipes_stay_inside_their_cell() {
        let lines = classified("| Exercise | Equipment |\n|---|---|\n| Fly | cable \\| band |");

        let mut expected = Table::new(["Exercise", "Equipment"]);
        expected.push_row(vec!["Fly".into(), "cable | band".into()]);
        assert_eq!(narrative_blocks(&lines), vec![Block::Table(expected)]);
    }

    #[test]
    fn empty_cells_are_kept() {
        assert_eq!(pipe_cells("| Fly |  | 60 sec |"), vec!["Fly", "", "60 sec"]);
        assert_eq!(pipe_cells("| Fly | 12 "), vec!["Fly", "12"]);
    }

    #[test]
    fn alignment_row_sets_column_alignment() {
        let lines = classified("| Set | Reps | Rest |\n|:---|:----:|---:|\n| Warm-up | 10 | 90 sec |");

        let blocks = narrative_blocks(&lines);
        let [Block::Table(table)] = blocks.as_slice() else {
            panic!("expected a single table");
        };
        assert_eq!(
            table.alignments,
            vec![Alignment::Left, Alignment::Center, Alignment::Right]
        );
    }

    #[test]
    fn no_lines_no_blocks() {
        assert!(narrative_blocks(&classified("")).is_empty());
    }
}
