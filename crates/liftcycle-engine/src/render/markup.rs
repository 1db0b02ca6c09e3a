use std::fmt::Write;

use super::types::{Alignment, Block, Document, Table};

/// Renders a document as Markdown text (GFM pipe tables).
///
/// Blocks are separated by one blank line and the output ends with a newline.
/// An empty document renders as an empty string.
pub fn render_document_as_plain_markup(doc: &Document) -> String {
    let mut out = String::new();

    for (i, block) in doc.blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match block {
            Block::Heading { level, text } => {
                let marker = "#".repeat(usize::from((*level).max(1)));
                let _ = writeln!(out, "{marker} {text}");
            }
            Block::Paragraph { lines } => {
                for line in lines {
                    out.push_str(line);
                    out.push('\n');
                }
            }
            Block::Table(table) => write_table(&mut out, table),
            Block::BulletList { items } => {
                for item in items {
                    let _ = writeln!(out, "- {item}");
                }
            }
        }
    }

    out
}

fn write_table(out: &mut String, table: &Table) {
    write_row(out, &table.header);
    let rule: Vec<String> = (0..table.header.len())
        .map(|column| {
            match table.alignment(column) {
                Alignment::None => "---",
                Alignment::Left => ":---",
                Alignment::Center => ":---:",
                Alignment::Right => "---:",
            }
            .to_string()
        })
        .collect();
    write_row(out, &rule);
    for row in &table.rows {
        write_row(out, row);
    }
}

fn write_row(out: &mut String, cells: &[String]) {
    out.push('|');
    for cell in cells {
        let _ = write!(out, " {} |", escape_cell(cell));
    }
    out.push('\n');
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn alignment_rule_and_escaped_cells() {
        let mut table = Table::new(["Exercise", "Equipment", "Rest"]);
        table.alignments = vec![Alignment::Left, Alignment::Center, Alignment::Right];
        table.push_row(vec!["Fly".into(), "cable | band".into(), "60 sec".into()]);

        assert_eq!(
            render_document_as_plain_markup(&Document {
                blocks: vec![Block::Table(table)]
            }),
            "| Exercise | Equipment | Rest |\n\
             | :--- | :---: | ---: |\n\
             | Fly | cable \\| band | 60 sec |\n"
        );
    }

    #[test]
    fn empty_document_renders_nothing() {
        assert_eq!(render_document_as_plain_markup(&Document::default()), "");
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let mut table = Table::new(["Exercise", "Reps"]);
        table.push_row(vec!["Bench Dips".into(), "10-15".into()]);
        table.push_row(vec!["Pull | Push".into(), String::new()]);

        let doc = Document {
            blocks: vec![
                Block::Heading {
                    level: 2,
                    text: "B) Warmup".into(),
                },
                Block::Paragraph {
                    lines: vec!["line one".into(), "line two".into()],
                },
                Block::Table(table),
                Block::BulletList {
                    items: vec!["Heel Sit x 1 min".into()],
                },
            ],
        };

        assert_eq!(
            render_document_as_plain_markup(&doc),
            "## B) Warmup\n\
             \n\
             line one\n\
             line two\n\
             \n\
             | Exercise | Reps |\n\
             | --- | --- |\n\
             | Bench Dips | 10-15 |\n\
             | Pull \\| Push |  |\n\
             \n\
             - Heel Sit x 1 min\n"
        );
    }
}
