use super::{
    classify::{ClassifiedLine, LineClass},
    types::Section,
};

/// Groups classified lines into sections as they stream past.
pub struct SectionBuilder {
    open: Option<Section>,
    out: Vec<Section>,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self {
            open: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: ClassifiedLine) {
        match line.class {
            LineClass::Header { letter } => {
                self.close_section();
                self.open = Some(Section::new(letter, line.text));
            }
            LineClass::Blank => {
                if let Some(section) = self.open.as_mut()
                    && section.body_lines.last().is_some_and(|l| !l.is_blank())
                {
                    section.body_lines.push(ClassifiedLine::blank());
                }
            }
            _ => match self.open.as_mut() {
                Some(section) => section.body_lines.push(line),
                None => log::trace!("discarding line before first section: {:?}", line.text),
            },
        }
    }

    pub fn finish(mut self) -> Vec<Section> {
        // EOF flush
        self.close_section();
        self.out
    }

    fn close_section(&mut self) {
        let Some(mut section) = self.open.take() else {
            return;
        };
        if section.body_lines.last().is_some_and(ClassifiedLine::is_blank) {
            section.body_lines.pop();
        }
        log::debug!(
            "closed section {} with {} body lines",
            section.letter,
            section.body_lines.len()
        );
        self.out.push(section);
    }
}

impl Default for SectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::classify::WorkoutLineClassifier;
    use pretty_assertions::assert_eq;

    fn build(text: &str) -> Vec<Section> {
        let mut builder = SectionBuilder::new();
        for line in text.lines() {
            builder.push(WorkoutLineClassifier.classify(line));
        }
        builder.finish()
    }

    fn lines(section: &Section) -> Vec<&str> {
        section.lines().collect()
    }

    #[test]
    fn no_headers_yields_no_sections() {
        assert!(build("REST DAY - Sunday\n\nHappy Sunday!").is_empty());
        assert!(build("").is_empty());
    }

    #[test]
    fn lines_before_first_header_are_discarded() {
        let sections = build("LIFT 5x - Week 1 - Day 1\n\nA) Focus\nStay tight.");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].header, "A) Focus");
        assert_eq!(lines(&sections[0]), vec!["Stay tight."]);
    }

    #[test]
    fn blank_runs_collapse_to_one_placeholder() {
        let sections = build("A) Focus\n\nfirst\n\n\n---\n  \nsecond\n\n");
        assert_eq!(lines(&sections[0]), vec!["first", "", "second"]);
    }

    #[test]
    fn header_closes_previous_section() {
        let sections = build("A) Focus\nnote\nB) Warmup\n1) Bench Dips; 10-15 reps\nC) Lift");
        assert_eq!(
            sections
                .iter()
                .map(|s| (s.letter, s.header.as_str()))
                .collect::<Vec<_>>(),
            vec![('A', "A) Focus"), ('B', "B) Warmup"), ('C', "C) Lift")]
        );
        assert_eq!(lines(&sections[0]), vec!["note"]);
        assert_eq!(lines(&sections[1]), vec!["1) Bench Dips; 10-15 reps"]);
        assert!(sections[2].body_lines.is_empty());
    }

    #[test]
    fn body_never_contains_a_header() {
        let sections = build("A) One\nB) Two\ntext\nA) One again");
        assert_eq!(sections.len(), 3);
        for section in &sections {
            assert!(
                section
                    .body_lines
                    .iter()
                    .all(|l| !matches!(l.class, LineClass::Header { .. }))
            );
        }
    }
}
