use super::{classify::ClassifiedLine, kinds::SectionHeader};

/// One lettered block of a workout day (A through G).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section letter, `'A'..='G'`.
    pub letter: char,
    /// The full trimmed header line, e.g. `B) Warmup: 2 min Cardio of Choice + 2-3 Sets`.
    pub header: String,
    /// Content lines in order. Blank placeholders mark paragraph breaks; there is
    /// never a leading, trailing or doubled placeholder.
    pub body_lines: Vec<ClassifiedLine>,
}

impl Section {
    pub fn new(letter: char, header: impl Into<String>) -> Self {
        Self {
            letter,
            header: header.into(),
            body_lines: Vec::new(),
        }
    }

    /// Body text line by line, with `""` for paragraph breaks.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body_lines.iter().map(|l| l.text.as_str())
    }

    /// Exercise named in the header, see [`SectionHeader::subject`].
    pub fn subject(&self) -> Option<&str> {
        SectionHeader::subject(&self.header)
    }

    /// Set count declared in the header, see [`SectionHeader::declared_sets`].
    pub fn declared_sets(&self) -> Option<&str> {
        SectionHeader::declared_sets(&self.header)
    }
}
