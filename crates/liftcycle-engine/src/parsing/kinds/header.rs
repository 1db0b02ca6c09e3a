use std::sync::OnceLock;

use regex::Regex;

pub struct SectionHeader;

impl SectionHeader {
    /// Returns the section letter when `line` (already trimmed) opens a section,
    /// e.g. `C) Strength Intensity 1 (14 min): Barbell Bench Press`.
    pub fn letter(line: &str) -> Option<char> {
        static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = HEADER_REGEX
            .get_or_init(|| Regex::new(r"^([A-G])\)[ \t]+\S").expect("Invalid header regex"));

        re.captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().chars().next())
    }

    /// The exercise named after the header's last `": "`, if any.
    ///
    /// `"C) Strength Intensity 1 (14 min): Barbell Bench Press"` yields
    /// `"Barbell Bench Press"`. A subject that is only a set count (`"3 sets"`)
    /// names no exercise and yields `None`.
    pub fn subject(header: &str) -> Option<&str> {
        let (_, subject) = header.rsplit_once(": ")?;
        let subject = subject.trim();
        if subject.is_empty() || Self::is_set_count(subject) {
            return None;
        }
        Some(subject)
    }

    /// A set count declared anywhere in the header: `2-3 Sets`, `3 sets`.
    pub fn declared_sets(header: &str) -> Option<&str> {
        static SETS_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = SETS_REGEX.get_or_init(|| {
            Regex::new(r"(?i)\b(\d+(?:-\d+)?)\s+sets\b").expect("Invalid declared sets regex")
        });

        re.captures(header)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn is_set_count(text: &str) -> bool {
        static SET_COUNT_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = SET_COUNT_REGEX.get_or_init(|| {
            Regex::new(r"(?i)^\d+(?:-\d+)?\s+(?:working\s+)?sets?$")
                .expect("Invalid set count regex")
        });
        re.is_match(text)
    }
}
