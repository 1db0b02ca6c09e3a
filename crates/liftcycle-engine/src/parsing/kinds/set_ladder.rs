use std::sync::OnceLock;

use regex::Regex;

/// Reps on a ladder line: `10`, `10+`, `8-10`, `8/side`, `Max`, `Max UB`.
const LADDER_REPS: &str = r"\d+(?:-\d+)?\+?(?:/side)?|max(?:\s+ub)?";

/// Tempo code on a ladder line: `20X1`, `30x0`.
const LADDER_TEMPO: &str = r"[0-9Xx]+";

/// One rung of a set ladder, shared by the warm-up and working set lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetLine {
    pub reps: String,
    pub tempo: String,
    /// Free text after the trailing ` - `, e.g. `Easy`, `RPE 7`, `same weight`.
    pub note: String,
}

impl SetLine {
    /// The note as an RPE value: a leading `RPE ` token and any parenthetical
    /// remark are dropped, everything else is kept as written.
    pub fn rpe(&self) -> String {
        static PAREN_REGEX: OnceLock<Regex> = OnceLock::new();
        static RPE_PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
        let paren = PAREN_REGEX
            .get_or_init(|| Regex::new(r"\s*\([^)]*\)").expect("Invalid parenthetical regex"));
        let prefix = RPE_PREFIX_REGEX
            .get_or_init(|| Regex::new(r"(?i)^rpe\s+").expect("Invalid RPE prefix regex"));

        let without_remarks = paren.replace_all(&self.note, "");
        prefix.replace(without_remarks.trim(), "").trim().to_string()
    }

    fn from_captures(caps: &regex::Captures<'_>) -> Self {
        let text = |name: &str| caps.name(name).map_or("", |m| m.as_str()).to_string();
        Self {
            reps: text("reps"),
            tempo: text("tempo"),
            note: text("note"),
        }
    }
}

pub struct SetLadder;

impl SetLadder {
    /// `Warm-Up Set - 10 reps @20X1 - Easy`
    pub fn warmup(line: &str) -> Option<SetLine> {
        static WARMUP_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = WARMUP_REGEX.get_or_init(|| {
            Regex::new(&format!(
                r"(?i)^warm-?\s?up\s+set\s*-\s*{}$",
                Self::rung_pattern()
            ))
            .expect("Invalid warm-up set regex")
        });

        re.captures(line).map(|caps| SetLine::from_captures(&caps))
    }

    /// `Working Set 2 - 8 reps @20X1 - RPE 8`, returning the set number.
    pub fn working(line: &str) -> Option<(u32, SetLine)> {
        static WORKING_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = WORKING_REGEX.get_or_init(|| {
            Regex::new(&format!(
                r"(?i)^working\s+set\s+(?P<number>\d+)\s*-\s*{}$",
                Self::rung_pattern()
            ))
            .expect("Invalid working set regex")
        });

        let caps = re.captures(line)?;
        let number = caps.name("number")?.as_str().parse().ok()?;
        Some((number, SetLine::from_captures(&caps)))
    }

    fn rung_pattern() -> String {
        format!(
            r"(?P<reps>{LADDER_REPS})(?:\s+reps)?(?:\s*@\s*(?P<tempo>{LADDER_TEMPO}))?(?:\s*-\s*(?P<note>.*?))?\s*"
        )
    }
}
