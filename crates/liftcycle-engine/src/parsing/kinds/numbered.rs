use std::sync::OnceLock;

use regex::Regex;

use super::rest_note::RestNote;

/// An exercise written as one numbered line of narrative:
/// `1) DB ER on Knee; 8-10 reps/side` or `2. DB Pullover; 10-12 reps @30X0 - rest 30 sec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberedExercise {
    pub number: u32,
    pub name: String,
    /// Bare count or range when the prescription is `<reps> reps[/side]`,
    /// otherwise the prescription as written (`45-60 sec`, `30m`).
    pub reps: String,
    pub tempo: String,
    /// Rest given inline on the same line, if any.
    pub rest: String,
}

impl NumberedExercise {
    pub fn parse(line: &str) -> Option<Self> {
        static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = NUMBERED_REGEX.get_or_init(|| {
            Regex::new(r"^(\d+)[.)]\s+(\S.*)$").expect("Invalid numbered exercise regex")
        });

        let caps = re.captures(line)?;
        let number = caps.get(1)?.as_str().parse().ok()?;
        let body = caps.get(2)?.as_str().trim();

        let (name, prescription) = match body.split_once(';') {
            Some((name, prescription)) => (name.trim(), prescription.trim()),
            None => ("", body),
        };

        let (prescription, rest) =
            RestNote::split_inline(prescription).unwrap_or((prescription, ""));
        let (prescription, tempo) = split_tempo(prescription);

        let (name, reps) = if name.is_empty() {
            // No `;`: whatever is left is the name itself.
            (prescription, String::new())
        } else {
            (name.to_string(), bare_reps(prescription))
        };

        Some(Self {
            number,
            name,
            reps,
            tempo: tempo.to_string(),
            rest: rest.to_string(),
        })
    }
}

/// Removes an `@<tempo>` code, returning the remaining text and the code.
fn split_tempo(text: &str) -> (String, &str) {
    static TEMPO_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = TEMPO_REGEX
        .get_or_init(|| Regex::new(r"\s*@\s*([0-9Xx]{4})\b").expect("Invalid tempo regex"));

    match re.captures(text) {
        Some(caps) => {
            let (Some(whole), Some(code)) = (caps.get(0), caps.get(1)) else {
                return (text.to_string(), "");
            };
            let mut remaining = String::with_capacity(text.len());
            remaining.push_str(&text[..whole.start()]);
            remaining.push_str(&text[whole.end()..]);
            (remaining.trim().to_string(), code.as_str())
        }
        None => (text.to_string(), ""),
    }
}

fn bare_reps(prescription: String) -> String {
    static REPS_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REPS_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^(\d+(?:-\d+)?\+?)\s*reps(?:/side)?$").expect("Invalid reps regex")
    });

    match re.captures(&prescription).and_then(|caps| caps.get(1)) {
        Some(count) => count.as_str().to_string(),
        None => prescription,
    }
}
