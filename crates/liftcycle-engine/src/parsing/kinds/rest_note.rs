use std::sync::OnceLock;

use regex::Regex;

/// Pattern for a rest duration such as `30 sec`, `60-90 sec`, `2 min` or `1:30 min`.
pub(crate) const DURATION: &str = r"\d+(?::\d{2})?(?:\s*-\s*\d+(?::\d{2})?)?\s*(?:seconds|second|secs|sec|s|minutes|minute|mins|min|m)\b";

/// Pattern for the loop-back remark closing a superset, `and back to 1.`
pub(crate) const BACK_TO: &str = r"(?:\s+and\s+back\s+to\s+\d+)?\s*\.?";

pub struct RestNote;

impl RestNote {
    /// Returns the duration when the whole line is a rest note:
    /// `rest 30 sec`, `- rest 60-90 sec and back to 1.`
    pub fn duration(line: &str) -> Option<&str> {
        static REST_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REST_REGEX.get_or_init(|| {
            Regex::new(&format!(r"(?i)^(?:-\s*)?rest\s+({DURATION}){BACK_TO}$"))
                .expect("Invalid rest note regex")
        });

        re.captures(line).and_then(|caps| caps.get(1)).map(|m| m.as_str())
    }

    /// Splits a trailing ` - rest <duration>[ and back to N.]` off a prescription.
    ///
    /// Returns the prescription without the suffix and the duration, or `None`
    /// when the text carries no inline rest.
    pub fn split_inline(text: &str) -> Option<(&str, &str)> {
        static INLINE_REST_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = INLINE_REST_REGEX.get_or_init(|| {
            Regex::new(&format!(r"(?i)(?:^|\s*-\s*)rest\s+({DURATION}){BACK_TO}$"))
                .expect("Invalid inline rest regex")
        });

        let caps = re.captures(text)?;
        let whole = caps.get(0)?;
        let duration = caps.get(1)?;
        Some((text[..whole.start()].trim_end(), duration.as_str()))
    }
}
