use crate::parsing::{LineClass, Section, kinds::SetLine};

use super::types::SetSpec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetExtraction {
    pub sets: Vec<SetSpec>,
    /// Body line indices holding ladder lines, ascending.
    pub consumed: Vec<usize>,
}

/// Collects the warm-up and working set ladder of a section, in line order.
pub fn extract_sets(section: &Section) -> SetExtraction {
    let mut out = SetExtraction::default();

    for (idx, line) in section.body_lines.iter().enumerate() {
        let spec = match &line.class {
            LineClass::WarmupSet(set) => rung("Warm-up".to_string(), set),
            LineClass::WorkingSet { number, set } => rung(format!("Set {number}"), set),
            _ => continue,
        };
        out.sets.push(spec);
        out.consumed.push(idx);
    }

    out
}

fn rung(label: String, set: &SetLine) -> SetSpec {
    SetSpec {
        label,
        reps: set.reps.clone(),
        tempo: set.tempo.clone(),
        rpe: set.rpe(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_sections;
    use pretty_assertions::assert_eq;

    fn spec(label: &str, reps: &str, tempo: &str, rpe: &str) -> SetSpec {
        SetSpec {
            label: label.into(),
            reps: reps.into(),
            tempo: tempo.into(),
            rpe: rpe.into(),
        }
    }

    #[test]
    fn extracts_ladder_in_order() {
        let sections = parse_sections(
            "C) Lift\nWarm-Up Set - 10 reps @20X1 - Easy\nWorking Set 1 - 10 reps @20X1 - RPE 7\nWorking Set 2 - 8 reps @20X1 - RPE 8",
        );
        let x = extract_sets(&sections[0]);

        assert_eq!(
            x.sets,
            vec![
                spec("Warm-up", "10", "20X1", "Easy"),
                spec("Set 1", "10", "20X1", "7"),
                spec("Set 2", "8", "20X1", "8"),
            ]
        );
        assert_eq!(x.consumed, vec![0, 1, 2]);
    }

    #[test]
    fn prose_about_sets_is_left_alone() {
        let sections = parse_sections(
            "C) Strength Intensity 1 (14 min): Barbell Bench Press\nEvery 2:30 x 4 Working Sets\nWorking Set 3 - 6 @ 20X1 - RPE 9\nWorking Set 4 - Drop back to your Set 1 and perform Max UB reps @20X1 (Aim for 10+ reps)",
        );
        let x = extract_sets(&sections[0]);

        assert_eq!(x.sets, vec![spec("Set 3", "6", "20X1", "9")]);
        assert_eq!(x.consumed, vec![1]);
    }

    #[test]
    fn section_without_ladder_yields_nothing() {
        let sections = parse_sections("B) Warmup\n1) Bench Dips; 10-15 reps");
        assert_eq!(extract_sets(&sections[0]), SetExtraction::default());
    }
}
