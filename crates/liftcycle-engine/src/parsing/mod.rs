//! # Workout Text Parsing
//!
//! Two-phase parsing of one day's raw workout text into lettered sections.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is trimmed and tagged with the
//!    single grammar production it belongs to (`LineClass`)
//!
//! 2. **Segmentation** (`builder`): a `SectionBuilder` opens a `Section` on every
//!    `A)`..`G)` header line and collects the classified lines that follow it
//!
//! ## Modules
//!
//! - **`kinds`**: one type per grammar production, each owning its pattern
//! - **`classify`**: `WorkoutLineClassifier` produces a `ClassifiedLine` per input line
//! - **`builder`**: `SectionBuilder` state machine for section construction
//! - **`types`**: the `Section` type
//!
//! ## Key Invariants
//!
//! - Sections come out in input order; a body never contains a header line
//! - Text before the first header belongs to no section
//! - Blank lines and `---` separators become at most one paragraph-break placeholder

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::SectionBuilder;
pub use classify::{ClassifiedLine, LineClass, WorkoutLineClassifier};
pub use types::Section;

/// Splits raw workout text into its lettered sections.
///
/// Text without any header line yields no sections.
pub fn parse_sections(raw: &str) -> Vec<Section> {
    let classifier = WorkoutLineClassifier;
    let mut builder = SectionBuilder::new();

    for line in raw.lines() {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}
