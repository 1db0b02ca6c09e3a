pub mod content;
pub mod cycle;
pub mod export;
pub mod extract;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use content::{ContentStore, MissingContent, StoreError, WorkoutStore, workout_for};
pub use cycle::{CyclePosition, DEFAULT_CYCLE_START};
pub use export::{coming_soon, export_file_name, export_text};
pub use parsing::{Section, parse_sections};
pub use render::{Block, Document, Table, render_document_as_plain_markup, render_sections};

/// Formats one day's raw workout text into a structured document.
///
/// Never fails: text that matches no convention is carried through as narrative.
pub fn format_workout(raw: &str) -> Document {
    let sections = parse_sections(raw);
    log::debug!("formatting workout with {} sections", sections.len());
    render_sections(&sections)
}
