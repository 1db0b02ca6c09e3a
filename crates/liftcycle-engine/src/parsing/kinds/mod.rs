mod header;
mod labeled;
mod numbered;
mod rest_note;
mod set_ladder;

pub use header::SectionHeader;
pub use labeled::{LabeledExercise, LabeledField};
pub use numbered::NumberedExercise;
pub use rest_note::RestNote;
pub use set_ladder::{SetLadder, SetLine};
