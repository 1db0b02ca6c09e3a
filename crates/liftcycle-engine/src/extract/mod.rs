//! # Exercise Extraction
//!
//! Turns the classified body of a [`Section`](crate::parsing::Section) into
//! structured rows:
//!
//! - **`exercises`**: `ExerciseEntry` rows from the labeled (`Exercise:`) or the
//!   numbered (`1) name; reps @tempo`) convention
//! - **`sets`**: `SetSpec` rows from a warm-up / working set ladder
//!
//! Both report which body lines they decomposed so the renderer can keep every
//! other line as narrative.

pub mod exercises;
pub mod sets;
pub mod types;

pub use exercises::{ExerciseExtraction, ExerciseForm, extract_exercises};
pub use sets::{SetExtraction, extract_sets};
pub use types::{ExerciseEntry, SetSpec};
