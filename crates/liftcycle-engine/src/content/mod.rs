//! Workout content lookup.
//!
//! The formatter never sees week/day numbering; callers resolve a
//! [`CyclePosition`] to raw text through a [`ContentStore`] first.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cycle::CyclePosition;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read workout content at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse workout content at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid workout content: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid {kind} key {key:?}: expected a number from 1 to 255")]
    InvalidKey { kind: &'static str, key: String },
}

/// No usable workout text is stored for this position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No workout available for week {week}, day {day}")]
pub struct MissingContent {
    pub week: u8,
    pub day: u8,
}

/// Source of raw workout text keyed by cycle week and day.
///
/// Out-of-range keys are simply absent.
pub trait ContentStore {
    fn lookup(&self, week: u8, day: u8) -> Option<&str>;
}

/// Resolves the text for `position`, treating empty or placeholder text
/// (`[Week 2 - Day 1 content]`) as missing.
pub fn workout_for<S: ContentStore + ?Sized>(
    store: &S,
    position: CyclePosition,
) -> Result<&str, MissingContent> {
    let missing = MissingContent {
        week: position.week,
        day: position.day,
    };
    match store.lookup(position.week, position.day) {
        Some(text) if !is_placeholder(text) => Ok(text),
        Some(_) => {
            log::debug!("week {} day {} holds placeholder text", position.week, position.day);
            Err(missing)
        }
        None => Err(missing),
    }
}

fn is_placeholder(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || (text.starts_with('[') && text.ends_with(']'))
}

/// In-memory store, usually loaded from the nested JSON document
/// `{"1": {"1": "...", "2": "..."}, "2": {...}}` (week, then day).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutStore {
    entries: BTreeMap<(u8, u8), String>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, week: u8, day: u8, text: impl Into<String>) {
        self.entries.insert((week, day), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let nested: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)?;

        let mut store = Self::new();
        for (week_key, days) in nested {
            let week = parse_key("week", &week_key)?;
            for (day_key, text) in days {
                let day = parse_key("day", &day_key)?;
                store.insert(week, day, text);
            }
        }
        Ok(store)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json_str(&json).map_err(|e| match e {
            StoreError::Json(source) => StoreError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        if store.is_empty() {
            log::warn!("no workouts found in {}", path.display());
        } else {
            log::debug!("loaded {} workouts from {}", store.len(), path.display());
        }
        Ok(store)
    }
}

impl ContentStore for WorkoutStore {
    fn lookup(&self, week: u8, day: u8) -> Option<&str> {
        self.entries.get(&(week, day)).map(String::as_str)
    }
}

fn parse_key(kind: &'static str, key: &str) -> Result<u8, StoreError> {
    key.trim()
        .parse::<u8>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| StoreError::InvalidKey {
            kind,
            key: key.to_string(),
        })
}
