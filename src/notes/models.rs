//! Note and settings models
//!
//! Rust structs representing persisted entities. Wire field names are
//! camelCase to stay compatible with collections written by earlier
//! releases of the product.

use crate::config::{DEFAULT_DELETE_AFTER_DAYS, MAX_DELETE_AFTER_DAYS, MIN_DELETE_AFTER_DAYS, MS_PER_DAY};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// A single note. Timestamps are epoch milliseconds.
///
/// Invariants: `created <= last_accessed` and `created <= last_edited`.
/// `created` is immutable after creation; `last_accessed` advances on every
/// open, view, or save; `last_edited` advances only when a save actually
/// changes `title` or `body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    /// Lightweight markdown; previews are derived via the snippet module
    pub body: String,
    pub created: i64,
    pub last_accessed: i64,
    pub last_edited: i64,
}

impl Note {
    /// Create a fresh note with empty content, all timestamps set to `now_ms`
    pub fn new(now_ms: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: String::new(),
            body: String::new(),
            created: now_ms,
            last_accessed: now_ms,
            last_edited: now_ms,
        }
    }
}

/// Partial update applied to a note by a save operation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Application settings singleton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Retention window: days a note may go unaccessed before deletion
    #[serde(default = "default_delete_after_days")]
    pub delete_after_days: u32,
}

fn default_delete_after_days() -> u32 {
    DEFAULT_DELETE_AFTER_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delete_after_days: DEFAULT_DELETE_AFTER_DAYS,
        }
    }
}

impl Settings {
    /// Check the retention window against the accepted 1-365 day range.
    ///
    /// An out-of-range value is a configuration error: a non-positive window
    /// would break the decay arithmetic, so it must never be persisted.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_DELETE_AFTER_DAYS..=MAX_DELETE_AFTER_DAYS).contains(&self.delete_after_days) {
            return Err(AppError::InvalidSettings(format!(
                "deleteAfterDays must be between {} and {}, got {}",
                MIN_DELETE_AFTER_DAYS, MAX_DELETE_AFTER_DAYS, self.delete_after_days
            )));
        }
        Ok(())
    }

    /// Retention window length in milliseconds
    pub fn max_age_ms(&self) -> i64 {
        i64::from(self.delete_after_days) * MS_PER_DAY
    }
}
