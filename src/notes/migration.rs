//! Schema migration for persisted note records
//!
//! Collections written by earlier releases may lack fields added later
//! (historically `lastEdited`). Records are decoded into a tolerant raw shape
//! and normalized field by field; anything unrecoverable at the collection
//! level is handled by the caller falling back to an empty collection.

use crate::notes::models::Note;
use serde::Deserialize;

/// A note record as found in storage, tolerant of missing fields
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNoteRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub created: i64,
    #[serde(default)]
    pub last_accessed: Option<i64>,
    #[serde(default)]
    pub last_edited: Option<i64>,
}

/// Normalize a raw record to the current schema.
///
/// Fallback chain for a missing `lastEdited`: `lastAccessed` if present, else
/// `created`. A missing `lastAccessed` falls back to `created`. Timestamps
/// older than `created` are clamped up to it to restore the note invariant.
pub fn normalize(raw: RawNoteRecord) -> Note {
    let last_accessed = raw.last_accessed.unwrap_or(raw.created).max(raw.created);
    let last_edited = raw
        .last_edited
        .or(raw.last_accessed)
        .unwrap_or(raw.created)
        .max(raw.created);

    Note {
        id: raw.id,
        title: raw.title,
        body: raw.body,
        created: raw.created,
        last_accessed,
        last_edited,
    }
}
