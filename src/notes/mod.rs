//! Note domain module
//!
//! Models, the decay engine, the expiry sweeper, schema migration, and the
//! snippet summarizer. Everything here is pure: wall-clock time is sampled
//! by callers and passed in.

pub mod decay;
pub mod migration;
pub mod models;
pub mod snippet;
pub mod sweep;

pub use decay::{fade_level, opacity};
pub use migration::{normalize, RawNoteRecord};
pub use models::{Note, NoteUpdate, Settings};
pub use snippet::summarize;
pub use sweep::sweep;

use chrono::Utc;

/// Current wall-clock time in epoch milliseconds
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Display projection of a collection: most recently accessed first.
/// Storage order (insertion order) is left untouched.
pub fn display_order(notes: &[Note]) -> Vec<Note> {
    let mut sorted = notes.to_vec();
    sorted.sort_by(|a, b| b.last_accessed.cmp(&a.last_accessed));
    sorted
}

/// Human-readable age of a note's last access ("Just now", "5m ago", ...)
pub fn format_last_accessed(timestamp: i64, now_ms: i64) -> String {
    let diff = now_ms - timestamp;
    let minutes = diff / 60_000;
    let hours = diff / 3_600_000;
    let days = diff / 86_400_000;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", days)
    }
}
