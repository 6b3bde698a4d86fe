//! Expiry sweeper
//!
//! Filters a note collection down to the notes that are still inside the
//! retention window. Run once per collection load; the caller is responsible
//! for noticing a cardinality change and rewriting persisted state.

use crate::notes::models::{Note, Settings};

/// Remove expired notes, keeping those with `now - last_accessed < max_age`.
///
/// The comparison is strict: a note sitting exactly on the retention boundary
/// is already expired. Idempotent for a fixed `now_ms` and settings.
pub fn sweep(notes: Vec<Note>, settings: &Settings, now_ms: i64) -> Vec<Note> {
    let max_age = settings.max_age_ms();

    notes
        .into_iter()
        .filter(|note| now_ms - note.last_accessed < max_age)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MS_PER_DAY;

    fn note_accessed_at(last_accessed: i64) -> Note {
        let mut note = Note::new(0);
        note.last_accessed = last_accessed;
        note
    }

    fn one_day() -> Settings {
        Settings {
            delete_after_days: 1,
        }
    }

    #[test]
    fn test_note_on_exact_boundary_is_expired() {
        let notes = vec![note_accessed_at(0)];
        let survivors = sweep(notes, &one_day(), MS_PER_DAY);
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_note_one_ms_inside_boundary_survives() {
        let notes = vec![note_accessed_at(0)];
        let survivors = sweep(notes, &one_day(), MS_PER_DAY - 1);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn test_only_expired_notes_are_removed() {
        let notes = vec![
            note_accessed_at(0),
            note_accessed_at(MS_PER_DAY / 2),
            note_accessed_at(MS_PER_DAY),
        ];

        let survivors = sweep(notes, &one_day(), MS_PER_DAY + 1);

        assert_eq!(survivors.len(), 2);
        assert_eq!(survivors[0].last_accessed, MS_PER_DAY / 2);
        assert_eq!(survivors[1].last_accessed, MS_PER_DAY);
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let notes = vec![
            note_accessed_at(0),
            note_accessed_at(MS_PER_DAY / 2),
            note_accessed_at(MS_PER_DAY - 1),
        ];
        let now = MS_PER_DAY;

        let once = sweep(notes, &one_day(), now);
        let twice = sweep(once.clone(), &one_day(), now);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_collection() {
        assert!(sweep(Vec::new(), &one_day(), MS_PER_DAY).is_empty());
    }
}
