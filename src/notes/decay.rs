//! Decay engine
//!
//! Pure functions mapping a note's age to its visual fade fraction. There is
//! no background timer: callers sample the clock at render time and pass it
//! in, so decay is recomputed lazily on every query.

use crate::config::{FADE_CEILING, FADE_OPACITY_FACTOR};
use crate::notes::models::{Note, Settings};

/// Fade fraction for a note at wall-clock time `now_ms`.
///
/// Returns `age / max_age` clamped to `[0, 0.8]`, where age is the time since
/// the note was last accessed. The 0.8 ceiling keeps a nearly expired note
/// faintly visible rather than fully transparent but still present.
pub fn fade_level(note: &Note, settings: &Settings, now_ms: i64) -> f64 {
    let age = now_ms - note.last_accessed;
    let max_age = settings.max_age_ms();

    (age as f64 / max_age as f64).clamp(0.0, FADE_CEILING)
}

/// Rendered opacity derived from a fade fraction: `1 - fade_level * 0.7`
pub fn opacity(fade_level: f64) -> f64 {
    1.0 - fade_level * FADE_OPACITY_FACTOR
}
