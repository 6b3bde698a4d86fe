//! Application configuration constants
//!
//! Central location for all configuration constants, resource limits,
//! and validation boundaries used throughout the application.

// ===== Persisted State Keys =====

/// Record store key holding the serialized note collection
pub const NOTES_KEY: &str = "vanishing-notes";

/// Record store key holding the serialized settings singleton
pub const SETTINGS_KEY: &str = "vanishing-notes-settings";

// ===== Retention Settings Limits =====

/// Default retention window in days
pub const DEFAULT_DELETE_AFTER_DAYS: u32 = 30;

/// Minimum retention window in days. A zero or negative window would make
/// the decay arithmetic divide by a non-positive max age.
pub const MIN_DELETE_AFTER_DAYS: u32 = 1;

/// Maximum retention window in days (1 year)
pub const MAX_DELETE_AFTER_DAYS: u32 = 365;

// ===== Decay Parameters =====

/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Ceiling on the fade fraction. Notes stop fading at 0.8 rather than 1.0
/// so a note nearing expiry stays visible instead of silently lingering
/// fully transparent.
pub const FADE_CEILING: f64 = 0.8;

/// How strongly the fade fraction reduces rendered opacity:
/// opacity = 1 - fade_level * FADE_OPACITY_FACTOR
pub const FADE_OPACITY_FACTOR: f64 = 0.7;

// ===== Snippet Limits =====

/// Default number of non-empty lines kept in a note preview
pub const SNIPPET_MAX_LINES: usize = 3;
