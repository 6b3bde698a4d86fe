//! Services module
//!
//! Business logic services coordinating the note domain with the record
//! store.

pub mod notes;
pub mod settings;

pub use notes::NotesService;
pub use settings::SettingsService;
