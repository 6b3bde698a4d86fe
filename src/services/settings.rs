//! Settings service
//!
//! Loads and saves the settings singleton through the record store. Missing,
//! corrupt, or out-of-range persisted settings silently collapse to the
//! defaults; out-of-range values are rejected on the write path so the decay
//! arithmetic can always trust what is on disk.

use crate::config::SETTINGS_KEY;
use crate::error::Result;
use crate::notes::Settings;
use crate::storage::RecordStore;

/// Service for managing application settings
#[derive(Clone)]
pub struct SettingsService {
    store: RecordStore,
}

impl SettingsService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Load settings, falling back to defaults for anything unusable
    pub async fn load(&self) -> Result<Settings> {
        let Some(raw) = self.store.read(SETTINGS_KEY).await? else {
            return Ok(Settings::default());
        };

        let settings = match serde_json::from_str::<Settings>(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Discarding unreadable settings record: {}", e);
                return Ok(Settings::default());
            }
        };

        if settings.validate().is_err() {
            tracing::warn!(
                "Stored deleteAfterDays {} is out of range, using defaults",
                settings.delete_after_days
            );
            return Ok(Settings::default());
        }

        Ok(settings)
    }

    /// Validate and persist settings wholesale
    pub async fn save(&self, settings: &Settings) -> Result<()> {
        settings.validate()?;

        let raw = serde_json::to_string(settings)?;
        self.store.write(SETTINGS_KEY, &raw).await?;

        tracing::info!("Settings saved: deleteAfterDays={}", settings.delete_after_days);

        Ok(())
    }
}
