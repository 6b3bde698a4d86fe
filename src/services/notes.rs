//! Notes service
//!
//! The note lifecycle manager. Owns the in-memory collection and the
//! settings singleton, stamps timestamps on every operation, and persists
//! the whole collection through the record store after each mutation.
//! Unknown note ids are silent no-ops throughout; a stale UI action (say,
//! deleting a note twice) is an acceptable outcome, not an error.

use crate::config::NOTES_KEY;
use crate::error::Result;
use crate::notes::{
    display_order, normalize, now_ms, sweep, Note, NoteUpdate, RawNoteRecord, Settings,
};
use crate::services::SettingsService;
use crate::storage::RecordStore;

/// Service for managing the note collection
pub struct NotesService {
    store: RecordStore,
    settings_service: SettingsService,
    settings: Settings,
    notes: Vec<Note>,
}

impl NotesService {
    /// Open the collection: load settings, load and migrate every record,
    /// then sweep expired notes. If the sweep removed anything the reduced
    /// collection is persisted immediately.
    pub async fn open(store: RecordStore) -> Result<Self> {
        let settings_service = SettingsService::new(store.clone());
        let settings = settings_service.load().await?;
        let notes = load_collection(&store).await?;

        let mut service = Self {
            store,
            settings_service,
            settings,
            notes,
        };
        service.sweep_in_place().await?;

        Ok(service)
    }

    /// Create a new empty note, prepended to the collection
    pub async fn create(&mut self) -> Result<Note> {
        let note = Note::new(now_ms());
        tracing::info!("Creating new note: {}", note.id);

        self.notes.insert(0, note.clone());
        self.persist_notes().await?;

        Ok(note)
    }

    /// Record that a note was opened or viewed, resetting its expiry clock
    pub async fn access(&mut self, id: &str) -> Result<()> {
        let now = now_ms();

        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            tracing::debug!("access: note {} not found, ignoring", id);
            return Ok(());
        };

        note.last_accessed = now;
        self.persist_notes().await
    }

    /// Save changes to a note. `last_accessed` always advances; `last_edited`
    /// advances only when the title or body actually changed.
    pub async fn update(&mut self, id: &str, update: NoteUpdate) -> Result<()> {
        let now = now_ms();

        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            tracing::debug!("update: note {} not found, ignoring", id);
            return Ok(());
        };

        let mut edited = false;
        if let Some(title) = update.title {
            if title != note.title {
                note.title = title;
                edited = true;
            }
        }
        if let Some(body) = update.body {
            if body != note.body {
                note.body = body;
                edited = true;
            }
        }

        note.last_accessed = now;
        if edited {
            note.last_edited = now;
        }

        tracing::debug!("Updated note {} (edited: {})", id, edited);
        self.persist_notes().await
    }

    /// Remove a note from the collection
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);

        if self.notes.len() == before {
            tracing::debug!("delete: note {} not found, ignoring", id);
            return Ok(());
        }

        tracing::info!("Deleted note: {}", id);
        self.persist_notes().await
    }

    /// Replace settings wholesale. The new retention window takes effect
    /// immediately: the collection is re-swept under it.
    pub async fn update_settings(&mut self, settings: Settings) -> Result<()> {
        self.settings_service.save(&settings).await?;
        self.settings = settings;
        self.sweep_in_place().await
    }

    /// Display projection of the collection, most recently accessed first
    pub fn notes(&self) -> Vec<Note> {
        display_order(&self.notes)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Sweep expired notes and persist iff the collection shrank
    async fn sweep_in_place(&mut self) -> Result<()> {
        let before = self.notes.len();
        self.notes = sweep(std::mem::take(&mut self.notes), &self.settings, now_ms());

        if self.notes.len() != before {
            tracing::info!("Swept {} expired note(s)", before - self.notes.len());
            self.persist_notes().await?;
        }

        Ok(())
    }

    /// Write the whole collection back to the record store
    async fn persist_notes(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.notes)?;
        self.store.write(NOTES_KEY, &raw).await
    }
}

/// Load and migrate the persisted collection. Malformed JSON or a wrong
/// shape collapses the whole load to an empty collection: total data loss is
/// preferred over corrupt partial state, and it is not an error.
async fn load_collection(store: &RecordStore) -> Result<Vec<Note>> {
    let Some(raw) = store.read(NOTES_KEY).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<RawNoteRecord>>(&raw) {
        Ok(records) => Ok(records.into_iter().map(normalize).collect()),
        Err(e) => {
            tracing::warn!("Discarding unreadable note collection: {}", e);
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    async fn create_test_service() -> (NotesService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();

        let service = NotesService::open(store).await.unwrap();
        (service, temp_dir)
    }

    #[tokio::test]
    async fn test_create_note_defaults() {
        let (mut service, _temp) = create_test_service().await;

        let note = service.create().await.unwrap();

        assert!(!note.id.is_empty());
        assert!(note.title.is_empty());
        assert!(note.body.is_empty());
        assert_eq!(note.created, note.last_accessed);
        assert_eq!(note.created, note.last_edited);
    }

    #[tokio::test]
    async fn test_create_prepends() {
        let (mut service, _temp) = create_test_service().await;

        let first = service.create().await.unwrap();
        let second = service.create().await.unwrap();

        let ids: Vec<String> = service.notes().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_update_changes_content_and_both_timestamps() {
        let (mut service, _temp) = create_test_service().await;
        let note = service.create().await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;

        service
            .update(
                &note.id,
                NoteUpdate {
                    title: Some("Groceries".to_string()),
                    body: Some("- milk".to_string()),
                },
            )
            .await
            .unwrap();

        let updated = service.notes().into_iter().next().unwrap();
        assert_eq!(updated.title, "Groceries");
        assert_eq!(updated.body, "- milk");
        assert!(updated.last_accessed > note.last_accessed);
        assert!(updated.last_edited > note.last_edited);
        assert_eq!(updated.created, note.created);
    }

    #[tokio::test]
    async fn test_update_with_unchanged_content_only_touches_access() {
        let (mut service, _temp) = create_test_service().await;
        let note = service.create().await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;

        service
            .update(
                &note.id,
                NoteUpdate {
                    title: Some(String::new()),
                    body: Some(String::new()),
                },
            )
            .await
            .unwrap();

        let updated = service.notes().into_iter().next().unwrap();
        assert!(updated.last_accessed > note.last_accessed);
        assert_eq!(updated.last_edited, note.last_edited);
    }

    #[tokio::test]
    async fn test_access_touches_only_last_accessed() {
        let (mut service, _temp) = create_test_service().await;
        let note = service.create().await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;

        service.access(&note.id).await.unwrap();

        let touched = service.notes().into_iter().next().unwrap();
        assert!(touched.last_accessed > note.last_accessed);
        assert_eq!(touched.last_edited, note.last_edited);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_silent_noops() {
        let (mut service, _temp) = create_test_service().await;
        service.create().await.unwrap();

        service.access("missing").await.unwrap();
        service.delete("missing").await.unwrap();
        service
            .update("missing", NoteUpdate::default())
            .await
            .unwrap();

        assert_eq!(service.notes().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();

        let mut service = NotesService::open(store.clone()).await.unwrap();
        let keep = service.create().await.unwrap();
        let gone = service.create().await.unwrap();

        service.delete(&gone.id).await.unwrap();
        assert_eq!(service.notes().len(), 1);

        // A fresh service sees the reduced collection
        let reopened = NotesService::open(store).await.unwrap();
        let ids: Vec<String> = reopened.notes().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![keep.id]);
    }

    #[tokio::test]
    async fn test_display_order_follows_last_accessed() {
        let (mut service, _temp) = create_test_service().await;

        let a = service.create().await.unwrap();
        let b = service.create().await.unwrap();
        let _c = service.create().await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        service.access(&a.id).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        service.access(&b.id).await.unwrap();

        let ids: Vec<String> = service.notes().into_iter().map(|n| n.id).collect();
        assert_eq!(ids[0], b.id);
        assert_eq!(ids[1], a.id);
    }

    #[tokio::test]
    async fn test_update_settings_rejects_out_of_range() {
        let (mut service, _temp) = create_test_service().await;

        let result = service
            .update_settings(Settings {
                delete_after_days: 400,
            })
            .await;

        assert!(result.is_err());
        assert_eq!(service.settings().delete_after_days, 30);
    }

    #[tokio::test]
    async fn test_update_settings_applies_and_resweeps() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();

        // Seed a note last accessed eight days ago
        let now = now_ms();
        let stale = format!(
            r#"[{{"id":"old","title":"","body":"","created":{0},"lastAccessed":{0},"lastEdited":{0}}}]"#,
            now - 8 * 86_400_000
        );
        store.write(NOTES_KEY, &stale).await.unwrap();

        let mut service = NotesService::open(store).await.unwrap();
        assert_eq!(service.notes().len(), 1);

        // Shrinking the window below the note's age expires it immediately
        service
            .update_settings(Settings {
                delete_after_days: 7,
            })
            .await
            .unwrap();

        assert_eq!(service.settings().delete_after_days, 7);
        assert!(service.notes().is_empty());
    }
}
