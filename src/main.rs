// vanishing-notes - note-taking core with gradual expiry
// Inspection binary: opens the store (sweeping expired notes) and prints
// what a note list render would show.

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vanishing_notes::config::SNIPPET_MAX_LINES;
use vanishing_notes::notes::{fade_level, format_last_accessed, now_ms, opacity, summarize};
use vanishing_notes::services::NotesService;
use vanishing_notes::storage::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vanishing_notes=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = std::env::var_os("VANISHING_NOTES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("vanishing-notes-data"));

    tracing::info!("Opening note store at {:?}", data_dir);

    let store = RecordStore::new(data_dir);
    store.initialize().await?;

    // Opening runs migration and the load-time expiry sweep
    let service = NotesService::open(store).await?;
    let settings = service.settings();
    let notes = service.notes();

    println!(
        "{} note(s), retention window {} day(s)",
        notes.len(),
        settings.delete_after_days
    );

    let now = now_ms();
    for note in &notes {
        let fade = fade_level(note, settings, now);
        let title = if note.title.is_empty() {
            "(untitled)"
        } else {
            note.title.as_str()
        };

        println!(
            "\n{}  [{}]  fade {:.2}  opacity {:.2}",
            title,
            format_last_accessed(note.last_accessed, now),
            fade,
            opacity(fade)
        );

        let snippet = summarize(&note.body, SNIPPET_MAX_LINES);
        if !snippet.is_empty() {
            println!("{}", snippet);
        }
    }

    Ok(())
}
