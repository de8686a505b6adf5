use std::path::PathBuf;
use log::{debug, info};
use time::OffsetDateTime;
use crate::data::{NewNote, Note, NoteId, NoteUpdate};
use crate::record_store::RecordStore;
use crate::util::unix_millis;

mod errors;

pub use errors::NotesError;

pub struct NotesService {
    notes: RecordStore<Note>,
}

impl NotesService {
    pub fn new(notes_path: impl Into<PathBuf>) -> Self {
        NotesService {
            notes: RecordStore::new(notes_path),
        }
    }

    pub async fn list_notes(&self) -> Vec<Note> {
        self.notes.load_or_empty().await
    }

    pub async fn get_note(&self, id: NoteId) -> Result<Note, NotesError> {
        self.notes
            .load_or_empty()
            .await
            .into_iter()
            .find(|n| n.id == id)
            .ok_or(NotesError::NotFound(id))
    }

    pub async fn create_note(&self, new_note: NewNote) -> Result<Note, NotesError> {
        let now = unix_millis(OffsetDateTime::now_utc());
        let note = self.notes
            .update(move |notes| {
                let note = new_note.into_note(next_note_id(notes, now));
                notes.push(note.clone());
                Ok::<_, NotesError>(note)
            })
            .await?;
        info!("created note {}", note.id);
        Ok(note)
    }

    pub async fn update_note(
        &self,
        id: NoteId,
        update: NoteUpdate,
    ) -> Result<Note, NotesError> {
        let note = self.notes
            .update(move |notes| {
                let note = notes
                    .iter_mut()
                    .find(|n| n.id == id)
                    .ok_or(NotesError::NotFound(id))?;
                note.merge(update);
                Ok::<_, NotesError>(note.clone())
            })
            .await?;
        debug!("updated note {id}");
        Ok(note)
    }

    pub async fn delete_note(&self, id: NoteId) -> Result<(), NotesError> {
        self.notes
            .update(|notes| {
                let index = notes
                    .iter()
                    .position(|n| n.id == id)
                    .ok_or(NotesError::NotFound(id))?;
                notes.remove(index);
                Ok::<_, NotesError>(())
            })
            .await?;
        info!("deleted note {id}");
        Ok(())
    }
}

/// The creation time in milliseconds, unless an existing note already took
/// that id or a later one.
pub fn next_note_id(notes: &[Note], now_millis: i64) -> NoteId {
    notes
        .iter()
        .map(|n| n.id)
        .max()
        .map_or(now_millis, |max_id| now_millis.max(max_id.saturating_add(1)))
}
