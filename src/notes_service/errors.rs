use thiserror::Error;
use crate::data::NoteId;
use crate::record_store::RecordStoreError;

#[derive(Debug, Error)]
pub enum NotesError {
    #[error("note {0} not found")]
    NotFound(NoteId),

    #[error(transparent)]
    Store(#[from] RecordStoreError),
}
