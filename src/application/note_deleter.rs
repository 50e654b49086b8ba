// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::DomainError;
use tracing::info;

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note and return the number of flashcards that were deleted
    pub fn delete_note(&mut self, note_id: i64) -> Result<usize, DomainError> {
        let deleted_cards = self.repository.delete_note(note_id)?;
        info!(note_id, deleted_cards, "Deleted note");
        Ok(deleted_cards)
    }
}
