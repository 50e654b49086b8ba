// src/application/flashcard_creator.rs
use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::application::NoteRepository;
use crate::domain::{generate_flashcards, DomainError, Flashcard};

/// Regenerates the flashcards of a note from its current content.
pub struct FlashcardCreator<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> FlashcardCreator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Replace all flashcards of `note_id` with freshly generated ones.
    ///
    /// Previous flashcards are removed even when the note yields no new cards,
    /// in which case `DomainError::NoFlashcards` is returned. Clearing and
    /// inserting are two store calls, not one transaction.
    #[instrument(level = "debug", skip(self))]
    pub fn create_flashcards(&mut self, note_id: i64) -> Result<Vec<Flashcard>, DomainError> {
        let note = self.repository.get_note(note_id)?;

        let removed = self.repository.delete_flashcards(note_id)?;
        debug!(note_id, removed, "Removed previous flashcards");

        let drafts = generate_flashcards(&note.content, note.id);
        if drafts.is_empty() {
            return Err(DomainError::NoFlashcards(note_id));
        }

        let cards = self.repository.add_flashcards(&drafts, Utc::now())?;
        info!(note_id, generated = cards.len(), "Generated flashcards");
        Ok(cards)
    }
}
