// src/application/repository.rs
use chrono::{DateTime, Utc};

use crate::domain::{Deck, DomainError, Flashcard, FlashcardDraft, Note};

/// Persistence port for notes and their flashcards.
///
/// Implementations assign ids; callers supply timestamps.
pub trait NoteRepository {
    fn insert_note(
        &mut self,
        title: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Note, DomainError>;

    fn update_note(&mut self, id: i64, title: &str, content: &str) -> Result<Note, DomainError>;

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError>;

    /// Newest first. With a search term, only notes whose title or content
    /// starts with it (case-insensitive).
    fn list_notes(&mut self, search_query: Option<&str>) -> Result<Vec<Note>, DomainError>;

    /// Delete a note and all of its flashcards
    /// Returns the number of flashcards deleted
    fn delete_note(&mut self, id: i64) -> Result<usize, DomainError>;

    /// Remove every flashcard of `note_id`, returning how many were removed.
    ///
    /// Runs separately from `add_flashcards`: regeneration clears first and
    /// inserts afterwards, so a failed insert leaves the note without cards.
    fn delete_flashcards(&mut self, note_id: i64) -> Result<usize, DomainError>;

    /// Store drafts in order, all stamped with `created_at`.
    fn add_flashcards(
        &mut self,
        drafts: &[FlashcardDraft],
        created_at: DateTime<Utc>,
    ) -> Result<Vec<Flashcard>, DomainError>;

    fn list_flashcards(&mut self, note_id: i64) -> Result<Vec<Flashcard>, DomainError>;

    fn list_decks(&mut self) -> Result<Vec<Deck>, DomainError>;
}
