// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Note content is empty")]
    EmptyNote,
    #[error("Could not generate any flashcards from note {0}")]
    NoFlashcards(i64),
    #[error("Store error: {0}")]
    StoreError(String),
}

