// src/application/note_creator.rs
use chrono::Utc;
use tracing::{debug, info};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

/// Stores captured text as a new note.
pub struct NoteCreator<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteCreator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a note from `content`. Without an explicit title, the title is
    /// derived from the first line of the content.
    pub fn create_note(&mut self, content: &str, title: Option<&str>) -> Result<Note, DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::EmptyNote);
        }

        let title = match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => title.to_string(),
            None => Note::title_from_content(content),
        };
        debug!(%title, "Creating note");

        let note = self.repository.insert_note(&title, content, Utc::now())?;
        info!(note_id = note.id, "Created note");
        Ok(note)
    }
}
