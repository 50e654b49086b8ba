// src/application/note_editor.rs
use tracing::info;

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteEditor<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteEditor<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Replace the title and/or content of a note; `None` or a blank title
    /// keeps the stored value.
    ///
    /// Existing flashcards are left untouched until they are regenerated.
    pub fn edit_note(
        &mut self,
        note_id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Note, DomainError> {
        let current = self.repository.get_note(note_id)?;

        if content.is_some_and(|c| c.trim().is_empty()) {
            return Err(DomainError::EmptyNote);
        }
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(&current.title);
        let content = content.unwrap_or(&current.content);

        let note = self.repository.update_note(note_id, title, content)?;
        info!(note_id, "Updated note");
        Ok(note)
    }
}
