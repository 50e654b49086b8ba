// src/application/note_viewer.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_note(&mut self, note_id: i64) -> Result<Note, DomainError> {
        self.repository.get_note(note_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockNoteRepository;

    #[test]
    fn given_existing_note_when_viewing_then_returns_note() {
        // Arrange
        let mock = MockNoteRepository::builder()
            .with_note(42, "Cells", "Cell: basic unit of life")
            .build();
        let mut viewer = NoteViewer::new(mock);

        // Act
        let note = viewer.view_note(42).expect("Note should exist");

        // Assert
        assert_eq!(note.id, 42);
        assert_eq!(note.title, "Cells");
    }

    #[test]
    fn given_missing_note_when_viewing_then_returns_not_found() {
        let mut viewer = NoteViewer::new(MockNoteRepository::builder().build());

        let result = viewer.view_note(7);

        assert!(matches!(result, Err(DomainError::NoteNotFound(7))));
    }
}
