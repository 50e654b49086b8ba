// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List all notes, or filter by search query
    ///
    /// # Arguments
    /// * `search_query` - Optional prefix matched against title and content;
    ///   blank queries list everything
    ///
    /// # Returns
    /// Vector of notes matching the criteria, newest first
    pub fn list_notes(&mut self, search_query: Option<&str>) -> Result<Vec<Note>, DomainError> {
        let query = search_query.map(str::trim).filter(|q| !q.is_empty());
        self.repository.list_notes(query)
    }
}
