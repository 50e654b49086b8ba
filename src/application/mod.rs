// src/application/mod.rs
pub mod flashcard_creator;
pub mod flashcard_lister;
pub mod note_creator;
pub mod note_deleter;
pub mod note_editor;
pub mod note_lister;
pub mod note_viewer;
pub mod repository;

pub use flashcard_creator::FlashcardCreator;
pub use flashcard_lister::FlashcardLister;
pub use note_creator::NoteCreator;
pub use note_deleter::NoteDeleter;
pub use note_editor::NoteEditor;
pub use note_lister::NoteLister;
pub use note_viewer::NoteViewer;
pub use repository::NoteRepository;
