// src/domain/mod.rs
pub mod error;
pub mod flashcard;
pub mod generator;
pub mod note;

pub use error::DomainError;
pub use flashcard::{Deck, Flashcard, FlashcardDraft};
pub use generator::{generate_flashcards, Separator};
pub use note::Note;
