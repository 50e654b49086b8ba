// src/application/flashcard_lister.rs
use crate::application::NoteRepository;
use crate::domain::{Deck, DomainError, Flashcard};

pub struct FlashcardLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> FlashcardLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Flashcards of a note in the order they were generated.
    pub fn list_flashcards(&mut self, note_id: i64) -> Result<Vec<Flashcard>, DomainError> {
        // distinguishes "no such note" from "note without cards"
        self.repository.get_note(note_id)?;
        self.repository.list_flashcards(note_id)
    }

    pub fn list_decks(&mut self) -> Result<Vec<Deck>, DomainError> {
        self.repository.list_decks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockNoteRepository;

    fn repository() -> MockNoteRepository {
        MockNoteRepository::builder()
            .with_note(1, "Chemistry", "H2O: water")
            .with_note(2, "Empty deck", "nothing yet")
            .with_note(3, "History", "1789 - revolution")
            .with_flashcard(1, "H2O", "water")
            .with_flashcard(3, "1789", "revolution")
            .with_flashcard(3, "1815", "Waterloo")
            .build()
    }

    #[test]
    fn given_note_with_cards_when_listing_then_returns_them_in_order() {
        let mut lister = FlashcardLister::new(repository());

        let cards = lister.list_flashcards(3).unwrap();

        let fronts: Vec<&str> = cards.iter().map(|c| c.front.as_str()).collect();
        assert_eq!(fronts, vec!["1789", "1815"]);
    }

    #[test]
    fn given_missing_note_when_listing_cards_then_returns_not_found() {
        let mut lister = FlashcardLister::new(repository());

        let result = lister.list_flashcards(9);

        assert!(matches!(result, Err(DomainError::NoteNotFound(9))));
    }

    #[test]
    fn given_notes_when_listing_decks_then_skips_notes_without_cards() {
        // Arrange
        let mut lister = FlashcardLister::new(repository());

        // Act
        let decks = lister.list_decks().unwrap();

        // Assert
        assert_eq!(
            decks,
            vec![
                Deck {
                    note_id: 1,
                    title: "Chemistry".to_string(),
                    card_count: 1,
                },
                Deck {
                    note_id: 3,
                    title: "History".to_string(),
                    card_count: 2,
                },
            ]
        );
    }
}
