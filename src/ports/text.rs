// src/ports/text.rs
use crate::domain::{Deck, Flashcard, Note};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders domain objects for the terminal.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_note(&self, note: &Note) -> String {
        format!(
            "# {} (id {})\ncreated: {}\n\n{}\n",
            note.title,
            note.id,
            note.created_at.format(DATE_FORMAT),
            note.content.trim_end()
        )
    }

    /// One line per note: id, creation date, title.
    pub fn render_note_list(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No notes found.\n".to_string();
        }
        notes
            .iter()
            .map(|note| {
                format!(
                    "{}\t{}\t{}\n",
                    note.id,
                    note.created_at.format(DATE_FORMAT),
                    note.title
                )
            })
            .collect()
    }

    pub fn render_flashcards(&self, cards: &[Flashcard]) -> String {
        if cards.is_empty() {
            return "No flashcards. Run `snapnotes generate <NOTE_ID>` first.\n".to_string();
        }
        let total = cards.len();
        cards
            .iter()
            .enumerate()
            .map(|(idx, card)| {
                format!(
                    "[{}/{}] Q: {}\n      A: {}\n",
                    idx + 1,
                    total,
                    card.front,
                    card.back
                )
            })
            .collect()
    }

    pub fn render_decks(&self, decks: &[Deck]) -> String {
        if decks.is_empty() {
            return "No study decks yet.\n".to_string();
        }
        let mut out = String::new();
        for deck in decks {
            let noun = if deck.card_count == 1 { "card" } else { "cards" };
            out.push_str(&format!(
                "{}\t{}\t{} {}\n",
                deck.note_id, deck.title, deck.card_count, noun
            ));
        }
        out
    }
}
