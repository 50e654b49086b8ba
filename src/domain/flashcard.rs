// src/domain/flashcard.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A front/back pair produced by the generator, not yet persisted.
///
/// The key type is opaque to the generator; the store uses `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashcardDraft<K = i64> {
    pub note_id: K,
    pub front: String,
    pub back: String,
}

impl<K> FlashcardDraft<K> {
    pub fn new(note_id: K, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            note_id,
            front: front.into(),
            back: back.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flashcard {
    pub id: i64,
    pub note_id: i64,
    pub front: String,
    pub back: String,
    pub created_at: DateTime<Utc>,
}

/// A note that currently owns at least one flashcard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deck {
    pub note_id: i64,
    pub title: String,
    pub card_count: usize,
}
