// src/util/testing.rs

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{Deck, DomainError, Flashcard, FlashcardDraft, Note};

/// In-memory NoteRepository for testing use cases
///
/// Behaves like the SQLite store: ids are assigned incrementally, deleting a
/// note removes its flashcards, listings are ordered the same way.
///
/// # Examples
///
/// ```
/// use snapnotes::application::NoteRepository;
/// use snapnotes::util::testing::MockNoteRepository;
///
/// let mut mock = MockNoteRepository::builder()
///     .with_note(123, "Capitals", "Capital: Paris")
///     .with_flashcard(123, "Capital", "Paris")
///     .build();
///
/// assert_eq!(mock.list_flashcards(123).unwrap().len(), 1);
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    flashcards: Vec<Flashcard>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    fn next_note_id(&self) -> i64 {
        self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }

    fn next_card_id(&self) -> i64 {
        self.flashcards.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }
}

impl NoteRepository for MockNoteRepository {
    fn insert_note(
        &mut self,
        title: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Note, DomainError> {
        let note = Note {
            id: self.next_note_id(),
            title: title.to_string(),
            content: content.to_string(),
            created_at,
        };
        self.notes.push(note.clone());
        Ok(note)
    }

    fn update_note(&mut self, id: i64, title: &str, content: &str) -> Result<Note, DomainError> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(DomainError::NoteNotFound(id))?;
        note.title = title.to_string();
        note.content = content.to_string();
        Ok(note.clone())
    }

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(DomainError::NoteNotFound(id))
    }

    fn list_notes(&mut self, search_query: Option<&str>) -> Result<Vec<Note>, DomainError> {
        let mut notes: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| search_query.map_or(true, |q| n.starts_with_ignore_case(q)))
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(notes)
    }

    fn delete_note(&mut self, id: i64) -> Result<usize, DomainError> {
        if !self.notes.iter().any(|n| n.id == id) {
            return Err(DomainError::NoteNotFound(id));
        }
        self.notes.retain(|n| n.id != id);
        self.delete_flashcards(id)
    }

    fn delete_flashcards(&mut self, note_id: i64) -> Result<usize, DomainError> {
        let before = self.flashcards.len();
        self.flashcards.retain(|c| c.note_id != note_id);
        Ok(before - self.flashcards.len())
    }

    fn add_flashcards(
        &mut self,
        drafts: &[FlashcardDraft],
        created_at: DateTime<Utc>,
    ) -> Result<Vec<Flashcard>, DomainError> {
        let mut added = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let card = Flashcard {
                id: self.next_card_id(),
                note_id: draft.note_id,
                front: draft.front.clone(),
                back: draft.back.clone(),
                created_at,
            };
            self.flashcards.push(card.clone());
            added.push(card);
        }
        Ok(added)
    }

    fn list_flashcards(&mut self, note_id: i64) -> Result<Vec<Flashcard>, DomainError> {
        Ok(self
            .flashcards
            .iter()
            .filter(|c| c.note_id == note_id)
            .cloned()
            .collect())
    }

    fn list_decks(&mut self) -> Result<Vec<Deck>, DomainError> {
        let mut notes: Vec<&Note> = self.notes.iter().collect();
        notes.sort_by_key(|n| n.id);

        Ok(notes
            .into_iter()
            .filter_map(|note| {
                let card_count = self
                    .flashcards
                    .iter()
                    .filter(|c| c.note_id == note.id)
                    .count();
                (card_count > 0).then(|| Deck {
                    note_id: note.id,
                    title: note.title.clone(),
                    card_count,
                })
            })
            .collect())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for seeding notes and flashcards.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    flashcards: Vec<Flashcard>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            flashcards: vec![],
        }
    }

    /// Add a note; higher ids count as newer
    pub fn with_note(mut self, id: i64, title: &str, content: &str) -> Self {
        self.notes.push(Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: fixed_time() + Duration::seconds(id),
        });
        self
    }

    /// Add a stored flashcard for `note_id`
    pub fn with_flashcard(mut self, note_id: i64, front: &str, back: &str) -> Self {
        let id = self.flashcards.len() as i64 + 1;
        self.flashcards.push(Flashcard {
            id,
            note_id,
            front: front.to_string(),
            back: back.to_string(),
            created_at: fixed_time(),
        });
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            flashcards: self.flashcards,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn fixed_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0)
        .single()
        .unwrap_or_default()
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["rusqlite"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
