// src/infrastructure/sqlite.rs
use crate::application::NoteRepository;
use crate::domain::{Deck, DomainError, Flashcard, FlashcardDraft, Note};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS flashcards (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
    front TEXT NOT NULL,
    back TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_flashcards_note_id ON flashcards(note_id);
"#;

const NOTE_COLUMNS: &str = "id, title, content, created_at";
const FLASHCARD_COLUMNS: &str = "id, note_id, front, back, created_at";

pub struct SqliteRepository {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteRepository {
    /// Open the store at `path`, creating the file and schema on first use.
    pub fn new<P: AsRef<Path>>(store_path: P) -> Result<Self> {
        let path = PathBuf::from(store_path.as_ref());
        debug!(?path, "Opening note store");

        if path.is_dir() {
            return Err(DomainError::StoreError(format!(
                "Store path is a directory: {}",
                path.display()
            ))
            .into());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open note store at {}", path.display()))?;
        let repository = Self::with_connection(conn, Some(path.clone()))?;

        info!(?path, "Opened note store");
        Ok(repository)
    }

    /// Throwaway store, used by tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory store")?;
        Self::with_connection(conn, None)
    }

    fn with_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .context("Failed to enable foreign keys")?;
        conn.execute_batch(SCHEMA)
            .context("Failed to create note store schema")?;
        Ok(Self { conn, path })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn store_error(e: rusqlite::Error) -> DomainError {
    DomainError::StoreError(e.to_string())
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn flashcard_from_row(row: &Row<'_>) -> rusqlite::Result<Flashcard> {
    Ok(Flashcard {
        id: row.get(0)?,
        note_id: row.get(1)?,
        front: row.get(2)?,
        back: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl NoteRepository for SqliteRepository {
    #[instrument(level = "debug", skip(self, content))]
    fn insert_note(
        &mut self,
        title: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Note, DomainError> {
        self.conn
            .execute(
                "INSERT INTO notes (title, content, created_at) VALUES (?1, ?2, ?3)",
                params![title, content, created_at],
            )
            .map_err(store_error)?;

        Ok(Note {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            content: content.to_string(),
            created_at,
        })
    }

    #[instrument(level = "debug", skip(self, content))]
    fn update_note(&mut self, id: i64, title: &str, content: &str) -> Result<Note, DomainError> {
        let changed = self
            .conn
            .execute(
                "UPDATE notes SET title = ?1, content = ?2 WHERE id = ?3",
                params![title, content, id],
            )
            .map_err(store_error)?;

        if changed == 0 {
            return Err(DomainError::NoteNotFound(id));
        }
        self.get_note(id)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.conn
            .query_row(
                &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
                params![id],
                note_from_row,
            )
            .optional()
            .map_err(store_error)?
            .ok_or(DomainError::NoteNotFound(id))
    }

    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self, search_query: Option<&str>) -> Result<Vec<Note>, DomainError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {NOTE_COLUMNS} FROM notes ORDER BY created_at DESC, id DESC"
            ))
            .map_err(store_error)?;

        let notes = stmt
            .query_map([], note_from_row)
            .map_err(store_error)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(store_error)?;

        // SQLite's lower() only folds ASCII, so matching happens here
        Ok(match search_query {
            None => notes,
            Some(query) => notes
                .into_iter()
                .filter(|n| n.starts_with_ignore_case(query))
                .collect(),
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: i64) -> Result<usize, DomainError> {
        debug!(note_id = id, "Attempting to delete note");
        let tx = self.conn.transaction().map_err(store_error)?;

        let deleted_cards = tx
            .execute("DELETE FROM flashcards WHERE note_id = ?1", params![id])
            .map_err(store_error)?;
        let deleted_notes = tx
            .execute("DELETE FROM notes WHERE id = ?1", params![id])
            .map_err(store_error)?;

        if deleted_notes == 0 {
            debug!(note_id = id, "Note not found for deletion");
            return Err(DomainError::NoteNotFound(id));
        }
        tx.commit().map_err(store_error)?;

        info!(
            note_id = id,
            cards_deleted = deleted_cards,
            "Successfully deleted note"
        );
        Ok(deleted_cards)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_flashcards(&mut self, note_id: i64) -> Result<usize, DomainError> {
        self.conn
            .execute("DELETE FROM flashcards WHERE note_id = ?1", params![note_id])
            .map_err(store_error)
    }

    #[instrument(level = "debug", skip(self, drafts), fields(count = drafts.len()))]
    fn add_flashcards(
        &mut self,
        drafts: &[FlashcardDraft],
        created_at: DateTime<Utc>,
    ) -> Result<Vec<Flashcard>, DomainError> {
        let tx = self.conn.transaction().map_err(store_error)?;
        let mut cards = Vec::with_capacity(drafts.len());
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO flashcards (note_id, front, back, created_at) \
                     VALUES (?1, ?2, ?3, ?4)",
                )
                .map_err(store_error)?;

            for draft in drafts {
                let id = stmt
                    .insert(params![draft.note_id, draft.front, draft.back, created_at])
                    .map_err(store_error)?;
                cards.push(Flashcard {
                    id,
                    note_id: draft.note_id,
                    front: draft.front.clone(),
                    back: draft.back.clone(),
                    created_at,
                });
            }
        }
        tx.commit().map_err(store_error)?;
        Ok(cards)
    }

    #[instrument(level = "debug", skip(self))]
    fn list_flashcards(&mut self, note_id: i64) -> Result<Vec<Flashcard>, DomainError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {FLASHCARD_COLUMNS} FROM flashcards WHERE note_id = ?1 ORDER BY id"
            ))
            .map_err(store_error)?;

        let cards = stmt
            .query_map(params![note_id], flashcard_from_row)
            .map_err(store_error)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(store_error);
        cards
    }

    #[instrument(level = "debug", skip(self))]
    fn list_decks(&mut self) -> Result<Vec<Deck>, DomainError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT n.id, n.title, COUNT(f.id) \
                 FROM notes n JOIN flashcards f ON f.note_id = n.id \
                 GROUP BY n.id, n.title \
                 ORDER BY n.id",
            )
            .map_err(store_error)?;

        let decks = stmt
            .query_map([], |row| {
                Ok(Deck {
                    note_id: row.get(0)?,
                    title: row.get(1)?,
                    card_count: row.get::<_, i64>(2)? as usize,
                })
            })
            .map_err(store_error)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(store_error);
        decks
    }
}
