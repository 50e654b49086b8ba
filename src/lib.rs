// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::application::{
    FlashcardCreator, FlashcardLister, NoteCreator, NoteDeleter, NoteEditor, NoteLister,
    NoteViewer,
};
use crate::cli::args::{Args, Command};
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, STORE_FILE_NAME};
use crate::domain::DomainError;
use crate::infrastructure::{Config, SqliteRepository};
use crate::ports::TextPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting snapnotes with arguments");

    let Args {
        store,
        config,
        command,
        ..
    } = args;
    let open = || open_session(store.as_deref(), config.as_deref());
    let presenter = TextPresenter::new();

    match command {
        Command::InitConfig { path } => {
            init_config(path.or_else(default_config_path))?;
        }
        Command::Add { file, title } => {
            let content = read_text(file.as_deref())?;
            let mut creator = NoteCreator::new(open()?.repository);
            let note = creator.create_note(&content, title.as_deref())?;
            println!("Created note {}: {}", note.id, note.title);
        }
        Command::Edit {
            note_id,
            title,
            file,
        } => {
            if title.is_none() && file.is_none() {
                bail!("Nothing to change: pass --title and/or --file");
            }
            let content = file.as_deref().map(|f| read_text(Some(f))).transpose()?;
            let mut editor = NoteEditor::new(open()?.repository);
            let note = editor.edit_note(note_id, title.as_deref(), content.as_deref())?;
            println!("Updated note {}: {}", note.id, note.title);
        }
        Command::View { note_id, json } => {
            info!(note_id, "Viewing note");
            let session = open()?;
            let note = NoteViewer::new(session.repository).view_note(note_id)?;
            if json || session.json {
                print_json(&note)?;
            } else {
                print!("{}", presenter.render_note(&note));
            }
        }
        Command::List { search, json } => {
            let session = open()?;
            let notes = NoteLister::new(session.repository).list_notes(search.as_deref())?;
            if json || session.json {
                print_json(&notes)?;
            } else {
                print!("{}", presenter.render_note_list(&notes));
            }
        }
        Command::Delete { note_id } => {
            let deleted_cards = NoteDeleter::new(open()?.repository).delete_note(note_id)?;
            println!("Deleted note {} and {} flashcard(s)", note_id, deleted_cards);
        }
        Command::Generate { note_id } => {
            match FlashcardCreator::new(open()?.repository).create_flashcards(note_id) {
                Ok(cards) => println!("{} flashcards generated for note {}", cards.len(), note_id),
                Err(DomainError::NoFlashcards(_)) => {
                    println!("Could not generate any flashcards from this note.")
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Cards { note_id, json } => {
            let session = open()?;
            let cards = FlashcardLister::new(session.repository).list_flashcards(note_id)?;
            if json || session.json {
                print_json(&cards)?;
            } else {
                print!("{}", presenter.render_flashcards(&cards));
            }
        }
        Command::Decks { json } => {
            let session = open()?;
            let decks = FlashcardLister::new(session.repository).list_decks()?;
            if json || session.json {
                print_json(&decks)?;
            } else {
                print!("{}", presenter.render_decks(&decks));
            }
        }
    }

    Ok(())
}

/// An opened store plus the output preference from the config.
struct Session {
    repository: SqliteRepository,
    json: bool,
}

fn open_session(store: Option<&Path>, config_path: Option<&Path>) -> Result<Session> {
    let config = Config::resolve(config_path, default_config_path())?;
    debug!(?config, "Resolved configuration");

    let store_path = find_store_path(store, &config)?;
    Ok(Session {
        repository: SqliteRepository::new(&store_path)?,
        json: config.output.json,
    })
}

/// Store location: explicit path, then config, then the platform data directory.
pub fn find_store_path(store: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = store {
        debug!(?path, "Using provided store path");
        return Ok(path.to_path_buf());
    }
    if let Some(path) = config.store.path() {
        debug!(?path, "Using configured store path");
        return Ok(path);
    }

    let data_dir = dirs::data_dir().context("Could not find data directory")?;
    Ok(data_dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = path.context("Could not find config directory; pass a path")?;
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    Config::create_default(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn read_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read note text from stdin")?;
            Ok(text)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::StoreConfig;
    use crate::util::testing;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_explicit_store_when_finding_store_path_then_it_wins_over_config() {
        let config = Config {
            store: StoreConfig {
                path: "/from/config.db".to_string(),
            },
            ..Default::default()
        };

        let path = find_store_path(Some(Path::new("/from/cli.db")), &config).unwrap();

        assert_eq!(path, PathBuf::from("/from/cli.db"));
    }

    #[test]
    fn given_configured_store_when_finding_store_path_then_uses_config() {
        let config = Config {
            store: StoreConfig {
                path: "/from/config.db".to_string(),
            },
            ..Default::default()
        };

        let path = find_store_path(None, &config).unwrap();

        assert_eq!(path, PathBuf::from("/from/config.db"));
    }

    #[test]
    fn given_text_file_when_reading_then_returns_contents() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("scan.txt");
        std::fs::write(&path, "Term: meaning\n").unwrap();

        assert_eq!(read_text(Some(&path)).unwrap(), "Term: meaning\n");
    }

    #[test]
    fn given_existing_config_when_initializing_then_refuses_to_overwrite() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        assert!(init_config(Some(path)).is_err());
    }
}
