// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the note store (optional)
    #[arg(short, long, value_name = "STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a note from a text file or stdin (e.g. OCR output)
    Add {
        /// File with the note text; reads stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Note title; defaults to the first line of the text
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Change the title or content of a note
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// File with the new note text
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Show a note
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes, newest first
    List {
        /// Only notes whose title or content starts with this text
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note and its flashcards
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Generate flashcards for a note, replacing existing ones
    Generate {
        /// Note ID to generate flashcards for
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Show the flashcards of a note
    Cards {
        /// Note ID whose flashcards to show
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output flashcards as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes that have flashcards
    Decks {
        /// Output decks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    InitConfig {
        /// Target path; defaults to the platform config directory
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}
