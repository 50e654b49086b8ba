// src/constants.rs
//
// Application-wide constants shared by the generator, the domain model and the CLI.

/// A line shorter than this (in characters) may act as a heading for the next line.
///
/// Used in: `domain/generator.rs`
pub const HEADING_MAX_CHARS: usize = 50;

/// Lines ending in one of these are sentences, never headings.
///
/// Used in: `domain/generator.rs`
pub const TERMINAL_PUNCTUATION: [char; 3] = ['.', '?', '!'];

/// Front text of cards produced when no structural heuristic matched.
///
/// Used in: `domain/generator.rs`
pub const PLACEHOLDER_FRONT: &str = "...";

/// Titles derived from captured text are cut to this many characters.
///
/// Used in: `domain/note.rs`
pub const MAX_TITLE_CHARS: usize = 50;

/// Title used when captured text starts with a blank line.
///
/// Used in: `domain/note.rs`
pub const UNTITLED_NOTE: &str = "Untitled Note";

/// Directory name below the platform config/data dirs.
///
/// Used in: `lib.rs`
pub const APP_DIR_NAME: &str = "snapnotes";

/// Store file created below the platform data dir when no path is configured.
///
/// Used in: `lib.rs`
pub const STORE_FILE_NAME: &str = "snapnotes.db";

/// Config file looked up below the platform config dir.
///
/// Used in: `lib.rs`
pub const CONFIG_FILE_NAME: &str = "config.toml";
