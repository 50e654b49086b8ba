// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::{MAX_TITLE_CHARS, UNTITLED_NOTE};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Derive a title from captured text: its first line, cut to
    /// `MAX_TITLE_CHARS` characters.
    pub fn title_from_content(content: &str) -> String {
        let first_line = content.lines().next().map(str::trim).unwrap_or("");
        if first_line.is_empty() {
            return UNTITLED_NOTE.to_string();
        }
        first_line.chars().take(MAX_TITLE_CHARS).collect()
    }

    /// Case-insensitive prefix match against title or content.
    pub fn starts_with_ignore_case(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().starts_with(&query)
            || self.content.to_lowercase().starts_with(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_multiline_content_when_deriving_title_then_uses_first_line() {
        let title = Note::title_from_content("  Photosynthesis  \nLight reactions");

        assert_eq!(title, "Photosynthesis");
    }

    #[test]
    fn given_blank_first_line_when_deriving_title_then_returns_untitled() {
        assert_eq!(Note::title_from_content("\nSecond line"), "Untitled Note");
        assert_eq!(Note::title_from_content(""), "Untitled Note");
    }

    #[test]
    fn given_long_first_line_when_deriving_title_then_truncates_to_fifty_chars() {
        let content = "x".repeat(80);

        let title = Note::title_from_content(&content);

        assert_eq!(title.chars().count(), 50);
    }

    #[test]
    fn given_query_matching_content_start_when_matching_then_ignores_case() {
        let note = Note {
            id: 1,
            title: "Biology".to_string(),
            content: "Mitosis splits a cell".to_string(),
            created_at: Utc::now(),
        };

        assert!(note.starts_with_ignore_case("bio"));
        assert!(note.starts_with_ignore_case("MITOSIS"));
        assert!(!note.starts_with_ignore_case("cell"));
    }

    #[test]
    fn given_multibyte_first_line_when_deriving_title_then_truncates_on_char_boundary() {
        let content = "é".repeat(60);

        let title = Note::title_from_content(&content);

        assert_eq!(title, "é".repeat(50));
    }
}
