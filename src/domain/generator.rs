// src/domain/generator.rs
//
// Heuristic flashcard generation from free-form note text.
//
// Lines of the form `front <sep> back` become cards directly. A short line
// without terminal punctuation followed by a line without any separator is
// read as a heading and its body. When neither heuristic matches anywhere in
// the text, every line becomes a card with a placeholder front.
use crate::constants::{HEADING_MAX_CHARS, PLACEHOLDER_FRONT, TERMINAL_PUNCTUATION};
use crate::domain::FlashcardDraft;

/// Tokens that split a line into front and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Colon,
    Dash,
    Arrow,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Colon => ":",
            Separator::Dash => "-",
            Separator::Arrow => "=>",
        }
    }

    /// Find the leftmost separator in `line`, returning its byte offset.
    ///
    /// A `-` between two alphanumeric characters is a hyphenated word
    /// (`multi-step`, `2024-01-01`), not a separator.
    pub fn find_first(line: &str) -> Option<(usize, Separator)> {
        let mut previous: Option<char> = None;
        let mut chars = line.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            let next = chars.peek().map(|&(_, c)| c);
            let found = match ch {
                ':' => Some(Separator::Colon),
                '-' if !joins_word(previous, next) => Some(Separator::Dash),
                '=' if next == Some('>') => Some(Separator::Arrow),
                _ => None,
            };
            if let Some(separator) = found {
                return Some((idx, separator));
            }
            previous = Some(ch);
        }

        None
    }
}

fn joins_word(previous: Option<char>, next: Option<char>) -> bool {
    matches!(
        (previous, next),
        (Some(p), Some(n)) if p.is_alphanumeric() && n.is_alphanumeric()
    )
}

#[derive(Debug, PartialEq, Eq)]
enum LineShape<'a> {
    /// Non-empty text on both sides of the first separator.
    Pair(&'a str, &'a str),
    /// A separator with nothing on one side, e.g. `- item` or `Summary:`.
    Dangling,
    /// No separator at all.
    Plain,
}

fn line_shape(line: &str) -> LineShape<'_> {
    let Some((idx, separator)) = Separator::find_first(line) else {
        return LineShape::Plain;
    };

    let front = line[..idx].trim();
    let back = line[idx + separator.as_str().len()..].trim();
    if front.is_empty() || back.is_empty() {
        LineShape::Dangling
    } else {
        LineShape::Pair(front, back)
    }
}

fn is_heading(line: &str) -> bool {
    line.chars().count() < HEADING_MAX_CHARS && !line.ends_with(&TERMINAL_PUNCTUATION[..])
}

/// Turn note text into flashcard drafts owned by `note_id`.
///
/// Never fails: blank text yields no drafts, any other text yields at least one.
/// Drafts come out in the order their lines appear.
pub fn generate_flashcards<K: Clone>(text: &str, note_id: K) -> Vec<FlashcardDraft<K>> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    // The previous line is read back even when it already produced a card,
    // so `Term: definition` followed by a plain line yields two cards.
    let (drafts, _) = lines.iter().fold(
        (Vec::new(), None::<&str>),
        |(mut drafts, previous), &line| {
            match line_shape(line) {
                LineShape::Pair(front, back) => {
                    drafts.push(FlashcardDraft::new(note_id.clone(), front, back));
                }
                LineShape::Dangling => {}
                LineShape::Plain => {
                    if let Some(heading) = previous.filter(|p| is_heading(p)) {
                        let seen = drafts
                            .iter()
                            .any(|d: &FlashcardDraft<K>| d.front == heading);
                        if !seen {
                            drafts.push(FlashcardDraft::new(note_id.clone(), heading, line));
                        }
                    }
                }
            }
            (drafts, Some(line))
        },
    );

    if !drafts.is_empty() {
        return drafts;
    }

    lines
        .into_iter()
        .map(|line| FlashcardDraft::new(note_id.clone(), PLACEHOLDER_FRONT, line))
        .collect()
}
