use anyhow::Result;
use chrono::{TimeZone, Utc};
use snapnotes::domain::{Deck, Flashcard, FlashcardDraft, Note};

#[test]
fn given_note_when_serializing_to_json_then_contains_all_fields() -> Result<()> {
    // Arrange
    let note = Note {
        id: 12,
        title: "Geography".to_string(),
        content: "Capital: Paris".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
    };

    // Act
    let json = serde_json::to_string_pretty(&note)?;

    // Assert
    assert!(json.contains(r#""id": 12"#));
    assert!(json.contains(r#""title": "Geography""#));
    assert!(json.contains(r#""content": "Capital: Paris""#));
    assert!(json.contains(r#""created_at": "2024-05-01T08:00:00Z""#));
    Ok(())
}

#[test]
fn given_flashcard_when_serializing_then_uses_snake_case_fields() -> Result<()> {
    // Arrange
    let card = Flashcard {
        id: 1,
        note_id: 12,
        front: "Capital".to_string(),
        back: "Paris".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
    };

    // Act
    let json = serde_json::to_string(&card)?;

    // Assert - field names should be snake_case, not camelCase
    assert!(json.contains(r#""note_id":12"#));
    assert!(!json.contains(r#""noteId""#));
    Ok(())
}

#[test]
fn given_draft_and_deck_when_serializing_then_produces_expected_objects() -> Result<()> {
    let draft = FlashcardDraft::new(3, "Term", "Definition");
    let deck = Deck {
        note_id: 3,
        title: "Vocabulary".to_string(),
        card_count: 4,
    };

    let draft_json = serde_json::to_value(&draft)?;
    let deck_json = serde_json::to_value(&deck)?;

    assert_eq!(
        draft_json,
        serde_json::json!({"note_id": 3, "front": "Term", "back": "Definition"})
    );
    assert_eq!(
        deck_json,
        serde_json::json!({"note_id": 3, "title": "Vocabulary", "card_count": 4})
    );
    Ok(())
}
