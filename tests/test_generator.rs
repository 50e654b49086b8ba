use snapnotes::domain::{generate_flashcards, FlashcardDraft};

fn fronts_and_backs<K>(drafts: &[FlashcardDraft<K>]) -> Vec<(String, String)> {
    drafts
        .iter()
        .map(|d| (d.front.clone(), d.back.clone()))
        .collect()
}

#[test]
fn given_text_without_non_blank_lines_when_generating_then_returns_empty() {
    for text in ["", " ", "\n\n", "\t \r\n  \n"] {
        assert!(
            generate_flashcards(text, 1_i64).is_empty(),
            "expected no drafts for {text:?}"
        );
    }
}

#[test]
fn given_unstructured_lines_when_generating_then_one_placeholder_card_per_line() {
    // Arrange
    let text = "The first sentence ends here.\n\nThe second one ends too!\nAnd a question?";

    // Act
    let drafts = generate_flashcards(text, 1_i64);

    // Assert
    assert_eq!(drafts.len(), 3);
    assert!(drafts.iter().all(|d| d.front == "..."));
    assert_eq!(drafts[1].back, "The second one ends too!");
}

#[test]
fn given_mixed_note_when_generating_then_preserves_discovery_order() {
    // Arrange
    let text = "Photosynthesis\n\
                Plants turn light into chemical energy.\n\
                Chlorophyll: green pigment\n\
                Stomata => leaf pores";

    // Act
    let drafts = generate_flashcards(text, 8_i64);

    // Assert
    assert_eq!(
        fronts_and_backs(&drafts),
        vec![
            (
                "Photosynthesis".to_string(),
                "Plants turn light into chemical energy.".to_string()
            ),
            ("Chlorophyll".to_string(), "green pigment".to_string()),
            ("Stomata".to_string(), "leaf pores".to_string()),
        ]
    );
    assert!(drafts.iter().all(|d| d.note_id == 8));
}

#[test]
fn given_spec_examples_when_generating_then_matches_expected_cards() {
    let capital = generate_flashcards("Capital: Paris", 1_i64);
    let nested = generate_flashcards("A: B: C", 1_i64);
    let heading = generate_flashcards(
        "Mitochondria\nProduces ATP via oxidative phosphorylation, a multi-step pathway.",
        1_i64,
    );

    assert!(capital.contains(&FlashcardDraft::new(1, "Capital", "Paris")));
    assert!(nested.contains(&FlashcardDraft::new(1, "A", "B: C")));
    assert!(heading.contains(&FlashcardDraft::new(
        1,
        "Mitochondria",
        "Produces ATP via oxidative phosphorylation, a multi-step pathway."
    )));
}

#[test]
fn given_heading_followed_by_two_definitions_when_generating_then_single_heading_card() {
    let drafts = generate_flashcards("Term\nDef A\nDef B", 1_i64);

    assert_eq!(drafts.iter().filter(|d| d.front == "Term").count(), 1);
}

#[test]
fn given_single_plain_line_when_generating_then_returns_exactly_one_placeholder() {
    let line = "just a plain sentence with no colon or dash";

    let drafts = generate_flashcards(line, 2_i64);

    assert_eq!(drafts, vec![FlashcardDraft::new(2, "...", line)]);
}

#[test]
fn given_any_key_type_when_generating_then_key_is_copied_unchanged() {
    #[derive(Debug, Clone, PartialEq)]
    struct NoteKey {
        shelf: u8,
        slot: u32,
    }
    let key = NoteKey { shelf: 3, slot: 77 };

    let drafts = generate_flashcards("Key: value\nHeading\nbody", key.clone());
    let by_str = generate_flashcards("Key: value", "note-1");

    assert_eq!(drafts.len(), 3);
    assert!(drafts.iter().all(|d| d.note_id == key));
    assert_eq!(by_str[0].note_id, "note-1");
}

#[test]
fn given_identical_arguments_when_generating_twice_then_outputs_are_identical() {
    let text = "Cell\nBasic unit of life\nDNA: genetic material\nnucleus - control center";

    let first = generate_flashcards(text, 4_i64);
    let second = generate_flashcards(text, 4_i64);

    assert_eq!(first, second);
}
