//! Tests for the JSON board format

use nestcol::application::format::{board_to_value, decode_board, encode_board};
use nestcol::application::ApplicationError;
use nestcol::domain::{Board, Entry};
use serde_json::json;

fn labels(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(Entry::label).collect()
}

#[test]
fn given_mapping_shape_when_decoding_then_columns_keep_document_order() {
    let board = decode_board(
        "inline",
        r#"{"zeta": ["x", {"B": ["p", "q"]}], "alpha": ["m"]}"#,
    )
    .unwrap();

    assert_eq!(board.column_names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    assert_eq!(labels(board.column("zeta").unwrap().entries()), vec!["x", "B"]);
    assert_eq!(labels(board.entries("zeta", "B").unwrap()), vec!["p", "q"]);
}

#[test]
fn given_seed_board_when_encoding_then_matches_mapping_shape() {
    let value = board_to_value(&Board::seed());
    assert_eq!(
        value,
        json!({
            "column1": [
                {"column11": ["Row 11", "Row 12"]},
                {"column12": ["Row 11", "Row 12"]},
                {"column13": ["Row 3"]}
            ],
            "column2": ["Item A", "Item B", "Item C", {"column22": ["Row 21", "Row 22"]}]
        })
    );
}

#[test]
fn given_encoded_board_when_decoding_then_same_shape_new_ids() {
    let board = Board::seed().move_entry("column22", 0, 1).unwrap();
    let text = encode_board(&board).unwrap();
    let decoded = decode_board("encoded", &text).unwrap();

    assert_eq!(board_to_value(&decoded), board_to_value(&board));
    assert_ne!(decoded, board, "leaf ids are regenerated on decode");
}

#[test]
fn given_non_string_rows_when_decoding_then_invalid_board_naming_group() {
    for content in [r#"{"A": [1]}"#, r#"{"A": ["x", true]}"#, r#"{"A": [{"B": [2.5]}]}"#] {
        let err = decode_board("rows.json", content).unwrap_err();
        match err {
            ApplicationError::InvalidBoard { message, .. } => {
                assert!(message.contains("rows must be strings"), "{}", message);
                assert!(message.contains("'A'") || message.contains("'B'"), "{}", message);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn given_sub_column_with_two_keys_when_decoding_then_malformed() {
    let err = decode_board("bad.json", r#"{"A": [{"B": [], "C": []}]}"#).unwrap_err();
    match err {
        ApplicationError::InvalidBoard {
            source_name,
            message,
        } => {
            assert_eq!(source_name, "bad.json");
            assert!(message.contains("exactly one key"), "{}", message);
            assert!(message.contains("'A'"), "{}", message);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn given_non_object_document_when_decoding_then_invalid_board() {
    assert!(matches!(
        decode_board("bad.json", r#"["A"]"#),
        Err(ApplicationError::InvalidBoard { .. })
    ));
    assert!(matches!(
        decode_board("bad.json", r#"{"A": "x"}"#),
        Err(ApplicationError::InvalidBoard { .. })
    ));
    assert!(matches!(
        decode_board("bad.json", r#"{"A": [null]}"#),
        Err(ApplicationError::InvalidBoard { .. })
    ));
    assert!(matches!(
        decode_board("bad.json", "not json"),
        Err(ApplicationError::InvalidBoard { .. })
    ));
}

#[test]
fn given_empty_object_when_decoding_then_empty_board() {
    let board = decode_board("empty", "{}").unwrap();
    assert!(board.is_empty());
}
