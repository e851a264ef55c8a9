//! JSON board format
//!
//! A board is an object of columns in display order; each column is an
//! array whose items are either strings (rows) or single-key objects
//! (sub-columns):
//!
//! ```json
//! { "A": ["x", { "B": ["p", "q"] }], "C": ["m"] }
//! ```
//!
//! Leaf ids are not part of the format; decoding assigns fresh ones.

use serde_json::{Map, Value};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Board, DomainError, DomainResult, Entry, Group};

const BOARD: &str = "<board>";

/// Parses `content`; `source_name` only labels errors.
pub fn decode_board(source_name: &str, content: &str) -> ApplicationResult<Board> {
    let invalid = |message: String| ApplicationError::InvalidBoard {
        source_name: source_name.to_string(),
        message,
    };
    let value: Value = serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
    board_from_value(&value).map_err(|e| invalid(e.to_string()))
}

pub fn encode_board(board: &Board) -> ApplicationResult<String> {
    serde_json::to_string_pretty(&board_to_value(board)).map_err(|e| {
        ApplicationError::OperationFailed {
            context: "encode board".to_string(),
            source: Box::new(e),
        }
    })
}

pub fn board_from_value(value: &Value) -> DomainResult<Board> {
    let Value::Object(columns) = value else {
        return Err(malformed(BOARD, "expected an object of columns"));
    };
    let columns = columns
        .iter()
        .map(|(name, entries)| group_from_value(name, entries))
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(Board::new(columns))
}

pub fn board_to_value(board: &Board) -> Value {
    Value::Object(
        board
            .columns()
            .iter()
            .map(|group| (group.name().to_string(), entries_to_value(group.entries())))
            .collect(),
    )
}

fn group_from_value(name: &str, value: &Value) -> DomainResult<Group> {
    let Value::Array(items) = value else {
        return Err(malformed(name, "expected an array of entries"));
    };
    let entries = items
        .iter()
        .map(|item| entry_from_value(name, item))
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(Group::new(name, entries))
}

fn entry_from_value(group: &str, item: &Value) -> DomainResult<Entry> {
    match item {
        Value::String(text) => Ok(Entry::leaf(text.as_str())),
        Value::Number(_) | Value::Bool(_) => Err(malformed(group, "rows must be strings")),
        Value::Object(map) => match single_entry(map) {
            Some((name, entries)) => group_from_value(name, entries).map(Entry::Group),
            None => Err(malformed(
                group,
                &format!("sub-column must have exactly one key, found {}", map.len()),
            )),
        },
        Value::Array(_) => Err(malformed(group, "nested arrays are not entries")),
        Value::Null => Err(malformed(group, "null is not an entry")),
    }
}

fn single_entry(map: &Map<String, Value>) -> Option<(&String, &Value)> {
    if map.len() == 1 {
        map.iter().next()
    } else {
        None
    }
}

fn entries_to_value(entries: &[Entry]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|entry| match entry {
                Entry::Leaf(leaf) => Value::String(leaf.text.clone()),
                Entry::Group(group) => {
                    let mut map = Map::new();
                    map.insert(group.name().to_string(), entries_to_value(group.entries()));
                    Value::Object(map)
                }
            })
            .collect(),
    )
}

fn malformed(group: &str, message: &str) -> DomainError {
    DomainError::MalformedEntry {
        group: group.to_string(),
        message: message.to_string(),
    }
}
