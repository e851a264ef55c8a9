//! Fluent construction of boards, and the board a fresh session starts from.

use crate::domain::board::Board;
use crate::domain::entities::{Entry, Group};

/// Collects entries for one group.
#[derive(Debug, Default)]
pub struct GroupBuilder {
    entries: Vec<Entry>,
}

impl GroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(mut self, text: impl Into<String>) -> Self {
        self.entries.push(Entry::leaf(text));
        self
    }

    pub fn leaves<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.extend(texts.into_iter().map(Entry::leaf));
        self
    }

    /// Appends a nested group, filled by `fill`.
    pub fn group(mut self, name: impl Into<String>, fill: impl FnOnce(GroupBuilder) -> GroupBuilder) -> Self {
        let nested = fill(GroupBuilder::new()).entries;
        self.entries.push(Entry::group(name, nested));
        self
    }

    pub fn build(self, name: impl Into<String>) -> Group {
        Group::new(name, self.entries)
    }
}

/// Collects top-level groups in order.
#[derive(Debug, Default)]
pub struct BoardBuilder {
    columns: Vec<Group>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, name: impl Into<String>, fill: impl FnOnce(GroupBuilder) -> GroupBuilder) -> Self {
        self.columns.push(fill(GroupBuilder::new()).build(name));
        self
    }

    pub fn build(self) -> Board {
        Board::new(self.columns)
    }
}

impl Board {
    /// The board shown when no input is given: two columns, one made of
    /// sub-columns only, one mixing rows with a sub-column.
    pub fn seed() -> Board {
        BoardBuilder::new()
            .column("column1", |c| {
                c.group("column11", |g| g.leaves(["Row 11", "Row 12"]))
                    .group("column12", |g| g.leaves(["Row 11", "Row 12"]))
                    .group("column13", |g| g.leaf("Row 3"))
            })
            .column("column2", |c| {
                c.leaves(["Item A", "Item B", "Item C"])
                    .group("column22", |g| g.leaves(["Row 21", "Row 22"]))
            })
            .build()
    }
}
