//! Board: the ordered top-level groups and the reorder operations over them.
//!
//! Every operation is a pure transform: it borrows the current board and
//! returns a freshly derived one. Untouched entry sequences are shared with
//! the input, the sequences on the modified path are copied.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::domain::entities::{Entry, Group};
use crate::domain::error::{DomainError, DomainResult};

/// How far below the top-level groups the locator searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    /// Full pre-order search, no depth bound.
    #[default]
    Recursive,
    /// Immediate children of top-level groups only.
    Shallow,
}

impl FromStr for SearchDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(SearchDepth::Recursive),
            "shallow" => Ok(SearchDepth::Shallow),
            other => Err(format!(
                "unknown search depth '{}', expected 'recursive' or 'shallow'",
                other
            )),
        }
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchDepth::Recursive => write!(f, "recursive"),
            SearchDepth::Shallow => write!(f, "shallow"),
        }
    }
}

/// Location of a group: index of its top-level column, then the entry index
/// at each nesting level below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPath {
    column: usize,
    nested: Vec<usize>,
}

impl GroupPath {
    fn top(column: usize) -> Self {
        Self {
            column,
            nested: Vec::new(),
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn nested(&self) -> &[usize] {
        &self.nested
    }

    /// Nesting level: 0 for a top-level group.
    pub fn depth(&self) -> usize {
        self.nested.len()
    }

    /// Path of the enclosing group, `None` for top-level groups.
    pub fn parent(&self) -> Option<GroupPath> {
        let (_, rest) = self.nested.split_last()?;
        Some(Self {
            column: self.column,
            nested: rest.to_vec(),
        })
    }

    fn child(&self, idx: usize) -> GroupPath {
        let mut nested = self.nested.clone();
        nested.push(idx);
        Self {
            column: self.column,
            nested,
        }
    }
}

/// The group tree: top-level groups in on-screen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    columns: Vec<Group>,
}

impl Board {
    pub fn new(columns: Vec<Group>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Group] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Group> {
        self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Group> {
        self.columns.iter().find(|group| group.name() == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Group::name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Deepest group nesting: 1 for a board of flat columns, 0 when empty.
    pub fn depth(&self) -> usize {
        fn group_depth(group: &Group) -> usize {
            1 + group
                .entries()
                .iter()
                .filter_map(Entry::as_group)
                .map(group_depth)
                .max()
                .unwrap_or(0)
        }
        self.columns.iter().map(group_depth).max().unwrap_or(0)
    }

    /// Finds a group by name. Top-level groups are matched first, then each
    /// column is searched in order; the first match wins.
    #[instrument(level = "trace", skip(self))]
    pub fn locate(&self, name: &str, depth: SearchDepth) -> Option<GroupPath> {
        if let Some(column) = self.columns.iter().position(|g| g.name() == name) {
            return Some(GroupPath::top(column));
        }

        for (column, group) in self.columns.iter().enumerate() {
            let nested = match depth {
                SearchDepth::Shallow => group.child_group(name).map(|(idx, _)| vec![idx]),
                SearchDepth::Recursive => search_nested(group, name),
            };
            if let Some(nested) = nested {
                return Some(GroupPath { column, nested });
            }
        }
        None
    }

    pub fn group_at(&self, path: &GroupPath) -> Option<&Group> {
        let mut group = self.columns.get(path.column)?;
        for &idx in &path.nested {
            group = group.entries().get(idx)?.as_group()?;
        }
        Some(group)
    }

    /// Mutable access along `path`, copying every shared sequence on the way.
    fn group_at_mut(&mut self, path: &GroupPath) -> Option<&mut Group> {
        let mut group = self.columns.get_mut(path.column)?;
        for &idx in &path.nested {
            group = match group.entries_mut().get_mut(idx)? {
                Entry::Group(child) => child,
                Entry::Leaf(_) => return None,
            };
        }
        Some(group)
    }

    /// Name of the group that directly contains `name`.
    ///
    /// Top-level groups have no parent, unknown names yield `None`.
    pub fn find_parent_group(&self, name: &str) -> Option<&str> {
        self.find_parent_group_with(name, SearchDepth::default())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn find_parent_group_with(&self, name: &str, depth: SearchDepth) -> Option<&str> {
        let path = self.locate(name, depth)?;
        let parent = path.parent()?;
        self.group_at(&parent).map(Group::name)
    }

    /// Entries of the group `target` found directly inside `parent`.
    pub fn entries(&self, parent: &str, target: &str) -> Option<&[Entry]> {
        self.entries_with(parent, target, SearchDepth::default())
    }

    pub fn entries_with(&self, parent: &str, target: &str, depth: SearchDepth) -> Option<&[Entry]> {
        let parent_path = self.locate(parent, depth)?;
        let (_, group) = self.group_at(&parent_path)?.child_group(target)?;
        Some(group.entries())
    }

    /// Returns a board where `target` (inside `parent`) holds `entries`.
    ///
    /// Unknown parent or target leaves the result equal to `self`.
    pub fn replace_entries(&self, parent: &str, target: &str, entries: Vec<Entry>) -> Board {
        self.replace_entries_with(parent, target, entries, SearchDepth::default())
    }

    #[instrument(level = "debug", skip(self, entries), fields(len = entries.len()))]
    pub fn replace_entries_with(
        &self,
        parent: &str,
        target: &str,
        entries: Vec<Entry>,
        depth: SearchDepth,
    ) -> Board {
        let mut next = self.clone();
        let path = self.locate(parent, depth).and_then(|parent_path| {
            let (idx, _) = self.group_at(&parent_path)?.child_group(target)?;
            Some(parent_path.child(idx))
        });

        match path.and_then(|path| next.group_at_mut(&path)) {
            Some(group) => group.set_entries(entries),
            None => debug!("no group '{}' under '{}', nothing replaced", target, parent),
        }
        next
    }

    /// Moves the entry at `from` to `to` within the sequence of `group`.
    ///
    /// A group that cannot be located is skipped: the result equals `self`.
    pub fn move_entry(&self, group: &str, from: usize, to: usize) -> DomainResult<Board> {
        self.move_entry_with(group, from, to, SearchDepth::default())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn move_entry_with(
        &self,
        group: &str,
        from: usize,
        to: usize,
        depth: SearchDepth,
    ) -> DomainResult<Board> {
        if from == to {
            trace!("from == to, nothing to move");
            return Ok(self.clone());
        }

        if let Some(column) = self.columns.iter().position(|g| g.name() == group) {
            let mut next = self.clone();
            relocate(next.columns[column].entries_mut(), from, to)?;
            return Ok(next);
        }

        let Some(parent) = self.find_parent_group_with(group, depth) else {
            debug!("group '{}' not found, skipping move", group);
            return Ok(self.clone());
        };
        let Some(entries) = self.entries_with(parent, group, depth) else {
            debug!("group '{}' vanished under '{}', skipping move", group, parent);
            return Ok(self.clone());
        };

        let mut entries = entries.to_vec();
        relocate(&mut entries, from, to)?;
        Ok(self.replace_entries_with(parent, group, entries, depth))
    }

    /// Moves the top-level group at `from` to position `to`.
    #[instrument(level = "debug", skip(self))]
    pub fn move_column(&self, from: usize, to: usize) -> DomainResult<Board> {
        if from == to {
            trace!("from == to, nothing to move");
            return Ok(self.clone());
        }
        let mut columns = self.columns.clone();
        relocate(&mut columns, from, to)?;
        Ok(Board { columns })
    }

    /// Fails with [`DomainError::GroupNotFound`] unless `name` is locatable.
    pub fn require_group(&self, name: &str, depth: SearchDepth) -> DomainResult<GroupPath> {
        self.locate(name, depth)
            .ok_or_else(|| DomainError::GroupNotFound(name.to_string()))
    }
}

fn search_nested(group: &Group, name: &str) -> Option<Vec<usize>> {
    for (idx, entry) in group.entries().iter().enumerate() {
        if let Entry::Group(child) = entry {
            if child.name() == name {
                return Some(vec![idx]);
            }
            if let Some(mut rest) = search_nested(child, name) {
                rest.insert(0, idx);
                return Some(rest);
            }
        }
    }
    None
}

/// Removes the item at `from` and reinserts it at `to`.
pub(crate) fn relocate<T>(seq: &mut Vec<T>, from: usize, to: usize) -> DomainResult<()> {
    let len = seq.len();
    for index in [from, to] {
        if index >= len {
            return Err(DomainError::IndexOutOfRange { index, len });
        }
    }
    let item = seq.remove(from);
    seq.insert(to, item);
    Ok(())
}
