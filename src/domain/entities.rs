//! Domain entities: core data structures

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

/// Identity of a leaf, independent of its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeafId(Uuid);

impl LeafId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LeafId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LeafId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal row. Two leaves may share display text; they never share an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub id: LeafId,
    pub text: String,
}

impl Leaf {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: LeafId::new(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Named, ordered collection of entries.
///
/// The entry sequence sits behind an `Arc` so that cloning a board shares
/// every untouched sequence; mutation goes through [`Group::entries_mut`],
/// which copies only when the sequence is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    entries: Arc<Vec<Entry>>,
}

impl Group {
    pub fn new(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            entries: Arc::new(entries),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Copy-on-write access to the entry sequence.
    pub fn entries_mut(&mut self) -> &mut Vec<Entry> {
        Arc::make_mut(&mut self.entries)
    }

    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = Arc::new(entries);
    }

    /// Whether `other` still shares this group's entry storage.
    pub fn shares_entries_with(&self, other: &Group) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Immediate child group named `name`, with its position in `entries`.
    pub fn child_group(&self, name: &str) -> Option<(usize, &Group)> {
        self.entries
            .iter()
            .enumerate()
            .find_map(|(idx, entry)| match entry {
                Entry::Group(group) if group.name == name => Some((idx, group)),
                _ => None,
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One slot in a group's sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Leaf(Leaf),
    Group(Group),
}

impl Entry {
    pub fn leaf(text: impl Into<String>) -> Self {
        Entry::Leaf(Leaf::new(text))
    }

    pub fn group(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Entry::Group(Group::new(name, entries))
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Entry::Group(group) => Some(group),
            Entry::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Entry::Leaf(leaf) => Some(leaf),
            Entry::Group(_) => None,
        }
    }

    /// Display label: leaf text or group name.
    pub fn label(&self) -> &str {
        match self {
            Entry::Leaf(leaf) => &leaf.text,
            Entry::Group(group) => group.name(),
        }
    }
}

impl From<Leaf> for Entry {
    fn from(leaf: Leaf) -> Self {
        Entry::Leaf(leaf)
    }
}

impl From<Group> for Entry {
    fn from(group: Group) -> Self {
        Entry::Group(group)
    }
}
