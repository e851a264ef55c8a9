//! Session: the single owned cell holding the current board.
//!
//! Reorders never touch the held board; they derive a new one from it and
//! commit that in one assignment.

use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{Board, Entry, SearchDepth};

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    depth: SearchDepth,
    revision: u64,
}

impl Session {
    pub fn new(board: Board, depth: SearchDepth) -> Self {
        Self {
            board,
            depth,
            revision: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn depth(&self) -> SearchDepth {
        self.depth
    }

    /// Number of commits that changed the board.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn find_parent_group(&self, group: &str) -> Option<&str> {
        self.board.find_parent_group_with(group, self.depth)
    }

    pub fn entries(&self, parent: &str, group: &str) -> Option<&[Entry]> {
        self.board.entries_with(parent, group, self.depth)
    }

    /// Replaces the held board. Returns whether it differed from the old one.
    pub fn commit(&mut self, next: Board) -> bool {
        let changed = next != self.board;
        self.board = next;
        if changed {
            self.revision += 1;
            debug!("committed revision {}", self.revision);
        }
        changed
    }

    /// Reorders within `group` and commits.
    ///
    /// `Ok(false)` covers both a no-op move and a group that could not be
    /// located. On error the held board is left as it was.
    #[instrument(level = "debug", skip(self))]
    pub fn move_entry(&mut self, group: &str, from: usize, to: usize) -> ApplicationResult<bool> {
        let next = self.board.move_entry_with(group, from, to, self.depth)?;
        Ok(self.commit(next))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn move_column(&mut self, from: usize, to: usize) -> ApplicationResult<bool> {
        let next = self.board.move_column(from, to)?;
        Ok(self.commit(next))
    }

    #[instrument(level = "debug", skip(self, entries))]
    pub fn replace_entries(&mut self, parent: &str, group: &str, entries: Vec<Entry>) -> bool {
        let next = self
            .board
            .replace_entries_with(parent, group, entries, self.depth);
        self.commit(next)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Board::seed(), SearchDepth::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::DomainError;

    #[test]
    fn given_valid_move_when_committing_then_revision_advances() {
        let mut session = Session::default();
        assert!(session.move_entry("column2", 0, 2).unwrap());
        assert_eq!(session.revision(), 1);
    }

    #[test]
    fn given_same_indices_when_moving_then_nothing_committed() {
        let mut session = Session::default();
        let before = session.board().clone();
        assert!(!session.move_entry("column2", 1, 1).unwrap());
        assert_eq!(session.revision(), 0);
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn given_out_of_range_index_when_moving_then_board_kept() {
        let mut session = Session::default();
        let before = session.board().clone();
        let err = session.move_entry("column2", 0, 9).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::IndexOutOfRange { index: 9, len: 4 })
        ));
        assert_eq!(session.board(), &before);
    }
}
