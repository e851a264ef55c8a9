//! Board loading service
//!
//! Reads boards and operation scripts through the filesystem boundary and
//! opens sessions on them.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::format::decode_board;
use crate::application::script::{parse_script, Operation};
use crate::application::session::Session;
use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Board, SearchDepth};
use crate::infrastructure::traits::FileSystem;

pub struct BoardService {
    fs: Arc<dyn FileSystem>,
}

impl BoardService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn load_board(&self, path: &Path) -> ApplicationResult<Board> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read board", path)?;
        let board = decode_board(&path.display().to_string(), &content)?;
        debug!("loaded {} columns from {}", board.len(), path.display());
        Ok(board)
    }

    /// Board from `path`, or the seed board when no path is given.
    pub fn load_board_or_seed(&self, path: Option<&Path>) -> ApplicationResult<Board> {
        match path {
            Some(path) => self.load_board(path),
            None => {
                debug!("no board file, using seed board");
                Ok(Board::seed())
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn load_script(&self, path: &Path) -> ApplicationResult<Vec<Operation>> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read script", path)?;
        parse_script(path, &content)
    }

    pub fn open_session(&self, path: Option<&Path>, depth: SearchDepth) -> ApplicationResult<Session> {
        Ok(Session::new(self.load_board_or_seed(path)?, depth))
    }
}
