//! Operation scripts: a JSON array of reorders replayed against a session.
//!
//! ```json
//! [
//!   { "op": "move_entry", "group": "column2", "from": 0, "to": 2 },
//!   { "op": "move_column", "from": 0, "to": 1 },
//!   { "op": "replace_entries", "parent": "column1", "group": "column13", "leaves": ["Row 4"] }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::session::Session;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Entry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    MoveEntry {
        group: String,
        from: usize,
        to: usize,
    },
    MoveColumn {
        from: usize,
        to: usize,
    },
    ReplaceEntries {
        parent: String,
        group: String,
        leaves: Vec<String>,
    },
}

impl Operation {
    /// Applies and commits this operation. Returns whether the board changed.
    pub fn apply(&self, session: &mut Session) -> ApplicationResult<bool> {
        match self {
            Operation::MoveEntry { group, from, to } => session.move_entry(group, *from, *to),
            Operation::MoveColumn { from, to } => session.move_column(*from, *to),
            Operation::ReplaceEntries {
                parent,
                group,
                leaves,
            } => {
                let entries = leaves.iter().map(|text| Entry::leaf(text.as_str())).collect();
                Ok(session.replace_entries(parent, group, entries))
            }
        }
    }
}

pub fn parse_script(path: &Path, content: &str) -> ApplicationResult<Vec<Operation>> {
    serde_json::from_str(content).map_err(|e| ApplicationError::InvalidScript {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Applies `operations` in order, stopping at the first failure.
///
/// Returns the number of operations that changed the board. Operations
/// before a failing one stay committed.
#[instrument(level = "debug", skip_all, fields(steps = operations.len()))]
pub fn replay(session: &mut Session, operations: &[Operation]) -> ApplicationResult<usize> {
    let mut changed = 0;
    for (step, operation) in operations.iter().enumerate() {
        debug!("step {}: {:?}", step + 1, operation);
        let applied = operation
            .apply(session)
            .map_err(|e| ApplicationError::OperationFailed {
                context: format!("step {} ({:?})", step + 1, operation),
                source: Box::new(e),
            })?;
        if applied {
            changed += 1;
        }
    }
    Ok(changed)
}
