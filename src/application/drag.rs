//! Drag gesture tracking: idle or dragging one row / one column.
//!
//! The rendering layer reports begin, hover and end; every hover over a new
//! position reorders the session immediately and the dragged item's index
//! follows it, so consecutive hovers move the same item step by step.

use tracing::{instrument, trace};

use crate::application::session::Session;
use crate::application::ApplicationResult;

/// What is being dragged, and where it currently sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragItem {
    Row { group: String, index: usize },
    Column { index: usize },
}

#[derive(Debug, Default)]
pub struct DragTracker {
    active: Option<DragItem>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&DragItem> {
        self.active.as_ref()
    }

    /// Starts dragging the row at `index` of `group`, replacing any drag in progress.
    pub fn begin_row(&mut self, group: impl Into<String>, index: usize) {
        self.active = Some(DragItem::Row {
            group: group.into(),
            index,
        });
    }

    pub fn begin_column(&mut self, index: usize) {
        self.active = Some(DragItem::Column { index });
    }

    /// Pointer is over row `hover_index` of `group`.
    ///
    /// Rows only move within their own group; hovering another group's rows,
    /// or hovering rows while dragging a column, does nothing.
    #[instrument(level = "trace", skip(self, session))]
    pub fn hover_row(
        &mut self,
        session: &mut Session,
        group: &str,
        hover_index: usize,
    ) -> ApplicationResult<bool> {
        let Some(DragItem::Row {
            group: dragged_group,
            index,
        }) = &mut self.active
        else {
            return Ok(false);
        };
        if dragged_group.as_str() != group || *index == hover_index {
            trace!("hover ignored");
            return Ok(false);
        }

        let changed = session.move_entry(group, *index, hover_index)?;
        *index = hover_index;
        Ok(changed)
    }

    /// Pointer is over top-level column `hover_index`.
    #[instrument(level = "trace", skip(self, session))]
    pub fn hover_column(&mut self, session: &mut Session, hover_index: usize) -> ApplicationResult<bool> {
        let Some(DragItem::Column { index }) = &mut self.active else {
            return Ok(false);
        };
        if *index == hover_index {
            return Ok(false);
        }

        let changed = session.move_column(*index, hover_index)?;
        *index = hover_index;
        Ok(changed)
    }

    /// Ends the gesture, returning the item's final position.
    pub fn end(&mut self) -> Option<DragItem> {
        self.active.take()
    }
}
