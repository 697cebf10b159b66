use tracing::debug;

use crate::domain::entities::edit::{EditExit, EditTarget};
use crate::domain::entities::table::{ColumnId, ColumnType, RowId};

/// Tracks the one cell or column header in edit mode.
///
/// Edits are live: the store already holds whatever was typed, so every exit
/// (commit, cancel or blur) just closes the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditFocusController {
    target: EditTarget,
}

impl EditFocusController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> EditTarget {
        self.target
    }

    pub fn is_editing_cell(&self, row: RowId, column: ColumnId) -> bool {
        self.target == EditTarget::Cell { row, column }
    }

    pub fn is_editing_header(&self, column: ColumnId) -> bool {
        self.target == EditTarget::ColumnHeader(column)
    }

    /// Returns false for checkbox columns, which toggle instead of editing.
    pub fn begin_editing_cell(
        &mut self,
        row: RowId,
        column: ColumnId,
        column_type: ColumnType,
    ) -> bool {
        if !column_type.enters_edit_mode() {
            return false;
        }
        self.switch_to(EditTarget::Cell { row, column });
        true
    }

    pub fn begin_editing_column_header(&mut self, column: ColumnId) {
        self.switch_to(EditTarget::ColumnHeader(column));
    }

    pub fn commit(&mut self) {
        self.exit(EditExit::Commit);
    }

    pub fn cancel(&mut self) {
        self.exit(EditExit::Cancel);
    }

    pub fn blur(&mut self) {
        self.exit(EditExit::Blur);
    }

    pub fn forget_row(&mut self, row: RowId) {
        if self.target.touches_row(row) {
            self.target = EditTarget::Idle;
        }
    }

    pub fn forget_column(&mut self, column: ColumnId) {
        if self.target.touches_column(column) {
            self.target = EditTarget::Idle;
        }
    }

    fn switch_to(&mut self, next: EditTarget) {
        if self.target != next {
            debug!(from = ?self.target, to = ?next, "edit target changed");
        }
        self.target = next;
    }

    fn exit(&mut self, reason: EditExit) {
        if self.target.is_idle() {
            return;
        }
        debug!(target = ?self.target, ?reason, "edit closed");
        self.target = EditTarget::Idle;
    }
}
