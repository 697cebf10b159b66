use crate::domain::entities::table::{ColumnId, RowId};

/// The single element currently accepting input, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditTarget {
    #[default]
    Idle,
    Cell {
        row: RowId,
        column: ColumnId,
    },
    ColumnHeader(ColumnId),
}

impl EditTarget {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditTarget::Idle)
    }

    pub fn touches_column(&self, id: ColumnId) -> bool {
        match self {
            EditTarget::Cell { column, .. } => *column == id,
            EditTarget::ColumnHeader(column) => *column == id,
            EditTarget::Idle => false,
        }
    }

    pub fn touches_row(&self, id: RowId) -> bool {
        matches!(self, EditTarget::Cell { row, .. } if *row == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditExit {
    Commit,
    Cancel,
    Blur,
}
