use chrono::NaiveDate;
use tracing::debug;

use crate::config::TableConfig;
use crate::domain::entities::edit::EditTarget;
use crate::domain::entities::resize::ResizeGesture;
use crate::domain::entities::table::{CellValue, Column, ColumnId, ColumnType, Row, RowId};
use crate::usecase::ports::pointer::PointerListeners;
use crate::usecase::services::column_resize::ColumnResizeController;
use crate::usecase::services::edit_focus::EditFocusController;
use crate::usecase::services::grid_store::{GridError, GridStateStore};
use crate::usecase::services::input::{coerce_input, date_value};

/// Owns the whole table state and routes user events into it.
#[derive(Debug)]
pub struct TableEditor {
    store: GridStateStore,
    edit: EditFocusController,
    resize: ColumnResizeController,
}

impl TableEditor {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self, GridError> {
        GridStateStore::new(columns, rows).map(Self::from_store)
    }

    pub fn sample() -> Self {
        Self::from_store(GridStateStore::sample())
    }

    pub fn from_store(store: GridStateStore) -> Self {
        let resize = ColumnResizeController::new(store.config().min_column_width);
        Self {
            store,
            edit: EditFocusController::new(),
            resize,
        }
    }

    pub fn store(&self) -> &GridStateStore {
        &self.store
    }

    pub fn config(&self) -> &TableConfig {
        self.store.config()
    }

    pub fn columns(&self) -> &[Column] {
        self.store.columns()
    }

    pub fn rows(&self) -> &[Row] {
        self.store.rows()
    }

    pub fn edit_target(&self) -> EditTarget {
        self.edit.target()
    }

    pub fn resize_gesture(&self) -> Option<ResizeGesture> {
        self.resize.gesture()
    }

    // Editing

    /// Opens the cell editor, or toggles the value in place for checkboxes.
    pub fn activate_cell(&mut self, row: RowId, column: ColumnId) {
        let Some(column_type) = self.store.column(column).map(|c| c.column_type) else {
            return;
        };
        if self.store.row(row).is_none() {
            return;
        }
        if !self.edit.begin_editing_cell(row, column, column_type) {
            self.toggle_checkbox(row, column);
        }
    }

    pub fn activate_column_header(&mut self, column: ColumnId) {
        if self.store.column(column).is_some() {
            self.edit.begin_editing_column_header(column);
        }
    }

    /// Live typing into whichever element is being edited.
    pub fn type_text(&mut self, raw: &str) {
        match self.edit.target() {
            EditTarget::Cell { row, column } => {
                let Some(column_type) = self.store.column(column).map(|c| c.column_type) else {
                    return;
                };
                self.store
                    .set_cell_value(row, column, coerce_input(column_type, raw));
            }
            EditTarget::ColumnHeader(column) => self.store.rename_column(column, raw),
            EditTarget::Idle => {}
        }
    }

    /// Picking an option commits the select cell under edit.
    pub fn choose_option(&mut self, option: impl Into<String>) {
        if let Some((row, column)) = self.editing_cell_of(ColumnType::Select) {
            self.store
                .set_cell_value(row, column, CellValue::Select(option.into()));
            self.edit.commit();
        }
    }

    /// Picking (or clearing) a date commits the date cell under edit.
    pub fn choose_date(&mut self, date: Option<NaiveDate>) {
        if let Some((row, column)) = self.editing_cell_of(ColumnType::Date) {
            let value = date.map(date_value).unwrap_or_default();
            self.store.set_cell_value(row, column, CellValue::Date(value));
            self.edit.commit();
        }
    }

    pub fn toggle_checkbox(&mut self, row: RowId, column: ColumnId) {
        let checked = self
            .store
            .cell(row, column)
            .and_then(|cell| cell.value.as_bool())
            .unwrap_or(false);
        self.store
            .set_cell_value(row, column, CellValue::Checkbox(!checked));
    }

    pub fn commit_edit(&mut self) {
        self.edit.commit();
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    pub fn blur_edit(&mut self) {
        self.edit.blur();
    }

    fn editing_cell_of(&self, column_type: ColumnType) -> Option<(RowId, ColumnId)> {
        match self.edit.target() {
            EditTarget::Cell { row, column }
                if self.store.column(column).map(|c| c.column_type) == Some(column_type) =>
            {
                Some((row, column))
            }
            _ => None,
        }
    }

    // Resizing

    pub fn press_resize_handle(
        &mut self,
        column: ColumnId,
        pointer_x: f64,
        listeners: &dyn PointerListeners,
    ) -> bool {
        let Some(width) = self.store.column(column).map(|c| c.width) else {
            return false;
        };
        self.resize.begin_resizing(column, pointer_x, width, listeners)
    }

    pub fn pointer_moved(&mut self, x: f64) {
        if let Some((column, width)) = self.resize.pointer_moved(x) {
            self.store.resize_column(column, width);
        }
    }

    /// Move event that also reports whether the primary button is still down.
    /// A move without the button means the release happened out of sight, so
    /// the gesture ends instead of resizing.
    pub fn pointer_dragged(&mut self, x: f64, primary_held: bool) {
        if primary_held {
            self.pointer_moved(x);
        } else if self.resize.is_resizing() {
            debug!("pointer moved without a held button, ending gesture");
            self.resize.pointer_released();
        }
    }

    pub fn pointer_released(&mut self) {
        self.resize.pointer_released();
    }

    // Structure

    pub fn add_column(&mut self, column_type: ColumnType) -> Option<ColumnId> {
        self.store.insert_column(column_type, None, None)
    }

    pub fn insert_column_before(&mut self, anchor: ColumnId) -> Option<ColumnId> {
        let index = self.store.column_index(anchor)?;
        self.store.insert_column(ColumnType::Text, None, Some(index))
    }

    pub fn insert_column_after(&mut self, anchor: ColumnId) -> Option<ColumnId> {
        let index = self.store.column_index(anchor)?;
        self.store.insert_column(ColumnType::Text, None, Some(index + 1))
    }

    pub fn delete_column(&mut self, column: ColumnId) {
        self.edit.forget_column(column);
        if self.resize.gesture().map(|g| g.column) == Some(column) {
            debug!(%column, "resized column deleted, ending gesture");
            self.resize.pointer_released();
        }
        self.store.delete_column(column);
    }

    pub fn add_row(&mut self) -> Option<RowId> {
        self.store.insert_row(None)
    }

    pub fn insert_row_above(&mut self, anchor: RowId) -> Option<RowId> {
        let index = self.store.row_index(anchor)?;
        self.store.insert_row(Some(index))
    }

    pub fn insert_row_below(&mut self, anchor: RowId) -> Option<RowId> {
        let index = self.store.row_index(anchor)?;
        self.store.insert_row(Some(index + 1))
    }

    pub fn delete_row(&mut self, row: RowId) {
        self.edit.forget_row(row);
        self.store.delete_row(row);
    }
}

impl Default for TableEditor {
    fn default() -> Self {
        Self::sample()
    }
}
