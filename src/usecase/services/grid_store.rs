use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::TableConfig;
use crate::domain::entities::table::{
    Cell, CellValue, Column, ColumnId, ColumnType, IdGenerator, Row, RowId,
};
use crate::domain::sample::{sample_columns, sample_rows};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("duplicate column id {0}")]
    DuplicateColumnId(ColumnId),
    #[error("duplicate row id {0}")]
    DuplicateRowId(RowId),
    #[error("initial content uses an id at the top of the id space")]
    IdSpaceExhausted,
}

/// Canonical columns and rows of one table.
///
/// Every mutation keeps each row holding exactly one cell per existing column.
/// Unknown ids make a mutation a no-op.
#[derive(Debug, Clone)]
pub struct GridStateStore {
    columns: Vec<Column>,
    rows: Vec<Row>,
    ids: IdGenerator,
    config: TableConfig,
}

impl GridStateStore {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self, GridError> {
        Self::with_config(columns, rows, TableConfig::default())
    }

    /// Builds a store from initial content, falling back to the sample
    /// dataset when both collections are empty.
    pub fn with_config(
        columns: Vec<Column>,
        rows: Vec<Row>,
        config: TableConfig,
    ) -> Result<Self, GridError> {
        let (columns, rows) = if columns.is_empty() && rows.is_empty() {
            (sample_columns(), sample_rows())
        } else {
            (columns, rows)
        };

        let mut seen_columns = HashSet::new();
        for column in &columns {
            if !seen_columns.insert(column.id) {
                return Err(GridError::DuplicateColumnId(column.id));
            }
        }
        let mut seen_rows = HashSet::new();
        for row in &rows {
            if !seen_rows.insert(row.id) {
                return Err(GridError::DuplicateRowId(row.id));
            }
        }

        let columns: Vec<Column> = columns
            .into_iter()
            .map(|column| normalize_column(column, &config))
            .collect();
        let rows = rows
            .into_iter()
            .map(|row| normalize_row(row, &columns))
            .collect::<Vec<_>>();
        let ids = IdGenerator::seeded(&columns, &rows).ok_or(GridError::IdSpaceExhausted)?;

        Ok(Self {
            columns,
            rows,
            ids,
            config,
        })
    }

    pub fn sample() -> Self {
        let columns = sample_columns();
        let rows = sample_rows();
        // Sample ids are small; seeding cannot run out.
        let ids = IdGenerator::seeded(&columns, &rows).unwrap_or_default();
        Self {
            columns,
            rows,
            ids,
            config: TableConfig::default(),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id == id)
    }

    pub fn row_index(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn cell(&self, row: RowId, column: ColumnId) -> Option<&Cell> {
        self.row(row).and_then(|row| row.cells.get(&column))
    }

    pub fn insert_column(
        &mut self,
        column_type: ColumnType,
        name: Option<String>,
        at: Option<usize>,
    ) -> Option<ColumnId> {
        let Some(id) = self.ids.next_column_id() else {
            warn!("insert_column: column ids exhausted");
            return None;
        };
        let options = (column_type == ColumnType::Select)
            .then(|| self.config.select_placeholder_options.clone());
        let column = Column {
            id,
            name: name.unwrap_or_else(|| self.config.new_column_name.clone()),
            column_type,
            options,
            width: self.config.default_column_width,
        };

        let index = clamp_index(at, self.columns.len());
        self.columns.insert(index, column);
        for row in &mut self.rows {
            row.cells.insert(
                id,
                Cell::new(row.id, id, CellValue::default_for(column_type)),
            );
        }
        debug!(column = %id, ?column_type, index, "inserted column");
        Some(id)
    }

    pub fn delete_column(&mut self, id: ColumnId) {
        let Some(index) = self.column_index(id) else {
            debug!(column = %id, "delete_column: unknown column");
            return;
        };
        self.columns.remove(index);
        for row in &mut self.rows {
            row.cells.remove(&id);
        }
        debug!(column = %id, "deleted column");
    }

    pub fn rename_column(&mut self, id: ColumnId, name: impl Into<String>) {
        match self.columns.iter_mut().find(|column| column.id == id) {
            Some(column) => column.name = name.into(),
            None => debug!(column = %id, "rename_column: unknown column"),
        }
    }

    pub fn resize_column(&mut self, id: ColumnId, width: u32) {
        let min_width = self.config.min_column_width;
        match self.columns.iter_mut().find(|column| column.id == id) {
            Some(column) => column.width = width.max(min_width),
            None => debug!(column = %id, "resize_column: unknown column"),
        }
    }

    pub fn insert_row(&mut self, at: Option<usize>) -> Option<RowId> {
        let Some(id) = self.ids.next_row_id() else {
            warn!("insert_row: row ids exhausted");
            return None;
        };
        let row = Row::with_defaults(id, &self.columns);
        let index = clamp_index(at, self.rows.len());
        self.rows.insert(index, row);
        debug!(row = %id, index, "inserted row");
        Some(id)
    }

    pub fn delete_row(&mut self, id: RowId) {
        match self.row_index(id) {
            Some(index) => {
                self.rows.remove(index);
                debug!(row = %id, "deleted row");
            }
            None => debug!(row = %id, "delete_row: unknown row"),
        }
    }

    /// Replaces a cell's value. The variant is trusted as given; coercion to
    /// the column's type happens at the input boundary.
    pub fn set_cell_value(&mut self, row: RowId, column: ColumnId, value: CellValue) {
        if self.column(column).is_none() {
            debug!(%row, %column, "set_cell_value: unknown column");
            return;
        }
        let Some(target) = self.rows.iter_mut().find(|candidate| candidate.id == row) else {
            debug!(%row, %column, "set_cell_value: unknown row");
            return;
        };
        target
            .cells
            .entry(column)
            .and_modify(|cell| cell.value = value.clone())
            .or_insert_with(|| Cell::new(row, column, value));
    }
}

fn clamp_index(at: Option<usize>, len: usize) -> usize {
    at.map_or(len, |index| index.min(len))
}

fn normalize_column(mut column: Column, config: &TableConfig) -> Column {
    if column.column_type == ColumnType::Select && column.options.is_none() {
        column.options = Some(config.select_placeholder_options.clone());
    } else if column.column_type != ColumnType::Select {
        column.options = None;
    }
    column.width = column.width.max(config.min_column_width);
    column
}

fn normalize_row(mut row: Row, columns: &[Column]) -> Row {
    row.cells
        .retain(|column_id, _| columns.iter().any(|column| column.id == *column_id));
    for column in columns {
        let row_id = row.id;
        row.cells
            .entry(column.id)
            .or_insert_with(|| Cell::new(row_id, column.id, column.default_value()));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_table() -> GridStateStore {
        let columns = vec![
            Column::new(1, "Name", ColumnType::Text),
            Column::new(2, "Status", ColumnType::Select).with_options([
                "Not Started",
                "In Progress",
                "Complete",
            ]),
        ];
        let rows = vec![Row::new(1)
            .with_cell(1, CellValue::Text("Task 1".to_string()))
            .with_cell(2, CellValue::Select("In Progress".to_string()))];
        GridStateStore::new(columns, rows).expect("store should build")
    }

    fn row_shapes(store: &GridStateStore) -> Vec<usize> {
        store.rows().iter().map(|row| row.cells.len()).collect()
    }

    #[test]
    fn insert_column_adds_default_cell_to_every_row() {
        let mut store = GridStateStore::sample();
        let before_columns = store.columns().len();
        let before_cells = row_shapes(&store);

        let id = store
            .insert_column(ColumnType::Number, None, None)
            .expect("column id available");

        assert_eq!(store.columns().len(), before_columns + 1);
        for (row, before) in store.rows().iter().zip(before_cells) {
            assert_eq!(row.cells.len(), before + 1);
            assert_eq!(row.value(id), Some(&CellValue::Number(0.0)));
        }
        let column = store.columns().last().expect("column should be appended");
        assert_eq!(column.id, id);
        assert_eq!(column.name, "New Column");
        assert_eq!(column.width, 150);
        assert_eq!(column.options, None);
    }

    #[test]
    fn insert_select_column_gets_placeholder_options() {
        let mut store = status_table();

        let id = store
            .insert_column(ColumnType::Select, Some("Tag".to_string()), Some(0))
            .expect("column id available");

        let column = &store.columns()[0];
        assert_eq!(column.id, id);
        assert_eq!(column.name, "Tag");
        assert_eq!(
            column.options.as_deref(),
            Some(&["Option 1".to_string(), "Option 2".to_string()][..])
        );
    }

    #[test]
    fn insert_column_clamps_index() {
        let mut store = status_table();

        let id = store
            .insert_column(ColumnType::Text, None, Some(99))
            .expect("column id available");

        assert_eq!(store.columns().last().map(|c| c.id), Some(id));
    }

    #[test]
    fn delete_column_removes_cells_and_ignores_unknown_ids() {
        let mut store = status_table();
        store.delete_column(ColumnId(2));

        assert_eq!(store.columns().len(), 1);
        assert!(store.rows()[0].value(ColumnId(2)).is_none());

        let columns = store.columns().to_vec();
        let rows = store.rows().to_vec();
        store.delete_column(ColumnId(42));
        assert_eq!(store.columns(), &columns[..]);
        assert_eq!(store.rows(), &rows[..]);
    }

    #[test]
    fn insert_then_delete_column_restores_shape() {
        let mut store = status_table();
        let columns = store.columns().to_vec();
        let rows = store.rows().to_vec();

        let id = store
            .insert_column(ColumnType::Date, None, Some(1))
            .expect("column id available");
        store.delete_column(id);

        assert_eq!(store.columns(), &columns[..]);
        assert_eq!(store.rows(), &rows[..]);
    }

    #[test]
    fn insert_row_at_index_preserves_order() {
        let len = GridStateStore::sample().rows().len();

        for (at, expected) in [(0, 0), (1, 1), (len, len), (len + 5, len)] {
            let mut store = GridStateStore::sample();
            let before: Vec<RowId> = store.rows().iter().map(|row| row.id).collect();

            let id = store.insert_row(Some(at)).expect("row id available");

            let after: Vec<RowId> = store.rows().iter().map(|row| row.id).collect();
            assert_eq!(after.len(), before.len() + 1);
            assert_eq!(after[expected], id, "insert at {at}");
            let others: Vec<RowId> = after.into_iter().filter(|row| *row != id).collect();
            assert_eq!(others, before);
            assert_eq!(store.row(id).map(|row| row.cells.len()), Some(store.columns().len()));
        }
    }

    #[test]
    fn insert_row_without_index_appends() {
        let mut store = status_table();

        let id = store.insert_row(None).expect("row id available");

        assert_eq!(store.rows().last().map(|row| row.id), Some(id));
        assert_eq!(
            store.cell(id, ColumnId(1)).map(|cell| cell.id.as_str()),
            Some(format!("{id}-1").as_str())
        );
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let mut store = status_table();

        let first = store.insert_row(None).expect("row id available");
        store.delete_row(first);
        let second = store.insert_row(None).expect("row id available");

        assert_ne!(first, second);
    }

    #[test]
    fn rename_allows_empty_name() {
        let mut store = status_table();

        store.rename_column(ColumnId(1), "");
        store.rename_column(ColumnId(9), "ghost");

        assert_eq!(store.column(ColumnId(1)).map(|c| c.name.as_str()), Some(""));
    }

    #[test]
    fn resize_clamps_to_minimum() {
        let mut store = status_table();

        store.resize_column(ColumnId(1), 10);
        assert_eq!(store.column(ColumnId(1)).map(|c| c.width), Some(80));

        store.resize_column(ColumnId(1), 240);
        assert_eq!(store.column(ColumnId(1)).map(|c| c.width), Some(240));
    }

    #[test]
    fn set_cell_value_updates_only_target_cell() {
        let mut store = status_table();

        store.set_cell_value(RowId(1), ColumnId(2), CellValue::Select("Complete".to_string()));

        let row = store.row(RowId(1)).expect("row should exist");
        assert_eq!(row.value(ColumnId(2)), Some(&CellValue::Select("Complete".to_string())));
        assert_eq!(row.value(ColumnId(1)), Some(&CellValue::Text("Task 1".to_string())));

        store.delete_column(ColumnId(2));
        let row = store.row(RowId(1)).expect("row should exist");
        assert_eq!(row.cells.keys().copied().collect::<Vec<_>>(), vec![ColumnId(1)]);
    }

    #[test]
    fn set_cell_value_ignores_unknown_ids() {
        let mut store = status_table();
        let rows = store.rows().to_vec();

        store.set_cell_value(RowId(7), ColumnId(1), CellValue::Text("x".to_string()));
        store.set_cell_value(RowId(1), ColumnId(7), CellValue::Text("x".to_string()));

        assert_eq!(store.rows(), &rows[..]);
    }

    #[test]
    fn set_cell_value_trusts_caller_variant() {
        let mut store = status_table();

        store.set_cell_value(RowId(1), ColumnId(1), CellValue::Number(3.0));

        assert_eq!(store.rows()[0].value(ColumnId(1)), Some(&CellValue::Number(3.0)));
    }

    #[test]
    fn empty_content_falls_back_to_sample() {
        let store = GridStateStore::new(Vec::new(), Vec::new()).expect("store should build");

        assert_eq!(store.columns().len(), 5);
        assert_eq!(store.rows().len(), 2);
    }

    #[test]
    fn initial_content_is_normalized() {
        let columns = vec![
            Column::new(1, "Name", ColumnType::Text).with_width(20),
            Column::new(2, "Kind", ColumnType::Select),
            Column::new(3, "Notes", ColumnType::Text).with_options(["x"]),
        ];
        let rows = vec![Row::new(1)
            .with_cell(1, CellValue::Text("a".to_string()))
            .with_cell(9, CellValue::Text("stray".to_string()))];

        let store = GridStateStore::new(columns, rows).expect("store should build");

        assert_eq!(store.columns()[0].width, 80);
        assert_eq!(store.columns()[1].options.as_ref().map(Vec::len), Some(2));
        assert_eq!(store.columns()[2].options, None);
        let row = &store.rows()[0];
        assert_eq!(row.cells.len(), 3);
        assert_eq!(row.value(ColumnId(2)), Some(&CellValue::Select(String::new())));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let columns = vec![
            Column::new(1, "A", ColumnType::Text),
            Column::new(1, "B", ColumnType::Text),
        ];
        let err = GridStateStore::new(columns, Vec::new()).expect_err("duplicate columns");
        assert_eq!(err, GridError::DuplicateColumnId(ColumnId(1)));

        let columns = vec![Column::new(1, "A", ColumnType::Text)];
        let rows = vec![Row::new(3), Row::new(3)];
        let err = GridStateStore::new(columns, rows).expect_err("duplicate rows");
        assert_eq!(err.to_string(), "duplicate row id 3");
    }

    #[test]
    fn ids_at_the_top_of_the_space_are_rejected() {
        let columns = vec![Column::new(u64::MAX, "A", ColumnType::Text)];
        let err = GridStateStore::new(columns, Vec::new()).expect_err("column id overflow");
        assert_eq!(err, GridError::IdSpaceExhausted);

        let columns = vec![Column::new(1, "A", ColumnType::Text)];
        let rows = vec![Row::new(u64::MAX)];
        let err = GridStateStore::new(columns, rows).expect_err("row id overflow");
        assert_eq!(err, GridError::IdSpaceExhausted);
    }

    #[test]
    fn exhausted_ids_make_inserts_no_ops() {
        let columns = vec![Column::new(u64::MAX - 1, "A", ColumnType::Text)];
        let rows = vec![Row::new(u64::MAX - 1)];
        let mut store = GridStateStore::new(columns, rows).expect("store should build");

        assert_eq!(
            store.insert_column(ColumnType::Text, None, None),
            Some(ColumnId(u64::MAX))
        );
        assert_eq!(store.insert_row(None), Some(RowId(u64::MAX)));

        let columns = store.columns().to_vec();
        let rows = store.rows().to_vec();
        assert_eq!(store.insert_column(ColumnType::Number, None, Some(0)), None);
        assert_eq!(store.insert_row(Some(0)), None);
        assert_eq!(store.columns(), &columns[..]);
        assert_eq!(store.rows(), &rows[..]);
    }
}
