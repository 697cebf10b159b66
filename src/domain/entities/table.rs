use std::collections::HashMap;
use std::fmt;

pub const DEFAULT_COLUMN_WIDTH: u32 = 150;
pub const MIN_COLUMN_WIDTH: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(pub u64);

impl From<u64> for ColumnId {
    fn from(value: u64) -> Self {
        ColumnId(value)
    }
}

impl From<ColumnId> for u64 {
    fn from(value: ColumnId) -> Self {
        value.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl From<u64> for RowId {
    fn from(value: u64) -> Self {
        RowId(value)
    }
}

impl From<RowId> for u64 {
    fn from(value: RowId) -> Self {
        value.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out row and column ids from two monotonic counters.
///
/// Ids are never reused for the lifetime of the table, even after the row or
/// column that carried them is deleted. A counter that has handed out
/// `u64::MAX` is exhausted and yields nothing further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next_column: Option<u64>,
    next_row: Option<u64>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self {
            next_column: Some(1),
            next_row: Some(1),
        }
    }
}

impl IdGenerator {
    /// Starts both counters past the largest ids already in use. `None` when
    /// an existing id is `u64::MAX` and nothing can follow it.
    pub fn seeded(columns: &[Column], rows: &[Row]) -> Option<Self> {
        let next_column = next_after(columns.iter().map(|c| c.id.0))?;
        let next_row = next_after(rows.iter().map(|r| r.id.0))?;
        Some(Self {
            next_column: Some(next_column),
            next_row: Some(next_row),
        })
    }

    pub fn next_column_id(&mut self) -> Option<ColumnId> {
        let id = self.next_column?;
        self.next_column = id.checked_add(1);
        Some(ColumnId(id))
    }

    pub fn next_row_id(&mut self) -> Option<RowId> {
        let id = self.next_row?;
        self.next_row = id.checked_add(1);
        Some(RowId(id))
    }
}

fn next_after(ids: impl Iterator<Item = u64>) -> Option<u64> {
    match ids.max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Text,
    Number,
    Select,
    Checkbox,
    Date,
}

impl ColumnType {
    pub const ALL: [ColumnType; 5] = [
        ColumnType::Text,
        ColumnType::Number,
        ColumnType::Select,
        ColumnType::Checkbox,
        ColumnType::Date,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColumnType::Text => "Text",
            ColumnType::Number => "Number",
            ColumnType::Select => "Select",
            ColumnType::Checkbox => "Checkbox",
            ColumnType::Date => "Date",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ColumnType::Text => "T",
            ColumnType::Number => "#",
            ColumnType::Select => "◈",
            ColumnType::Checkbox => "☑",
            ColumnType::Date => "📅",
        }
    }

    /// Checkbox cells toggle in place and never open an editor.
    pub fn enters_edit_mode(self) -> bool {
        !matches!(self, ColumnType::Checkbox)
    }
}

/// Value stored in a cell. The variant mirrors the owning column's type.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Select(String),
    Checkbox(bool),
    Date(String),
}

impl CellValue {
    pub fn default_for(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Text => CellValue::Text(String::new()),
            ColumnType::Number => CellValue::Number(0.0),
            ColumnType::Select => CellValue::Select(String::new()),
            ColumnType::Checkbox => CellValue::Checkbox(false),
            ColumnType::Date => CellValue::Date(String::new()),
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            CellValue::Text(_) => ColumnType::Text,
            CellValue::Number(_) => ColumnType::Number,
            CellValue::Select(_) => ColumnType::Select,
            CellValue::Checkbox(_) => ColumnType::Checkbox,
            CellValue::Date(_) => ColumnType::Date,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) | CellValue::Select(value) | CellValue::Date(value) => {
                Some(value.as_str())
            }
            CellValue::Number(_) | CellValue::Checkbox(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Checkbox(value) => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub id: String,
    pub value: CellValue,
}

impl Cell {
    pub fn new(row: RowId, column: ColumnId, value: CellValue) -> Self {
        Self {
            id: format!("{row}-{column}"),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub column_type: ColumnType,
    pub options: Option<Vec<String>>,
    pub width: u32,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            column_type,
            options: None,
            width: DEFAULT_COLUMN_WIDTH,
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn default_value(&self) -> CellValue {
        CellValue::default_for(self.column_type)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub cells: HashMap<ColumnId, Cell>,
}

impl Row {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            cells: HashMap::new(),
        }
    }

    /// Row with one default cell per column.
    pub fn with_defaults(id: RowId, columns: &[Column]) -> Self {
        let cells = columns
            .iter()
            .map(|column| (column.id, Cell::new(id, column.id, column.default_value())))
            .collect();
        Self { id, cells }
    }

    pub fn with_cell(mut self, column: impl Into<ColumnId>, value: CellValue) -> Self {
        let column = column.into();
        self.cells.insert(column, Cell::new(self.id, column, value));
        self
    }

    pub fn value(&self, column: ColumnId) -> Option<&CellValue> {
        self.cells.get(&column).map(|cell| &cell.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_column_type() {
        assert_eq!(CellValue::default_for(ColumnType::Text), CellValue::Text(String::new()));
        assert_eq!(CellValue::default_for(ColumnType::Number), CellValue::Number(0.0));
        assert_eq!(CellValue::default_for(ColumnType::Checkbox), CellValue::Checkbox(false));
        for column_type in ColumnType::ALL {
            assert_eq!(CellValue::default_for(column_type).column_type(), column_type);
        }
    }

    #[test]
    fn generator_is_seeded_past_existing_ids() {
        let columns = vec![
            Column::new(3, "A", ColumnType::Text),
            Column::new(7, "B", ColumnType::Text),
        ];
        let rows = vec![Row::new(2)];
        let mut ids = IdGenerator::seeded(&columns, &rows).expect("ids should seed");

        assert_eq!(ids.next_column_id(), Some(ColumnId(8)));
        assert_eq!(ids.next_column_id(), Some(ColumnId(9)));
        assert_eq!(ids.next_row_id(), Some(RowId(3)));
    }

    #[test]
    fn generator_stops_at_the_top_of_the_id_space() {
        let columns = vec![Column::new(u64::MAX, "A", ColumnType::Text)];
        assert_eq!(IdGenerator::seeded(&columns, &[]), None);

        let rows = vec![Row::new(u64::MAX - 1)];
        let mut ids = IdGenerator::seeded(&[], &rows).expect("ids should seed");
        assert_eq!(ids.next_row_id(), Some(RowId(u64::MAX)));
        assert_eq!(ids.next_row_id(), None);
        assert_eq!(ids.next_row_id(), None);
        assert_eq!(ids.next_column_id(), Some(ColumnId(1)));
    }

    #[test]
    fn cell_id_is_derived_from_row_and_column() {
        let row = Row::new(4).with_cell(9, CellValue::Text("x".to_string()));

        assert_eq!(row.cells[&ColumnId(9)].id, "4-9");
    }
}
