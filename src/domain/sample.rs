//! Built-in content shown when the table is opened without data.

use crate::domain::entities::table::{CellValue, Column, ColumnType, Row};

pub fn sample_columns() -> Vec<Column> {
    vec![
        Column::new(1, "Name", ColumnType::Text).with_width(200),
        Column::new(2, "Status", ColumnType::Select)
            .with_options(["Not Started", "In Progress", "Complete"])
            .with_width(150),
        Column::new(3, "Priority", ColumnType::Select)
            .with_options(["Low", "Medium", "High"])
            .with_width(120),
        Column::new(4, "Done", ColumnType::Checkbox).with_width(80),
        Column::new(5, "Due Date", ColumnType::Date).with_width(150),
    ]
}

pub fn sample_rows() -> Vec<Row> {
    vec![
        task_row(1, "Task 1", "In Progress", "High", false),
        task_row(2, "Task 2", "Complete", "Medium", true),
    ]
}

fn task_row(id: u64, name: &str, status: &str, priority: &str, done: bool) -> Row {
    Row::new(id)
        .with_cell(1, CellValue::Text(name.to_string()))
        .with_cell(2, CellValue::Select(status.to_string()))
        .with_cell(3, CellValue::Select(priority.to_string()))
        .with_cell(4, CellValue::Checkbox(done))
        .with_cell(5, CellValue::Date(String::new()))
}
