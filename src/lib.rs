//! In-memory, spreadsheet-like table editor.
//!
//! The grid state machine lives under [`usecase::services`]: a
//! [`GridStateStore`](usecase::services::grid_store::GridStateStore) holding
//! columns and rows, an edit-focus controller, and a column-resize controller,
//! all driven through [`TableEditor`](usecase::services::table_editor::TableEditor).
//! The Dioxus shell in [`ui`] renders it.

pub mod config;
pub mod domain;
pub mod logging;
pub mod platform;
pub mod ui;
pub mod usecase;
