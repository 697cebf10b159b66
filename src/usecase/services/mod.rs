pub mod column_resize;
pub mod display;
pub mod edit_focus;
pub mod grid_store;
pub mod input;
pub mod table_editor;
