use crate::domain::entities::table::MIN_COLUMN_WIDTH;
use crate::usecase::services::display::BadgeTone;

pub const MENU_STYLE: &str = "position: absolute; top: 100%; min-width: 200px; background: #fff; border: 1px solid #ddd; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; padding: 4px; font-weight: normal;";
pub const MENU_ITEM_STYLE: &str =
    "padding: 6px 10px; cursor: pointer; border-radius: 4px; white-space: nowrap;";
pub const MENU_DANGER_ITEM_STYLE: &str =
    "padding: 6px 10px; cursor: pointer; border-radius: 4px; white-space: nowrap; color: #dc2626;";
pub const MENU_SEPARATOR_STYLE: &str = "height: 1px; background: #eee; margin: 4px 0;";
pub const ICON_BUTTON_STYLE: &str = "border: none; background: transparent; padding: 0 4px; cursor: pointer; color: #888;";
pub const INLINE_INPUT_STYLE: &str = "border: none; background: transparent; padding: 0; width: 100%; font: inherit; outline: 2px solid #93c5fd;";
pub const CAPTURE_OVERLAY_STYLE: &str =
    "position: fixed; top: 0; left: 0; right: 0; bottom: 0; cursor: col-resize; z-index: 2000;";
pub const RESIZE_HANDLE_STYLE: &str =
    "position: absolute; right: 0; top: 0; bottom: 0; width: 4px; cursor: col-resize;";

pub fn root_container_style() -> &'static str {
    "max-width: 72rem; margin: 0 auto; padding: 24px; height: 100vh; box-sizing: border-box; display: flex; flex-direction: column; font-family: system-ui, sans-serif;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #e5e7eb; border-radius: 8px;"
}

pub fn table_header_cell_style(width: u32) -> String {
    format!(
        "position: sticky; top: 0; z-index: 1; background: #f9fafb; text-align: left; padding: 12px; font-weight: 500; width: {width}px; min-width: {MIN_COLUMN_WIDTH}px; border-bottom: 1px solid #e5e7eb;"
    )
}

pub fn body_cell_style() -> &'static str {
    "padding: 12px; cursor: pointer; border-bottom: 1px solid #e5e7eb; overflow: hidden; text-overflow: ellipsis;"
}

pub fn row_style(row_index: usize) -> &'static str {
    if row_index % 2 == 0 {
        "background: #fff;"
    } else {
        "background: #f9fafb;"
    }
}

pub fn badge_style(tone: BadgeTone) -> String {
    let (background, foreground) = tone.colors();
    format!(
        "display: inline-flex; align-items: center; padding: 2px 8px; border-radius: 6px; font-size: 12px; font-weight: 500; background: {background}; color: {foreground};"
    )
}
