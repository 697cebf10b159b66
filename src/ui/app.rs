use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use crate::domain::entities::edit::EditTarget;
use crate::domain::entities::table::{CellValue, Column, ColumnId, ColumnType, RowId};
use crate::ui::state::app_state::{AppState, MenuId, OverlayListeners};
use crate::ui::style::{
    badge_style, body_cell_style, root_container_style, row_style, table_container_style,
    table_header_cell_style, CAPTURE_OVERLAY_STYLE, ICON_BUTTON_STYLE, INLINE_INPUT_STYLE,
    MENU_DANGER_ITEM_STYLE, MENU_ITEM_STYLE, MENU_SEPARATOR_STYLE, MENU_STYLE,
    RESIZE_HANDLE_STYLE,
};
use crate::usecase::services::display::{badge_tone, format_cell, format_date, format_number};
use crate::usecase::services::input::{date_value, parse_date};
use crate::usecase::services::table_editor::TableEditor;

fn toggle_menu(mut open_menu: Signal<Option<MenuId>>, id: MenuId) {
    let next = if open_menu() == Some(id) { None } else { Some(id) };
    open_menu.set(next);
}

fn column_type_menu_label(column_type: ColumnType) -> String {
    format!("{}  {}", column_type.icon(), column_type.label())
}

fn handle_edit_key(mut editor: Signal<TableEditor>, key: Key) {
    match key {
        Key::Enter => editor.write().commit_edit(),
        Key::Escape => editor.write().cancel_edit(),
        _ => {}
    }
}

#[component]
pub fn App() -> Element {
    let AppState {
        mut editor,
        capture_active,
        mut open_menu,
    } = AppState::new();
    let listeners = OverlayListeners {
        active: capture_active,
    };

    let snapshot = editor.read();
    let columns = snapshot.columns().to_vec();
    let rows = snapshot.rows().to_vec();
    let target = snapshot.edit_target();
    let title = snapshot.config().title.clone();
    let subtitle = snapshot.config().subtitle.clone();
    drop(snapshot);

    rsx! {
        div {
            style: root_container_style(),
            onclick: move |_| open_menu.set(None),
            onmouseup: move |_| {
                if capture_active() {
                    editor.write().pointer_released();
                }
            },
            div {
                style: "margin-bottom: 24px;",
                h1 { style: "font-size: 24px; font-weight: 600; margin: 0 0 8px 0;", "{title}" }
                p { style: "color: #6b7280; margin: 0;", "{subtitle}" }
            }
            div {
                style: table_container_style(),
                table {
                    style: "border-collapse: collapse; table-layout: fixed; width: 100%;",
                    thead {
                        tr {
                            for column in columns.iter() {
                                ColumnHeader {
                                    key: "{column.id}",
                                    editing: target == EditTarget::ColumnHeader(column.id),
                                    column: column.clone(),
                                    editor,
                                    open_menu,
                                    listeners,
                                }
                            }
                            th {
                                style: "width: 48px; padding: 12px; position: relative;",
                                AddColumnMenu { editor, open_menu }
                            }
                        }
                    }
                    tbody {
                        for (row_index, row) in rows.iter().enumerate() {
                            tr {
                                key: "{row.id}",
                                style: row_style(row_index),
                                for column in columns.iter() {
                                    BodyCell {
                                        key: "{column.id}",
                                        row_id: row.id,
                                        value: row
                                            .value(column.id)
                                            .cloned()
                                            .unwrap_or_else(|| column.default_value()),
                                        editing: target
                                            == EditTarget::Cell {
                                                row: row.id,
                                                column: column.id,
                                            },
                                        column: column.clone(),
                                        editor,
                                    }
                                }
                                td {
                                    style: "width: 48px; padding: 12px; position: relative;",
                                    RowMenu { row_id: row.id, editor, open_menu }
                                }
                            }
                        }
                    }
                }
                div {
                    style: "padding: 12px; border-top: 1px solid #e5e7eb;",
                    button {
                        style: "border: none; background: transparent; color: #6b7280; cursor: pointer;",
                        onclick: move |_| {
                            editor.write().add_row();
                        },
                        "+ Add Row"
                    }
                }
            }
            if capture_active() {
                div {
                    style: CAPTURE_OVERLAY_STYLE,
                    onmousemove: move |event| {
                        let held = event.held_buttons().contains(MouseButton::Primary);
                        editor.write().pointer_dragged(event.client_coordinates().x, held);
                    },
                    onmouseup: move |_| editor.write().pointer_released(),
                }
            }
        }
    }
}

#[component]
fn ColumnHeader(
    column: Column,
    editing: bool,
    mut editor: Signal<TableEditor>,
    open_menu: Signal<Option<MenuId>>,
    listeners: OverlayListeners,
) -> Element {
    let column_id = column.id;
    let icon = column.column_type.icon();
    let name = column.name.clone();
    let menu_open = open_menu() == Some(MenuId::Column(column_id));
    let header_style = table_header_cell_style(column.width);

    rsx! {
        th {
            style: "{header_style}",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                span { style: "color: #9ca3af;", "{icon}" }
                if editing {
                    input {
                        style: INLINE_INPUT_STYLE,
                        value: "{name}",
                        onmounted: move |event| async move {
                            let _ = event.data().set_focus(true).await;
                        },
                        oninput: move |event| editor.write().type_text(&event.value()),
                        onblur: move |_| editor.write().blur_edit(),
                        onkeydown: move |event| handle_edit_key(editor, event.key()),
                    }
                } else {
                    span {
                        style: "cursor: pointer; flex: 1;",
                        onclick: move |event| {
                            event.stop_propagation();
                            editor.write().activate_column_header(column_id);
                        },
                        "{name}"
                    }
                }
                button {
                    style: ICON_BUTTON_STYLE,
                    onclick: move |event| {
                        event.stop_propagation();
                        toggle_menu(open_menu, MenuId::Column(column_id));
                    },
                    "⋯"
                }
            }
            if menu_open {
                ColumnMenu { column_id, editor, open_menu }
            }
            div {
                style: RESIZE_HANDLE_STYLE,
                onmousedown: move |event| {
                    event.prevent_default();
                    event.stop_propagation();
                    let x = event.client_coordinates().x;
                    editor.write().press_resize_handle(column_id, x, &listeners);
                },
            }
        }
    }
}

#[component]
fn ColumnMenu(
    column_id: ColumnId,
    mut editor: Signal<TableEditor>,
    mut open_menu: Signal<Option<MenuId>>,
) -> Element {
    rsx! {
        div {
            style: MENU_STYLE,
            onclick: move |event| event.stop_propagation(),
            div {
                style: MENU_ITEM_STYLE,
                onclick: move |_| {
                    editor.write().insert_column_before(column_id);
                    open_menu.set(None);
                },
                "+ Insert Column Before"
            }
            div {
                style: MENU_ITEM_STYLE,
                onclick: move |_| {
                    editor.write().insert_column_after(column_id);
                    open_menu.set(None);
                },
                "+ Insert Column After"
            }
            div { style: MENU_SEPARATOR_STYLE }
            div {
                style: MENU_DANGER_ITEM_STYLE,
                onclick: move |_| {
                    editor.write().delete_column(column_id);
                    open_menu.set(None);
                },
                "Delete Column"
            }
        }
    }
}

#[component]
fn AddColumnMenu(mut editor: Signal<TableEditor>, mut open_menu: Signal<Option<MenuId>>) -> Element {
    let is_open = open_menu() == Some(MenuId::AddColumn);

    rsx! {
        button {
            style: ICON_BUTTON_STYLE,
            onclick: move |event| {
                event.stop_propagation();
                toggle_menu(open_menu, MenuId::AddColumn);
            },
            "+"
        }
        if is_open {
            div {
                style: "{MENU_STYLE} right: 0;",
                onclick: move |event| event.stop_propagation(),
                for (column_type, label) in ColumnType::ALL.into_iter().map(|t| (t, column_type_menu_label(t))) {
                    div {
                        key: "{label}",
                        style: MENU_ITEM_STYLE,
                        onclick: move |_| {
                            editor.write().add_column(column_type);
                            open_menu.set(None);
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}

#[component]
fn RowMenu(row_id: RowId, mut editor: Signal<TableEditor>, mut open_menu: Signal<Option<MenuId>>) -> Element {
    let is_open = open_menu() == Some(MenuId::Row(row_id));

    rsx! {
        button {
            style: ICON_BUTTON_STYLE,
            onclick: move |event| {
                event.stop_propagation();
                toggle_menu(open_menu, MenuId::Row(row_id));
            },
            "⋯"
        }
        if is_open {
            div {
                style: "{MENU_STYLE} right: 0;",
                onclick: move |event| event.stop_propagation(),
                div {
                    style: MENU_ITEM_STYLE,
                    onclick: move |_| {
                        editor.write().insert_row_above(row_id);
                        open_menu.set(None);
                    },
                    "↑ Insert Row Above"
                }
                div {
                    style: MENU_ITEM_STYLE,
                    onclick: move |_| {
                        editor.write().insert_row_below(row_id);
                        open_menu.set(None);
                    },
                    "↓ Insert Row Below"
                }
                div { style: MENU_SEPARATOR_STYLE }
                div {
                    style: MENU_DANGER_ITEM_STYLE,
                    onclick: move |_| {
                        editor.write().delete_row(row_id);
                        open_menu.set(None);
                    },
                    "Delete Row"
                }
            }
        }
    }
}

#[component]
fn BodyCell(
    row_id: RowId,
    column: Column,
    value: CellValue,
    editing: bool,
    mut editor: Signal<TableEditor>,
) -> Element {
    let column_id = column.id;

    rsx! {
        td {
            style: body_cell_style(),
            onclick: move |_| editor.write().activate_cell(row_id, column_id),
            if editing {
                CellEditor { column, value, editor }
            } else {
                CellView { value }
            }
        }
    }
}

#[component]
fn CellEditor(column: Column, value: CellValue, mut editor: Signal<TableEditor>) -> Element {
    match column.column_type {
        ColumnType::Text | ColumnType::Number => {
            let (input_type, text) = match &value {
                CellValue::Number(number) => ("number", format_number(*number)),
                other => ("text", other.as_str().unwrap_or_default().to_string()),
            };
            rsx! {
                input {
                    style: INLINE_INPUT_STYLE,
                    r#type: input_type,
                    value: "{text}",
                    onmounted: move |event| async move {
                        let _ = event.data().set_focus(true).await;
                    },
                    oninput: move |event| editor.write().type_text(&event.value()),
                    onblur: move |_| editor.write().blur_edit(),
                    onkeydown: move |event| handle_edit_key(editor, event.key()),
                }
            }
        }
        ColumnType::Select => {
            let current = value.as_str().unwrap_or_default().to_string();
            let options = column.options.clone().unwrap_or_default();
            rsx! {
                select {
                    style: INLINE_INPUT_STYLE,
                    onmounted: move |event| async move {
                        let _ = event.data().set_focus(true).await;
                    },
                    onchange: move |event| editor.write().choose_option(event.value()),
                    onblur: move |_| editor.write().blur_edit(),
                    onkeydown: move |event| handle_edit_key(editor, event.key()),
                    option { value: "", selected: current.is_empty(), disabled: true, "" }
                    for option_value in options {
                        option {
                            key: "{option_value}",
                            value: "{option_value}",
                            selected: option_value == current,
                            "{option_value}"
                        }
                    }
                }
            }
        }
        ColumnType::Date => {
            let current = value
                .as_str()
                .and_then(parse_date)
                .map(date_value)
                .unwrap_or_default();
            rsx! {
                input {
                    style: INLINE_INPUT_STYLE,
                    r#type: "date",
                    value: "{current}",
                    onmounted: move |event| async move {
                        let _ = event.data().set_focus(true).await;
                    },
                    onchange: move |event| editor.write().choose_date(parse_date(&event.value())),
                    onblur: move |_| editor.write().blur_edit(),
                    onkeydown: move |event| handle_edit_key(editor, event.key()),
                }
            }
        }
        ColumnType::Checkbox => rsx! {
            CellView { value }
        },
    }
}

#[component]
fn CellView(value: CellValue) -> Element {
    match &value {
        CellValue::Checkbox(checked) => rsx! {
            input { r#type: "checkbox", checked: *checked, style: "pointer-events: none;" }
        },
        CellValue::Select(choice) if !choice.is_empty() => {
            let style = badge_style(badge_tone(choice));
            rsx! {
                span { style: "{style}", "{choice}" }
            }
        }
        CellValue::Date(raw) => {
            let formatted = format_date(raw);
            rsx! {
                span {
                    style: "display: inline-flex; align-items: center; gap: 8px;",
                    span { style: "color: #9ca3af;", "📅" }
                    "{formatted}"
                }
            }
        }
        other => {
            let formatted = format_cell(other);
            rsx! {
                span { "{formatted}" }
            }
        }
    }
}
