use dioxus::prelude::*;

use crate::domain::entities::table::{ColumnId, RowId};
use crate::usecase::ports::pointer::{CaptureGuard, PointerCapture, PointerListeners};
use crate::usecase::services::table_editor::TableEditor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuId {
    Column(ColumnId),
    Row(RowId),
    AddColumn,
}

pub struct AppState {
    pub editor: Signal<TableEditor>,
    pub capture_active: Signal<bool>,
    pub open_menu: Signal<Option<MenuId>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            editor: use_signal(TableEditor::sample),
            capture_active: use_signal(|| false),
            open_menu: use_signal(|| None::<MenuId>),
        }
    }
}

/// Window-wide pointer capture backed by a full-screen overlay that is only
/// rendered while `active` is set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayListeners {
    pub active: Signal<bool>,
}

struct OverlayCapture {
    active: Signal<bool>,
}

impl PointerCapture for OverlayCapture {
    fn release(&mut self) {
        // The signal may already be gone when the component unmounts.
        if let Ok(mut active) = self.active.try_write() {
            *active = false;
        }
    }
}

impl PointerListeners for OverlayListeners {
    fn attach(&self) -> CaptureGuard {
        let mut active = self.active;
        active.set(true);
        CaptureGuard::new(OverlayCapture { active })
    }
}
