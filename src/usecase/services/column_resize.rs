use tracing::debug;

use crate::domain::entities::resize::ResizeGesture;
use crate::domain::entities::table::{ColumnId, MIN_COLUMN_WIDTH};
use crate::usecase::ports::pointer::{CaptureGuard, PointerListeners};

#[derive(Debug, Default)]
enum ResizeState {
    #[default]
    Idle,
    Resizing {
        gesture: ResizeGesture,
        _capture: CaptureGuard,
    },
}

/// Drives a column-width drag from press to release.
///
/// The pointer listeners stay attached exactly as long as the gesture: the
/// guard lives inside the `Resizing` state and is dropped with it.
#[derive(Debug)]
pub struct ColumnResizeController {
    state: ResizeState,
    min_width: u32,
}

impl Default for ColumnResizeController {
    fn default() -> Self {
        Self::new(MIN_COLUMN_WIDTH)
    }
}

impl ColumnResizeController {
    pub fn new(min_width: u32) -> Self {
        Self {
            state: ResizeState::Idle,
            min_width,
        }
    }

    pub fn gesture(&self) -> Option<ResizeGesture> {
        match &self.state {
            ResizeState::Resizing { gesture, .. } => Some(*gesture),
            ResizeState::Idle => None,
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.gesture().is_some()
    }

    /// Starts a drag. Ignored while another drag is in progress.
    pub fn begin_resizing(
        &mut self,
        column: ColumnId,
        pointer_x: f64,
        start_width: u32,
        listeners: &dyn PointerListeners,
    ) -> bool {
        if self.is_resizing() {
            debug!(%column, "resize already in progress");
            return false;
        }
        let gesture = ResizeGesture {
            column,
            start_x: pointer_x,
            start_width,
        };
        self.state = ResizeState::Resizing {
            gesture,
            _capture: listeners.attach(),
        };
        debug!(%column, pointer_x, start_width, "resize started");
        true
    }

    /// Width for the active column at pointer `x`, if a drag is active.
    pub fn pointer_moved(&self, x: f64) -> Option<(ColumnId, u32)> {
        self.gesture()
            .map(|gesture| (gesture.column, gesture.width_at(x, self.min_width)))
    }

    pub fn pointer_released(&mut self) {
        if let ResizeState::Resizing { gesture, .. } = std::mem::take(&mut self.state) {
            debug!(column = %gesture.column, "resize finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::ports::pointer::testing::CountingListeners;

    #[test]
    fn move_computes_clamped_width() {
        let listeners = CountingListeners::default();
        let mut resize = ColumnResizeController::default();
        resize.begin_resizing(ColumnId(1), 300.0, 150, &listeners);

        assert_eq!(resize.pointer_moved(300.0), Some((ColumnId(1), 150)));
        assert_eq!(resize.pointer_moved(350.0), Some((ColumnId(1), 200)));
        assert_eq!(resize.pointer_moved(100.0), Some((ColumnId(1), 80)));
    }

    #[test]
    fn move_without_gesture_does_nothing() {
        let resize = ColumnResizeController::default();

        assert_eq!(resize.pointer_moved(10.0), None);
    }

    #[test]
    fn second_gesture_is_refused_while_active() {
        let listeners = CountingListeners::default();
        let mut resize = ColumnResizeController::default();

        assert!(resize.begin_resizing(ColumnId(1), 0.0, 150, &listeners));
        assert!(!resize.begin_resizing(ColumnId(2), 0.0, 150, &listeners));

        assert_eq!(resize.gesture().map(|g| g.column), Some(ColumnId(1)));
        assert_eq!(listeners.attach_calls.get(), 1);
    }

    #[test]
    fn release_detaches_listeners() {
        let listeners = CountingListeners::default();
        let mut resize = ColumnResizeController::default();
        resize.begin_resizing(ColumnId(1), 0.0, 150, &listeners);
        assert_eq!(listeners.attached.get(), 1);

        resize.pointer_released();

        assert_eq!(listeners.attached.get(), 0);
        assert!(!resize.is_resizing());

        resize.pointer_released();
        assert_eq!(listeners.attached.get(), 0);
    }

    #[test]
    fn teardown_detaches_listeners() {
        let listeners = CountingListeners::default();
        {
            let mut resize = ColumnResizeController::default();
            resize.begin_resizing(ColumnId(1), 0.0, 150, &listeners);
        }
        assert_eq!(listeners.attached.get(), 0);
    }
}
