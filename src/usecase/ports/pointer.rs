use std::fmt;

/// Global pointer-move / pointer-up listening that a resize gesture holds.
pub trait PointerCapture {
    fn release(&mut self);
}

/// Something that can start listening to the whole window's pointer events.
pub trait PointerListeners {
    fn attach(&self) -> CaptureGuard;
}

/// Keeps pointer listeners attached while alive; dropping it detaches them.
pub struct CaptureGuard {
    capture: Option<Box<dyn PointerCapture>>,
}

impl CaptureGuard {
    pub fn new(capture: impl PointerCapture + 'static) -> Self {
        Self {
            capture: Some(Box::new(capture)),
        }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        if let Some(mut capture) = self.capture.take() {
            capture.release();
        }
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("attached", &self.capture.is_some())
            .finish()
    }
}
