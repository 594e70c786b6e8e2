//! Application state - the CorrMarker view and what it owns.

use crate::error::CorrespondenceError;
use crate::input::InteractionStateMachine;
use crate::render::FramePresenter;
use gpui::{FocusHandle, RenderImage};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Window view for one marking session.
///
/// All interaction state lives in `machine`; the view only translates input
/// and shows whatever the presenter last produced.
pub struct CorrMarker {
    /// Store, state and surface of the session
    pub(super) machine: InteractionStateMachine,
    /// Renderer the machine draws through
    pub(super) presenter: FramePresenter,
    /// Frame currently shown in the window
    pub(super) frame: Arc<RenderImage>,
    /// Receives key presses that end the session
    pub(super) focus_handle: FocusHandle,
    /// Where a fatal error is left for the caller of `run_session`
    pub(super) failure: SessionFailure,
}

/// Slot carrying a fatal session error out of the event loop.
///
/// The gpui loop runs on the calling thread, so shared ownership without
/// locking is enough.
#[derive(Clone, Default)]
pub struct SessionFailure(Rc<RefCell<Option<CorrespondenceError>>>);

impl SessionFailure {
    /// Keep the first error; later ones are only logged.
    pub fn record(&self, error: CorrespondenceError) {
        let mut slot = self.0.borrow_mut();
        if slot.is_none() {
            *slot = Some(error);
        } else {
            tracing::error!(%error, "Additional session failure");
        }
    }

    pub fn take(&self) -> Option<CorrespondenceError> {
        self.0.borrow_mut().take()
    }
}
