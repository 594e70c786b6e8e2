//! Application lifecycle - view construction and the session entry point.

use super::{CorrMarker, SessionFailure};
use crate::canvas::Composite;
use crate::constants::WINDOW_TITLE;
use crate::error::{CorrespondenceError, CorrespondenceResult};
use crate::input::InteractionStateMachine;
use crate::render::FramePresenter;
use crate::settings::Settings;
use gpui::*;

impl CorrMarker {
    pub fn new(
        composite: Composite,
        settings: &Settings,
        failure: SessionFailure,
        cx: &mut Context<Self>,
    ) -> Self {
        let frame = FramePresenter::render_image(&composite.surface);
        Self {
            machine: InteractionStateMachine::new(composite, settings),
            presenter: FramePresenter::new(settings.marker.clone()),
            frame,
            focus_handle: cx.focus_handle(),
            failure,
        }
    }
}

/// Open the session window and block until it closes.
///
/// Returns the first fatal error raised while the window was open.
pub fn run_session(composite: Composite, settings: Settings) -> CorrespondenceResult<()> {
    let failure = SessionFailure::default();
    let outcome = failure.clone();
    let width = composite.width() as f32;
    let height = composite.height() as f32;

    tracing::info!(
        width = composite.width(),
        height = composite.height(),
        split = composite.split.x(),
        "Starting marking session"
    );

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(WINDOW_TITLE.into()),
                ..Default::default()
            }),
            is_resizable: false,
            ..Default::default()
        };

        let window_failure = failure.clone();
        let opened = cx.open_window(options, move |window, cx| {
            cx.new(|cx| {
                let view = CorrMarker::new(composite, &settings, window_failure, cx);
                window.focus(&view.focus_handle);
                view
            })
        });

        if let Err(e) = opened {
            failure.record(CorrespondenceError::Window(e.to_string()));
            cx.quit();
            return;
        }

        cx.on_window_closed(|cx| {
            tracing::info!("Window closed, ending session");
            cx.quit();
        })
        .detach();
        cx.activate(true);
    });

    match outcome.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
