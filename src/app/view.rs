//! View rendering and raw input mapping.
//!
//! A left-button double click becomes `PointerEvent::Primary`, a right-button
//! press becomes `PointerEvent::Secondary`. Any key press ends the session.

use super::CorrMarker;
use crate::input::coords::CoordinateConverter;
use crate::types::PointerEvent;
use gpui::*;

impl CorrMarker {
    fn dispatch(&mut self, event: PointerEvent, window: &mut Window, cx: &mut Context<Self>) {
        match self.machine.handle(event, &mut self.presenter) {
            Ok(transition) if transition.is_ignored() => return,
            Ok(_) => {}
            Err(err) => {
                tracing::error!(%err, "Ending session");
                self.failure.record(err);
                cx.quit();
                return;
            }
        }

        if let Some(frame) = self.presenter.take_frame() {
            let previous = std::mem::replace(&mut self.frame, frame);
            if let Err(e) = window.drop_image(previous) {
                tracing::debug!("Failed to release previous frame: {e}");
            }
            cx.notify();
        }
    }

    fn on_primary_button(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        if event.click_count != 2 {
            return;
        }
        let at = CoordinateConverter::window_to_surface(event.position);
        tracing::debug!(%at, "Left button double clicked");
        self.dispatch(PointerEvent::Primary(at), window, cx);
    }

    fn on_secondary_button(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let at = CoordinateConverter::window_to_surface(event.position);
        tracing::debug!(%at, "Right button clicked");
        self.dispatch(PointerEvent::Secondary(at), window, cx);
    }
}

impl Render for CorrMarker {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (width, height) = self.machine.surface().dimensions();

        div()
            .track_focus(&self.focus_handle)
            .size_full()
            .bg(black())
            .on_key_down(cx.listener(|_, event: &KeyDownEvent, _, cx| {
                tracing::info!(key = %event.keystroke.key, "Key pressed, ending session");
                cx.quit();
            }))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_primary_button))
            .on_mouse_down(MouseButton::Right, cx.listener(Self::on_secondary_button))
            .child(
                img(self.frame.clone())
                    .w(px(width as f32))
                    .h(px(height as f32)),
            )
    }
}
