//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `RecordingRenderer` - Renderer that logs every draw call
//! - `SessionBuilder` - Builder for a state machine over a blank composite
//! - Event shorthands like `primary()` and `secondary()`

use corrmark::canvas::{CanvasCompositor, CompositeSurface};
use corrmark::hit_testing::HitTester;
use corrmark::input::{InteractionStateMachine, Transition};
use corrmark::render::Renderer;
use corrmark::settings::HitPolicy;
use corrmark::types::{Point2D, PointerEvent};
use image::RgbImage;

// ============================================================================
// RecordingRenderer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Marker(Point2D),
    Line(Point2D, Point2D),
    Highlight(Point2D),
    Restore,
    Present,
}

/// Renderer that records calls instead of drawing pixels.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls issued since the last restore, i.e. what is on screen.
    pub fn overlay(&self) -> Vec<DrawCall> {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == DrawCall::Restore)
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .copied()
            .filter(|c| *c != DrawCall::Present)
            .collect()
    }

    pub fn overlay_lines(&self) -> Vec<(Point2D, Point2D)> {
        self.overlay()
            .into_iter()
            .filter_map(|c| match c {
                DrawCall::Line(a, b) => Some((a, b)),
                _ => None,
            })
            .collect()
    }

    pub fn overlay_markers(&self) -> Vec<Point2D> {
        self.overlay()
            .into_iter()
            .filter_map(|c| match c {
                DrawCall::Marker(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| call(c)).count()
    }

    pub fn presents(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::Present))
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw_marker(&mut self, _surface: &mut CompositeSurface, at: Point2D) {
        self.calls.push(DrawCall::Marker(at));
    }

    fn draw_line(&mut self, _surface: &mut CompositeSurface, from: Point2D, to: Point2D) {
        self.calls.push(DrawCall::Line(from, to));
    }

    fn draw_highlight(&mut self, _surface: &mut CompositeSurface, at: Point2D) {
        self.calls.push(DrawCall::Highlight(at));
    }

    fn restore(&mut self, surface: &mut CompositeSurface, pristine: &CompositeSurface) {
        surface.clone_from(pristine);
        self.calls.push(DrawCall::Restore);
    }

    fn present(&mut self, _surface: &CompositeSurface) {
        self.calls.push(DrawCall::Present);
    }
}

// ============================================================================
// SessionBuilder
// ============================================================================

/// Builder for a session over two blank images.
///
/// Defaults to two 400x300 images, so the split boundary is at x = 400.
pub struct SessionBuilder {
    left: (u32, u32),
    right: (u32, u32),
    hit_tester: HitTester,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            left: (400, 300),
            right: (400, 300),
            hit_tester: HitTester::new(),
        }
    }

    pub fn with_sizes(mut self, left: (u32, u32), right: (u32, u32)) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    pub fn with_policy(mut self, policy: HitPolicy) -> Self {
        self.hit_tester = HitTester::with_policy(self.hit_tester.radius(), policy);
        self
    }

    pub fn build(self) -> InteractionStateMachine {
        let left = RgbImage::new(self.left.0, self.left.1);
        let right = RgbImage::new(self.right.0, self.right.1);
        InteractionStateMachine::with_hit_tester(CanvasCompositor::build(&left, &right), self.hit_tester)
    }
}

/// Default 400+400 session.
pub fn session() -> InteractionStateMachine {
    SessionBuilder::new().build()
}

// ============================================================================
// Event shorthands
// ============================================================================

pub fn primary(x: i32, y: i32) -> PointerEvent {
    PointerEvent::Primary(Point2D::new(x, y))
}

pub fn secondary(x: i32, y: i32) -> PointerEvent {
    PointerEvent::Secondary(Point2D::new(x, y))
}

pub fn p(x: i32, y: i32) -> Point2D {
    Point2D::new(x, y)
}

/// Feed events in order, panicking on any error.
pub fn run(
    machine: &mut InteractionStateMachine,
    renderer: &mut RecordingRenderer,
    events: &[PointerEvent],
) -> Vec<Transition> {
    events
        .iter()
        .map(|e| machine.handle(*e, renderer).expect("event should not fail"))
        .collect()
}

/// Commit `pairs` as (left, right) correspondences.
pub fn commit_pairs(
    machine: &mut InteractionStateMachine,
    renderer: &mut RecordingRenderer,
    pairs: &[(Point2D, Point2D)],
) {
    for (left, right) in pairs {
        run(
            machine,
            renderer,
            &[PointerEvent::Primary(*left), PointerEvent::Primary(*right)],
        );
    }
}
