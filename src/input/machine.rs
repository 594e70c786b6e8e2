//! Interaction state machine - pairing, pick-up and relocation.
//!
//! Every pointer event runs to completion here: classify the side, update
//! the state and store, then issue draw calls and a single `present`.
//! Events that do not apply in the current state come back as
//! [`Transition::Ignored`] and leave everything untouched.

use super::InteractionState;
use crate::canvas::{Composite, CompositeSurface, SplitBoundary, surface_contains};
use crate::correspondence::CorrespondenceStore;
use crate::error::{CorrespondenceError, CorrespondenceResult};
use crate::hit_testing::HitTester;
use crate::profile_scope;
use crate::render::Renderer;
use crate::settings::Settings;
use crate::types::{Point2D, PointerEvent, Side};
use tracing::{debug, info};

/// Observable outcome of one handled event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// First half of a pair placed
    Selected { side: Side, index: usize },
    /// Second half placed and the pair connected
    Committed { index: usize, left: Point2D, right: Point2D },
    /// A stored point was picked up for relocation
    DragArmed { side: Side, index: usize },
    /// The armed point moved and the overlay was rebuilt
    Relocated { side: Side, index: usize, from: Point2D, to: Point2D },
    /// The event does not apply in the current state
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// Why an event was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Position is not on the composite surface
    OutOfBounds,
    /// A point on this side is already waiting for its counterpart
    SideAlreadyPending,
    /// Relocation must land on the side the point was picked from
    WrongDragSide,
    /// Pick-up is only possible with no selection or relocation in flight
    Busy,
    /// Pick-up needs points on both sides
    NothingToPick,
    /// No stored point within the hit neighborhood
    NoPointNearby,
}

pub struct InteractionStateMachine {
    state: InteractionState,
    store: CorrespondenceStore,
    hit_tester: HitTester,
    split: SplitBoundary,
    pristine: CompositeSurface,
    surface: CompositeSurface,
}

impl InteractionStateMachine {
    /// Start a session on `composite`. The machine takes ownership of the
    /// surface and keeps an untouched copy for full redraws.
    pub fn new(composite: Composite, settings: &Settings) -> Self {
        Self::with_hit_tester(composite, HitTester::from_settings(settings))
    }

    pub fn with_hit_tester(composite: Composite, hit_tester: HitTester) -> Self {
        let Composite { surface, split } = composite;
        Self {
            state: InteractionState::default(),
            store: CorrespondenceStore::new(),
            hit_tester,
            split,
            pristine: surface.clone(),
            surface,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn store(&self) -> &CorrespondenceStore {
        &self.store
    }

    pub fn surface(&self) -> &CompositeSurface {
        &self.surface
    }

    pub fn pristine(&self) -> &CompositeSurface {
        &self.pristine
    }

    /// Process one pointer event.
    pub fn handle<R: Renderer + ?Sized>(
        &mut self,
        event: PointerEvent,
        renderer: &mut R,
    ) -> CorrespondenceResult<Transition> {
        profile_scope!("handle_pointer_event");

        let at = event.position();
        if !surface_contains(&self.surface, at) {
            return Ok(self.ignore(event, IgnoreReason::OutOfBounds));
        }
        let side = self.split.side_of(at.x);

        let transition = match event {
            PointerEvent::Primary(_) => self.on_primary(side, at, renderer)?,
            PointerEvent::Secondary(_) => self.on_secondary(side, at, renderer),
        };

        if let Transition::Ignored(reason) = transition {
            return Ok(self.ignore(event, reason));
        }
        debug!(?event, ?transition, state = ?self.state, "Handled pointer event");
        Ok(transition)
    }

    fn ignore(&self, event: PointerEvent, reason: IgnoreReason) -> Transition {
        debug!(?event, ?reason, state = ?self.state, "Ignored pointer event");
        Transition::Ignored(reason)
    }

    fn on_primary<R: Renderer + ?Sized>(
        &mut self,
        side: Side,
        at: Point2D,
        renderer: &mut R,
    ) -> CorrespondenceResult<Transition> {
        match self.state {
            InteractionState::Idle => Ok(self.select(side, at, renderer)),
            InteractionState::Pending { side: pending } if pending == side => {
                Ok(Transition::Ignored(IgnoreReason::SideAlreadyPending))
            }
            InteractionState::Pending { .. } => self.commit(side, at, renderer),
            InteractionState::DragArmed { side: armed, index } if armed == side => {
                self.relocate(side, index, at, renderer)
            }
            InteractionState::DragArmed { .. } => Ok(Transition::Ignored(IgnoreReason::WrongDragSide)),
        }
    }

    fn on_secondary<R: Renderer + ?Sized>(
        &mut self,
        side: Side,
        at: Point2D,
        renderer: &mut R,
    ) -> Transition {
        if !self.state.is_idle() {
            return Transition::Ignored(IgnoreReason::Busy);
        }
        if !self.store.has_both_sides() {
            return Transition::Ignored(IgnoreReason::NothingToPick);
        }

        debug!(?side, %at, "Searching for a stored point");
        let Some(index) = self.hit_tester.find_near(&self.store, side, at) else {
            return Transition::Ignored(IgnoreReason::NoPointNearby);
        };

        let picked = self.store.points(side)[index];
        renderer.draw_highlight(&mut self.surface, picked);
        renderer.present(&self.surface);

        info!(?side, index, point = %picked, "Point armed for relocation");
        self.state = InteractionState::DragArmed { side, index };
        Transition::DragArmed { side, index }
    }

    fn select<R: Renderer + ?Sized>(&mut self, side: Side, at: Point2D, renderer: &mut R) -> Transition {
        let index = self.store.append(side, at);
        renderer.draw_marker(&mut self.surface, at);
        renderer.present(&self.surface);

        self.state = InteractionState::Pending { side };
        Transition::Selected { side, index }
    }

    fn commit<R: Renderer + ?Sized>(
        &mut self,
        side: Side,
        at: Point2D,
        renderer: &mut R,
    ) -> CorrespondenceResult<Transition> {
        self.store.append(side, at);
        renderer.draw_marker(&mut self.surface, at);

        let (left, right) = self.store.last_pair().ok_or_else(|| {
            CorrespondenceError::InternalInvariant(
                "committing a pair with an empty point sequence".to_string(),
            )
        })?;
        renderer.draw_line(&mut self.surface, left, right);
        renderer.present(&self.surface);

        let index = self.store.committed_pair_count() - 1;
        info!(index, %left, %right, "Committed correspondence");
        self.state = InteractionState::Idle;
        Ok(Transition::Committed { index, left, right })
    }

    fn relocate<R: Renderer + ?Sized>(
        &mut self,
        side: Side,
        index: usize,
        to: Point2D,
        renderer: &mut R,
    ) -> CorrespondenceResult<Transition> {
        let stale = |e: CorrespondenceError| {
            CorrespondenceError::InternalInvariant(format!("stale drag target: {e}"))
        };
        let from = self
            .store
            .points(side)
            .get(index)
            .copied()
            .ok_or_else(|| stale(CorrespondenceError::IndexOutOfRange {
                side,
                index,
                len: self.store.len(side),
            }))?;
        self.store.set(side, index, to).map_err(stale)?;
        self.state = InteractionState::Idle;

        info!(?side, index, %from, %to, "Relocated point, rebuilding overlay");
        self.redraw(renderer);
        Ok(Transition::Relocated { side, index, from, to })
    }

    /// Restore the pristine composite and draw every committed pair in
    /// index order, then present.
    pub fn redraw<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        profile_scope!("redraw");

        renderer.restore(&mut self.surface, &self.pristine);
        for (left, right) in self.store.all_pairs() {
            renderer.draw_marker(&mut self.surface, left);
            renderer.draw_marker(&mut self.surface, right);
            renderer.draw_line(&mut self.surface, left, right);
        }
        renderer.present(&self.surface);
    }
}
