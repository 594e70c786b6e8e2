//! Hit testing - re-selecting a stored point near a click.
//!
//! A stored point matches when both coordinate deltas to the query are
//! within the radius, i.e. a square neighborhood rather than a circle.
//! When several points match, the configured [`HitPolicy`] picks one.

use crate::constants::DEFAULT_HIT_RADIUS;
use crate::correspondence::CorrespondenceStore;
use crate::settings::{HitPolicy, Settings};
use crate::types::{Point2D, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTester {
    radius: i32,
    policy: HitPolicy,
}

impl HitTester {
    pub fn new() -> Self {
        Self {
            radius: DEFAULT_HIT_RADIUS,
            policy: HitPolicy::default(),
        }
    }

    pub fn with_policy(radius: i32, policy: HitPolicy) -> Self {
        Self { radius, policy }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_policy(settings.hit_radius, settings.hit_policy)
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn policy(&self) -> HitPolicy {
        self.policy
    }

    /// Index of the stored point on `side` that `query` re-selects, if any.
    pub fn find_near(&self, store: &CorrespondenceStore, side: Side, query: Point2D) -> Option<usize> {
        self.find_in(store.points(side), query)
    }

    /// Same as [`find_near`](Self::find_near) over a bare slice.
    pub fn find_in(&self, points: &[Point2D], query: Point2D) -> Option<usize> {
        let mut candidates = points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.within_box(query, self.radius));

        match self.policy {
            HitPolicy::FirstMatch => candidates.next().map(|(i, _)| i),
            HitPolicy::LastMatch => candidates.last().map(|(i, _)| i),
            // min_by_key keeps the first of equal keys
            HitPolicy::Nearest => candidates
                .min_by_key(|(_, p)| p.distance_squared(query))
                .map(|(i, _)| i),
        }
    }
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new()
    }
}
