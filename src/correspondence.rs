//! Correspondence store - the two ordered point sequences.
//!
//! Index `i` of `left` and index `i` of `right` form one pair. The
//! interaction state machine is the only mutator and keeps both sequences
//! the same length whenever no single-sided selection is pending.

use crate::error::{CorrespondenceError, CorrespondenceResult};
use crate::types::{Point2D, Side};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorrespondenceStore {
    left: Vec<Point2D>,
    right: Vec<Point2D>,
}

impl CorrespondenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point to `side`, returning its index.
    pub fn append(&mut self, side: Side, point: Point2D) -> usize {
        let points = self.points_mut(side);
        points.push(point);
        points.len() - 1
    }

    pub fn append_left(&mut self, point: Point2D) -> usize {
        self.append(Side::Left, point)
    }

    pub fn append_right(&mut self, point: Point2D) -> usize {
        self.append(Side::Right, point)
    }

    /// Move the point at `index` on `side` to `point`.
    pub fn set(&mut self, side: Side, index: usize, point: Point2D) -> CorrespondenceResult<()> {
        let points = self.points_mut(side);
        let len = points.len();
        let slot = points
            .get_mut(index)
            .ok_or(CorrespondenceError::IndexOutOfRange { side, index, len })?;
        *slot = point;
        Ok(())
    }

    pub fn set_left(&mut self, index: usize, point: Point2D) -> CorrespondenceResult<()> {
        self.set(Side::Left, index, point)
    }

    pub fn set_right(&mut self, index: usize, point: Point2D) -> CorrespondenceResult<()> {
        self.set(Side::Right, index, point)
    }

    pub fn points(&self, side: Side) -> &[Point2D] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn points_mut(&mut self, side: Side) -> &mut Vec<Point2D> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn left(&self) -> &[Point2D] {
        &self.left
    }

    pub fn right(&self) -> &[Point2D] {
        &self.right
    }

    pub fn len(&self, side: Side) -> usize {
        self.points(side).len()
    }

    /// True when neither side holds a point
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// True when both sides hold at least one point
    pub fn has_both_sides(&self) -> bool {
        !self.left.is_empty() && !self.right.is_empty()
    }

    pub fn is_balanced(&self) -> bool {
        self.left.len() == self.right.len()
    }

    /// Number of complete pairs. Equal to either length when balanced.
    pub fn committed_pair_count(&self) -> usize {
        self.left.len().min(self.right.len())
    }

    /// Complete pairs in index order.
    pub fn all_pairs(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        self.left.iter().copied().zip(self.right.iter().copied())
    }

    /// Newest left and newest right point, if both sides are non-empty.
    pub fn last_pair(&self) -> Option<(Point2D, Point2D)> {
        Some((*self.left.last()?, *self.right.last()?))
    }
}
