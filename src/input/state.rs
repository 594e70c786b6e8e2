//! Interaction state - which half of a pair or which relocation is in flight.
//!
//! ## State Transitions
//!
//! ```text
//! Idle          -> Pending(side)     (primary on side)
//! Pending(side) -> Idle              (primary on opposite side, pair committed)
//! Idle          -> DragArmed(side)   (secondary hits a stored point on side)
//! DragArmed(s)  -> Idle              (primary on s, point relocated)
//! ```
//!
//! Everything else leaves the state unchanged.

use crate::types::Side;

/// Unified state for the correspondence interaction.
///
/// The drag target index only exists inside `DragArmed`, so a relocation
/// can never observe a cleared target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No selection pending, no relocation armed
    #[default]
    Idle,

    /// One point placed, waiting for its counterpart on the other side
    Pending { side: Side },

    /// A stored point was picked up and waits for its new location
    DragArmed { side: Side, index: usize },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Side holding the unpaired point, if a selection is pending
    pub fn pending_side(&self) -> Option<Side> {
        match self {
            Self::Pending { side } => Some(*side),
            _ => None,
        }
    }

    /// Side and index of the armed point, if a relocation is armed
    pub fn drag_target(&self) -> Option<(Side, usize)> {
        match self {
            Self::DragArmed { side, index } => Some((*side, *index)),
            _ => None,
        }
    }

    pub fn is_drag_armed(&self) -> bool {
        matches!(self, Self::DragArmed { .. })
    }
}
