//! Tooltip selection state.
//!
//! At most one point shows its tooltip at a time. Tapping a point selects
//! it; tapping the selected point again clears the selection, and tapping a
//! different point switches to it directly.

use log::debug;

use paytrail_core::identifier::Id;

use crate::semantic::DataPoint;

/// Which point, if any, currently shows its tooltip.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    #[default]
    Idle,
    Active(Id),
}

/// Owns the [`TooltipState`] and applies tap events to it.
///
/// # Examples
///
/// ```
/// use paytrail::identifier::Id;
/// use paytrail::tooltip::{TooltipController, TooltipState};
///
/// let mut tooltip = TooltipController::new();
/// let a = Id::new("a");
///
/// assert_eq!(tooltip.tap(a), TooltipState::Active(a));
/// assert_eq!(tooltip.tap(a), TooltipState::Idle);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TooltipController {
    state: TooltipState,
}

impl TooltipController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    /// Toggles `id` and returns the new state.
    pub fn tap(&mut self, id: Id) -> TooltipState {
        self.state = match self.state {
            TooltipState::Active(active) if active == id => TooltipState::Idle,
            _ => TooltipState::Active(id),
        };
        debug!(id:% = id, state:? = self.state; "Tooltip tapped");
        self.state
    }

    pub fn clear(&mut self) {
        self.state = TooltipState::Idle;
    }

    pub fn is_active(&self, id: Id) -> bool {
        self.state == TooltipState::Active(id)
    }

    pub fn active(&self) -> Option<Id> {
        match self.state {
            TooltipState::Idle => None,
            TooltipState::Active(id) => Some(id),
        }
    }
}

/// Text shown in a point's tooltip: its value, else the first line of its
/// note. `None` means the point has no tooltip.
pub fn tooltip_content(point: &DataPoint) -> Option<&str> {
    point
        .value()
        .or_else(|| point.note().and_then(|note| note.lines().next()))
}
