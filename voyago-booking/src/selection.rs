use serde::{Deserialize, Serialize};
use voyago_inventory::InventoryMap;

/// Result of one toggle attempt. Illegal toggles are outcomes, not errors:
/// a click on a disabled control must have no visible effect, and the
/// engine is the final authority even if the UI failed to disable it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    UnknownUnit,
    UnitTaken,
    CapacityReached,
}

/// Per-session selection of inventory units, bounded by the passenger
/// count. The order of `selected` is click order; it is zipped positionally
/// with the passenger list at confirmation time.
///
/// Invariants, maintained by `toggle`:
/// - no duplicate ids,
/// - never contains a taken unit,
/// - never exceeds capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionState {
    selected: Vec<String>,
    capacity: usize,
}

impl SelectionState {
    /// Capacity is an explicit, required parameter equal to the requested
    /// passenger count.
    pub fn new(capacity: usize) -> Self {
        Self {
            selected: Vec::new(),
            capacity,
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.selected.len())
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.capacity
    }

    pub fn is_selected(&self, unit_id: &str) -> bool {
        self.selected.iter().any(|id| id == unit_id)
    }

    /// Toggle one unit. Deterministic in `(self, unit_id, map)`:
    ///
    /// - unknown or taken units are rejected with no state change,
    /// - a selected unit is deselected (always legal),
    /// - otherwise the unit is selected if capacity allows, appended at the
    ///   end (re-selecting a previously deselected unit does not restore
    ///   its old position).
    pub fn toggle(&mut self, map: &InventoryMap, unit_id: &str) -> ToggleOutcome {
        if !map.contains(unit_id) {
            tracing::debug!(unit_id, "Toggle rejected: unit not in layout");
            return ToggleOutcome::Rejected(RejectReason::UnknownUnit);
        }
        if map.is_taken(unit_id) {
            return ToggleOutcome::Rejected(RejectReason::UnitTaken);
        }
        if let Some(position) = self.selected.iter().position(|id| id == unit_id) {
            self.selected.remove(position);
            return ToggleOutcome::Deselected;
        }
        if self.is_full() {
            return ToggleOutcome::Rejected(RejectReason::CapacityReached);
        }
        self.selected.push(unit_id.to_string());
        ToggleOutcome::Selected
    }
}
