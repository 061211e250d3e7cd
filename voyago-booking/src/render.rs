use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};
use voyago_inventory::{InventoryMap, UnitKind};

/// Presentational classification of one unit. Derived, never stored: the
/// only persisted selection state is the id list inside `SelectionState`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitStatus {
    Taken,
    Selected,
    Selectable,
    Blocked,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedUnit {
    pub id: String,
    pub kind: UnitKind,
    pub status: UnitStatus,
}

/// Pure render model for the seat/berth grid. Recomputed from scratch after
/// every toggle; the UI layer redraws from this and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMapView {
    pub rows: Vec<Vec<RenderedUnit>>,
    pub capacity: usize,
    pub remaining: usize,
}

impl SeatMapView {
    pub fn render(map: &InventoryMap, selection: &SelectionState) -> Self {
        let at_capacity = selection.is_full();
        let rows = map
            .grid_rows()
            .map(|row| {
                row.iter()
                    .map(|unit| {
                        let status = if map.is_taken(&unit.id) {
                            UnitStatus::Taken
                        } else if selection.is_selected(&unit.id) {
                            UnitStatus::Selected
                        } else if at_capacity {
                            UnitStatus::Blocked
                        } else {
                            UnitStatus::Selectable
                        };
                        RenderedUnit {
                            id: unit.id.clone(),
                            kind: unit.kind,
                            status,
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            capacity: selection.capacity(),
            remaining: selection.remaining(),
        }
    }

    fn statuses(&self) -> impl Iterator<Item = (&str, UnitStatus)> {
        self.rows
            .iter()
            .flatten()
            .map(|u| (u.id.as_str(), u.status))
    }

    /// Status lookup, mostly for tests and display glue.
    pub fn status_of(&self, unit_id: &str) -> Option<UnitStatus> {
        self.statuses()
            .find(|(id, _)| *id == unit_id)
            .map(|(_, status)| status)
    }
}
