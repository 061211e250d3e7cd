use crate::unit::{InventoryUnit, LayoutKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The generated layout of inventory units for one search result, plus
/// which units are already occupied by other passengers.
///
/// Immutable once built; a new search replaces the whole map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryMap {
    layout: LayoutKind,
    rows: u32,
    units_per_row: usize,
    units: Vec<InventoryUnit>,
    taken: HashSet<String>,
}

impl InventoryMap {
    /// Build a row-major map. Unit ids are `{row}{label}` with 1-based rows,
    /// e.g. "3B" for a cabin or "2UB" for a coach.
    pub fn build(
        layout: LayoutKind,
        rows: u32,
        units_per_row: usize,
        taken_ids: HashSet<String>,
    ) -> Result<Self, InventoryError> {
        let labels = layout.labels();
        if rows == 0 || units_per_row == 0 {
            return Err(InventoryError::InvalidConfiguration(format!(
                "layout must have at least one row and one unit per row (got {}x{})",
                rows, units_per_row
            )));
        }
        if units_per_row > labels.len() {
            return Err(InventoryError::InvalidConfiguration(format!(
                "{} units per row exceeds the {} available labels",
                units_per_row,
                labels.len()
            )));
        }

        let mut units = Vec::with_capacity(rows as usize * units_per_row);
        for row in 1..=rows {
            for position in 0..units_per_row {
                units.push(InventoryUnit {
                    id: format!("{}{}", row, labels[position]),
                    kind: layout.kind_at(position),
                });
            }
        }

        for id in &taken_ids {
            if !units.iter().any(|u| &u.id == id) {
                return Err(InventoryError::InvalidConfiguration(format!(
                    "taken unit {} is not part of the layout",
                    id
                )));
            }
        }

        Ok(Self {
            layout,
            rows,
            units_per_row,
            units,
            taken: taken_ids,
        })
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    pub fn units(&self) -> &[InventoryUnit] {
        &self.units
    }

    pub fn taken(&self) -> &HashSet<String> {
        &self.taken
    }

    pub fn contains(&self, unit_id: &str) -> bool {
        self.units.iter().any(|u| u.id == unit_id)
    }

    pub fn is_taken(&self, unit_id: &str) -> bool {
        self.taken.contains(unit_id)
    }

    /// Row-major grouping for grid rendering.
    pub fn grid_rows(&self) -> impl Iterator<Item = &[InventoryUnit]> {
        self.units.chunks(self.units_per_row)
    }

    /// Units not taken by other passengers.
    pub fn open_count(&self) -> usize {
        self.units.len() - self.taken.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Invalid layout configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Provider search failed: {0}")]
    ProviderFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taken(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cabin_map_ids_are_row_major() {
        let map = InventoryMap::build(LayoutKind::FlightCabin, 2, 6, HashSet::new()).unwrap();
        let ids: Vec<&str> = map.units().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["1A", "1B", "1C", "1D", "1E", "1F", "2A", "2B", "2C", "2D", "2E", "2F"]
        );
    }

    #[test]
    fn test_coach_map_ids() {
        let map = InventoryMap::build(LayoutKind::TrainCoach, 3, 4, HashSet::new()).unwrap();
        assert_eq!(map.units().len(), 12);
        assert_eq!(map.units()[0].id, "1LB");
        assert_eq!(map.units()[11].id, "3SL");
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            InventoryMap::build(LayoutKind::FlightCabin, 0, 6, HashSet::new()),
            Err(InventoryError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            InventoryMap::build(LayoutKind::FlightCabin, 6, 0, HashSet::new()),
            Err(InventoryError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_units_per_row_bounded_by_labels() {
        assert!(InventoryMap::build(LayoutKind::TrainCoach, 3, 5, HashSet::new()).is_err());
        assert!(InventoryMap::build(LayoutKind::FlightCabin, 3, 7, HashSet::new()).is_err());
        assert!(InventoryMap::build(LayoutKind::FlightCabin, 3, 6, HashSet::new()).is_ok());
    }

    #[test]
    fn test_taken_must_belong_to_layout() {
        let result = InventoryMap::build(LayoutKind::FlightCabin, 2, 4, taken(&["9Z"]));
        assert!(matches!(
            result,
            Err(InventoryError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_taken_and_open_counts() {
        let map =
            InventoryMap::build(LayoutKind::TrainCoach, 3, 4, taken(&["1LB", "2MB"])).unwrap();
        assert!(map.is_taken("1LB"));
        assert!(!map.is_taken("1UB"));
        assert_eq!(map.open_count(), 10);
    }

    #[test]
    fn test_grid_rows_shape() {
        let map = InventoryMap::build(LayoutKind::FlightCabin, 4, 6, HashSet::new()).unwrap();
        let rows: Vec<_> = map.grid_rows().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 6));
    }
}
