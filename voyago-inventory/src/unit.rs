use serde::{Deserialize, Serialize};

/// Presentational category of a unit, derived from its position in the row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitKind {
    Window,
    Middle,
    Aisle,
    LowerBerth,
    UpperBerth,
    MiddleBerth,
    SideLower,
}

/// One bookable slot (a seat or a berth) with a stable identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryUnit {
    pub id: String,
    pub kind: UnitKind,
}

/// Physical layout family. Picks the label set and the kind derivation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutKind {
    FlightCabin,
    TrainCoach,
}

const SEAT_LABELS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
const BERTH_LABELS: [&str; 4] = ["LB", "UB", "MB", "SL"];

impl LayoutKind {
    /// Position labels within one row. `units_per_row` may not exceed this.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            LayoutKind::FlightCabin => &SEAT_LABELS,
            LayoutKind::TrainCoach => &BERTH_LABELS,
        }
    }

    /// Unit kind for a 0-based position in the row.
    ///
    /// Cabins: A and F are window seats, C and D aisle, the rest middle.
    /// Coaches: lower, upper, middle, side-lower in label order.
    pub fn kind_at(&self, position: usize) -> UnitKind {
        match self {
            LayoutKind::FlightCabin => match SEAT_LABELS[position] {
                "A" | "F" => UnitKind::Window,
                "C" | "D" => UnitKind::Aisle,
                _ => UnitKind::Middle,
            },
            LayoutKind::TrainCoach => match BERTH_LABELS[position] {
                "LB" => UnitKind::LowerBerth,
                "UB" => UnitKind::UpperBerth,
                "MB" => UnitKind::MiddleBerth,
                _ => UnitKind::SideLower,
            },
        }
    }
}
