use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use voyago_core::BookingReference;
use voyago_inventory::{PriceBreakdown, TravelKind};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

/// One passenger paired with the unit they were assigned, in click order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitAssignment {
    pub passenger: Passenger,
    pub unit_id: String,
}

/// A finalized booking. Created exactly once per successful confirmation
/// and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub reference: BookingReference,
    pub kind: TravelKind,
    /// Itinerary display label, e.g. "IndiGo IN482".
    pub itinerary: String,
    /// "DEL → BOM" style route summary.
    pub route: String,
    pub travel_date: NaiveDate,
    pub passengers: Vec<Passenger>,
    /// First passenger gets the first selected unit, and so on. Empty for
    /// bookings without a unit layout (hotels).
    pub assignments: Vec<UnitAssignment>,
    pub contact: ContactInfo,
    pub price: PriceBreakdown,
    pub created_at: DateTime<Utc>,
}
