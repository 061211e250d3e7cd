use crate::map::InventoryError;
use crate::pricing::PricingRules;
use crate::unit::LayoutKind;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// What is being booked. Hotels have no unit layout, so hotel sessions run
/// without a selection map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelKind {
    Flight,
    Train,
    Hotel,
}

/// Search form fields the provider needs to produce candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub kind: TravelKind,
    pub origin: String,
    pub destination: String,
    pub travel_date: NaiveDate,
    pub passengers: usize,
    /// Cabin/coach class label, e.g. "Economy" or "Sleeper (SL)".
    pub class: String,
    /// Inclusive fare bounds; candidates outside are dropped.
    #[serde(default)]
    pub price_range: Option<(i64, i64)>,
}

/// Layout parameters for the unit map accompanying a search result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutParams {
    pub layout: LayoutKind,
    pub rows: u32,
    pub units_per_row: usize,
}

/// One candidate itinerary (a flight, a train run, or a hotel stay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: Uuid,
    /// Display label, e.g. "IndiGo IN482" or "Rajdhani Express (12301)".
    pub label: String,
    pub departs: Option<String>,
    pub arrives: Option<String>,
    pub duration_hours: u32,
    pub stops: u32,
    /// Per-passenger fare in whole rupees.
    pub base_fare: i64,
}

/// Everything a session needs after one search: candidates, the unit
/// layout (absent for hotels or when nothing matched), the simulated
/// taken snapshot, and the pricing rules for this result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub itineraries: Vec<Itinerary>,
    pub layout: Option<LayoutParams>,
    pub taken_ids: HashSet<String>,
    pub pricing: PricingRules,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }
}

/// Supplies candidate itineraries and layout data for one search.
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResponse, InventoryError>;
}
