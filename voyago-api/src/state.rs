use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use voyago_booking::SelectionState;
use voyago_core::SessionId;
use voyago_inventory::{
    InventoryMap, InventoryProvider, Itinerary, PricingRules, SearchCriteria,
};
use voyago_store::app_config::BookingRules;
use voyago_store::MemoryBookingStore;

/// Everything one search session owns: the last search result, the unit
/// map (absent for hotels or empty results), the live selection and the
/// session's booking history. A new search replaces map and selection
/// wholesale; the history survives until cleared.
pub struct Session {
    pub criteria: SearchCriteria,
    pub itineraries: Vec<Itinerary>,
    pub pricing: PricingRules,
    pub map: Option<InventoryMap>,
    pub selection: SelectionState,
    pub store: MemoryBookingStore,
}

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn InventoryProvider>,
    /// Per-session state. The write lock makes each user interaction a
    /// discrete, fully-processed event; sessions never share selection
    /// state or inventory.
    pub sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    pub booking_rules: BookingRules,
}

impl AppState {
    pub fn new(provider: Arc<dyn InventoryProvider>, booking_rules: BookingRules) -> Self {
        Self {
            provider,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            booking_rules,
        }
    }
}
