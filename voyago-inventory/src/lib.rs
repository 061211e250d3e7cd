pub mod map;
pub mod mock;
pub mod pricing;
pub mod provider;
pub mod unit;

pub use map::{InventoryError, InventoryMap};
pub use mock::MockProvider;
pub use pricing::{
    AddonPrices, AddonSelection, BaggageAllowance, MealPreference, PriceBreakdown, PricingRules,
};
pub use provider::{
    Itinerary, InventoryProvider, LayoutParams, SearchCriteria, SearchResponse, TravelKind,
};
pub use unit::{InventoryUnit, LayoutKind, UnitKind};
